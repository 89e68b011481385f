//! JSON representation of Micheline, as used by the Tezos RPC and by
//! client libraries: `{"int": "5"}`, `{"string": "..."}`, `{"bytes": "00ff"}`,
//! arrays for sequences, and `{"prim": "Pair", "args": [...]}` for
//! primitive applications.
use std::str::FromStr;

use num_bigint::BigInt;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hex::{from_hex, to_hex};
use crate::node::{comb, left, right, some};
use crate::{Error, Micheline, Result};

impl Serialize for Micheline {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Micheline::Int(v) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("int", &v.to_string())?;
                map.end()
            }
            Micheline::String(s) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("string", s)?;
                map.end()
            }
            Micheline::Bytes(b) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("bytes", &to_hex(b))?;
                map.end()
            }
            Micheline::Seq(items) => items.serialize(serializer),
            prim => {
                let args = prim.prim_args();
                let len = if args.is_empty() { 1 } else { 2 };

                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("prim", prim.prim_name().unwrap_or_default())?;
                if !args.is_empty() {
                    map.serialize_entry("args", &args)?;
                }
                map.end()
            }
        }
    }
}

/// Shape of a Micheline JSON node before validation.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonNode {
    Int {
        int: String,
    },
    Str {
        string: String,
    },
    Bytes {
        bytes: String,
    },
    Prim {
        prim: String,
        #[serde(default)]
        args: Vec<Micheline>,
    },
    Seq(Vec<Micheline>),
}

impl TryFrom<JsonNode> for Micheline {
    type Error = Error;

    fn try_from(node: JsonNode) -> Result<Self> {
        match node {
            JsonNode::Int { int } => BigInt::from_str(&int)
                .map(Micheline::Int)
                .map_err(|_| Error::InvalidNode(format!("invalid int {:?}", int))),
            JsonNode::Str { string } => Ok(Micheline::String(string)),
            JsonNode::Bytes { bytes } => Ok(Micheline::Bytes(from_hex(&bytes)?)),
            JsonNode::Seq(items) => Ok(Micheline::Seq(items)),
            JsonNode::Prim { prim, args } => from_prim(&prim, args),
        }
    }
}

fn from_prim(prim: &str, mut args: Vec<Micheline>) -> Result<Micheline> {
    match (prim, args.len()) {
        // `Pair a b c` is a shorthand for `Pair a (Pair b c)`.
        ("Pair", n) if n >= 2 => Ok(comb(args)),
        ("Left", 1) => Ok(left(args.remove(0))),
        ("Right", 1) => Ok(right(args.remove(0))),
        ("Some", 1) => Ok(some(args.remove(0))),
        ("None", 0) => Ok(Micheline::None),
        ("Unit", 0) => Ok(Micheline::Unit),
        ("True", 0) => Ok(Micheline::True),
        ("False", 0) => Ok(Micheline::False),
        (prim, n) => Err(Error::InvalidNode(format!(
            "unsupported primitive {} with {} arguments",
            prim, n
        ))),
    }
}

impl<'de> Deserialize<'de> for Micheline {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = JsonNode::deserialize(deserializer)?;
        Micheline::try_from(node).map_err(serde::de::Error::custom)
    }
}
