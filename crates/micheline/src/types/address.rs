//! Tezos addresses.
//!
//! In JSON and in unpacked parameters an address is its base58check string.
//! Packed as `address`, it becomes 22 bytes:
//! - implicit accounts: `0x00`, the curve tag, then the 20 bytes key hash.
//! - originated contracts: `0x01`, the 20 bytes contract hash, then a `0x00`
//!   padding byte.
use std::fmt;

use crate::hex::to_hex;
use crate::{Error, Micheline, Result, ToMicheline};

const HASH_LEN: usize = 20;
const BINARY_LEN: usize = 22;

/// base58check prefix and binary tag of each supported address kind.
const KINDS: [(&str, [u8; 3], [u8; 2]); 4] = [
    ("tz1", [6, 161, 159], [0x00, 0x00]),
    ("tz2", [6, 161, 161], [0x00, 0x01]),
    ("tz3", [6, 161, 164], [0x00, 0x02]),
    ("tz4", [6, 161, 166], [0x00, 0x03]),
];

const KT1_PREFIX: [u8; 3] = [2, 90, 121];
const KT1_TAG: u8 = 0x01;

/// A Tezos address, kept in its base58check form.
///
/// No validation happens on construction, parameters carrying a malformed
/// address are left for the contract to reject. Validation happens when the
/// binary form is requested.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is an originated contract (`KT1`) address.
    pub fn is_contract(&self) -> bool {
        self.0.starts_with("KT1")
    }

    /// Binary form used by `PACK`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let decoded = bs58::decode(&self.0)
            .with_check(None)
            .into_vec()
            .map_err(|e| Error::InvalidAddress(self.0.clone(), e.to_string()))?;

        if decoded.len() != 3 + HASH_LEN {
            return Err(Error::InvalidAddress(
                self.0.clone(),
                format!("unexpected payload length {}", decoded.len()),
            ));
        }

        let (prefix, hash) = decoded.split_at(3);

        if prefix == KT1_PREFIX {
            let mut out = Vec::with_capacity(BINARY_LEN);
            out.push(KT1_TAG);
            out.extend_from_slice(hash);
            out.push(0x00);
            return Ok(out);
        }

        let (_, _, tag) = KINDS
            .iter()
            .find(|(_, p, _)| prefix == p)
            .ok_or_else(|| Error::InvalidAddress(self.0.clone(), "unknown prefix".to_string()))?;

        let mut out = Vec::with_capacity(BINARY_LEN);
        out.extend_from_slice(tag);
        out.extend_from_slice(hash);
        Ok(out)
    }

    /// Reads an address back from its binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let invalid =
            |msg: &str| Error::InvalidAddress(format!("0x{}", to_hex(bytes)), msg.to_string());

        if bytes.len() != BINARY_LEN {
            return Err(invalid("binary address must be 22 bytes"));
        }

        let (prefix, hash) = if bytes[0] == KT1_TAG {
            if bytes[BINARY_LEN - 1] != 0x00 {
                return Err(invalid("missing contract padding"));
            }
            (KT1_PREFIX, &bytes[1..1 + HASH_LEN])
        } else {
            let (_, prefix, _) = KINDS
                .iter()
                .find(|(_, _, tag)| bytes[..2] == tag[..])
                .ok_or_else(|| invalid("unknown address tag"))?;
            (*prefix, &bytes[2..])
        };

        let payload = [&prefix[..], hash].concat();
        Ok(Self(bs58::encode(payload).with_check().into_string()))
    }
}

impl From<&str> for Address {
    fn from(item: &str) -> Self {
        Self::new(item)
    }
}

impl From<String> for Address {
    fn from(item: String) -> Self {
        Self(item)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ToMicheline for Address {
    fn to_micheline(&self) -> Micheline {
        Micheline::String(self.0.clone())
    }
}
