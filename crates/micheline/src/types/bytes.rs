//! Raw Michelson `bytes`, carried as hex in JSON.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hex::{from_hex, to_hex};
use crate::{Micheline, ToMicheline};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(item: Vec<u8>) -> Self {
        Self(item)
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(item: Bytes) -> Self {
        item.0
    }
}

impl ToMicheline for Bytes {
    fn to_micheline(&self) -> Micheline {
        Micheline::Bytes(self.0.clone())
    }
}

impl Serialize for Bytes {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(&self.0))
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_string: String = Deserialize::deserialize(deserializer)?;
        from_hex(&hex_string)
            .map(Bytes)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_serde() {
        let b = Bytes(vec![0x05, 0x00, 0x07]);
        assert_eq!(serde_json::to_string(&b).unwrap(), "\"050007\"");

        let back: Bytes = serde_json::from_str("\"0x050007\"").unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn test_bytes_to_micheline() {
        assert_eq!(
            Bytes(vec![0xff]).to_micheline(),
            Micheline::Bytes(vec![0xff])
        );
    }
}
