//! Hex helpers for Micheline byte leaves.
//!
//! Tezos JSON carries bytes as bare lowercase hex (no `0x`), while the
//! Michelson text form and most tooling accept an optional `0x` prefix.
use crate::{Error, Result};

/// Encodes bytes as lowercase hex, without prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decodes a hex string, with or without `0x` prefix.
pub fn from_hex(s: &str) -> Result<Vec<u8>> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if !digits.is_ascii() || digits.len() % 2 != 0 {
        return Err(Error::InvalidHex(s.to_string()));
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::InvalidHex(s.to_string()))
        })
        .collect()
}
