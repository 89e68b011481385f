use num_bigint::BigInt;

/// Micheline result.
pub type Result<T> = core::result::Result<T, Error>;

/// A Micheline encoding error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid address {0:?}: {1}.")]
    InvalidAddress(String, String),
    #[error("Type mismatch: expected `{expected}`, found `{found}`.")]
    TypeMismatch { expected: String, found: String },
    #[error("Negative value {0} for a natural number type.")]
    NegativeNat(BigInt),
    #[error("Error during unpacking {0:?}.")]
    Unpack(String),
    #[error("Invalid hex string {0:?}.")]
    InvalidHex(String),
    #[error("Invalid Micheline node {0:?}.")]
    InvalidNode(String),
}
