use num_bigint::BigInt;
use thiserror::Error;

/// Ledger result.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Micheline(#[from] auction_testkit_micheline::Error),
    #[error(transparent)]
    Provider(#[from] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("Invalid delta balance of {delta} tokens for {holder}")]
    InvalidDelta { delta: BigInt, holder: String },
    #[error("Invalid delta balance of {delta} tokens '{token}' for {holder}")]
    InvalidTokenDelta {
        delta: BigInt,
        token: u64,
        holder: String,
    },
    #[error("Invalid balance of: expected {expected}, got {got}")]
    InvalidBalance { expected: BigInt, got: BigInt },
    #[error("Unexpected ledger value {0}, an int was expected.")]
    UnexpectedValue(String),
}
