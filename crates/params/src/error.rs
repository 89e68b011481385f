use thiserror::Error;

/// Parameter builder result.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Micheline(#[from] auction_testkit_micheline::Error),
    #[error("Unknown asset kind {0:?}.")]
    UnknownAssetKind(String),
    #[error("Invalid start date {0:?}.")]
    InvalidStartDate(String),
}
