use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    Params(#[from] auction_testkit_params::Error),
    #[error("An error occurred: {0}")]
    Other(String),
}

pub type TestkitCliResult<T, E = Error> = Result<T, E>;
