use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Empty response body")]
    NoData,

    #[error("Failed to decode response body")]
    DecodingFailed,

    #[error("Server returned status {0}")]
    ServerError(u16),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
