use thiserror::Error;


#[derive(Error, Debug)]
pub enum DalilError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream source error: {0}")]
    Source(String),

    #[error("Aggregation error: {0}")]
    Aggregation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}


pub type Result<T> = std::result::Result<T, DalilError>;
