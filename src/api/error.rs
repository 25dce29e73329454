use reqwest::StatusCode;
use thiserror::Error;

/// Failure to retrieve a price history from an upstream provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Missing API key: set {0} in the environment")]
    MissingApiKey(&'static str),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("Request failed: {0}")]
    Status(StatusCode),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No price history for symbol {0}")]
    NoData(String),

    #[error("Yahoo Finance: {0}")]
    Yahoo(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
