use thiserror::Error;

/// Failure modes of a single remote fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint '{base}': {source}")]
    InvalidUrl {
        base: String,
        #[source]
        source: url::ParseError,
    },
}

/// A guess that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("'{0}' is not a valid number")]
    NotANumber(String),
}
