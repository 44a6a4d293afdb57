use thiserror::Error;

/// Failure of a search or recipe fetch.
///
/// Network errors, non-success statuses and malformed payloads are all
/// reported to the user the same way; the variants only exist for logging.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The payload did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Errors that can occur in the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Failed to fetch search results or recipe details
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// A value supplied by the user was rejected
    #[error("Invalid value: {0}")]
    Validation(String),

    /// The key/value store could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
