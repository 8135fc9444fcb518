//! Error types for the IPLM client.

use thiserror::Error;

/// Result type for IPLM client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// IPLM client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx HTTP response
    #[error("HTTP error ({status}): {body}")]
    Http { status: u16, body: String },

    /// Errors reported by the GraphQL server
    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("No data returned")]
    NoData,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response is missing an object the operation has to read
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Interactive credential entry failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Configuration error (invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),
}
