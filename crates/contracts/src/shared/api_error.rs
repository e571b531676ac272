use thiserror::Error;

/// Errors returned by API calls made from the client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("Server responded with HTTP {0}")]
    Http(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("{}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("Response contained no data")]
    MissingData,
}
