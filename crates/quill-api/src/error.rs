use thiserror::Error;

/// Errors produced by the posts API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, timeout, or body-decode failure from the HTTP layer.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered 404 for a post id.
    #[error("Post not found")]
    NotFound,

    /// Any other non-success status.
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
