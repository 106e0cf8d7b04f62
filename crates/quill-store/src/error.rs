use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (reading or writing a key file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted value exists but is not valid JSON for its type.
    /// Surfaced explicitly so corruption is observable instead of being
    /// silently replaced by a default.
    #[error("Corrupt value under key `{key}`: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize a value before writing it.
    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
