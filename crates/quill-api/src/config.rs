//! API client configuration loaded from environment variables.
//!
//! There is exactly one backend base URL; every operation goes through
//! the one configured address.

/// Posts backend configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    /// Env: `QUILL_API_URL`
    /// Default: `http://localhost:5000`
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("QUILL_API_URL") {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                tracing::warn!("QUILL_API_URL is empty, using default");
            } else {
                config.base_url = url.to_string();
            }
        }

        config
    }

    /// A config pointing at an explicit base URL (tests, mock servers).
    pub fn with_base_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }
}
