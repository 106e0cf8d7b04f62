//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client runs with zero configuration
//! against a local backend.

use quill_api::ApiConfig;

/// Top-level client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Posts backend settings (`QUILL_API_URL`).
    pub api: ApiConfig,

    /// Posts shown per dashboard/analytics page.
    /// Env: `QUILL_PAGE_SIZE`
    /// Default: `5`
    pub page_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            page_size: 5,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self {
            api: ApiConfig::from_env(),
            ..Self::default()
        };

        if let Ok(val) = std::env::var("QUILL_PAGE_SIZE") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.page_size = n,
                _ => {
                    tracing::warn!(value = %val, "Invalid QUILL_PAGE_SIZE, using default");
                }
            }
        }

        config
    }
}
