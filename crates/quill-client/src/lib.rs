//! # quill-client
//!
//! The Quill blog-management client: routes and the session guard, the
//! injected application state (local storage + posts API client), and the
//! command modules behind each view. The `quill` binary in `main.rs` maps
//! CLI subcommands onto routes and renders the resulting views as text.

pub mod commands;
pub mod config;
pub mod pagination;
pub mod router;
pub mod state;

mod error;

pub use error::ClientError;

use tracing_subscriber::EnvFilter;

/// Initialize tracing (respects the `RUST_LOG` env var).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,quill_client=debug,quill_api=debug,quill_store=debug")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
