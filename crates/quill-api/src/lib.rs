//! # quill-api
//!
//! HTTP client for the posts backend: plain CRUD against a single
//! configured base URL serving a JSON `posts` collection. There is no
//! caching, no retry, and no transport-level pagination; every view
//! re-fetches what it needs.

pub mod client;
pub mod config;

mod error;

pub use client::PostsClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
