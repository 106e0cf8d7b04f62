//! # quill-store
//!
//! Local persisted state for the Quill client, the stand-in for the
//! browser's local storage: a handful of fixed keys, each holding one
//! JSON-serialized value in its own file under the platform data directory.
//!
//! Parse failures are reported as [`StoreError::Corrupt`] at this boundary
//! rather than silently defaulted; callers decide whether an empty value is
//! an acceptable fallback.

pub mod favourites;
pub mod keys;
pub mod session;
pub mod storage;

mod error;

pub use error::{Result, StoreError};
pub use favourites::FavouriteSet;
pub use storage::Storage;
