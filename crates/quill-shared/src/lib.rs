//! # quill-shared
//!
//! Domain types and form validation shared by every Quill crate: the
//! account/session records kept in local storage, the post model exchanged
//! with the backend, and the field-level validation rules for the register
//! and login forms.

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{validate_login, validate_register, FieldErrors};
