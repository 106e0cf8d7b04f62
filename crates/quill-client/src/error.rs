use quill_shared::FieldErrors;
use thiserror::Error;

/// Errors surfaced by the command layer.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Store(#[from] quill_store::StoreError),

    #[error(transparent)]
    Api(#[from] quill_api::ApiError),

    /// One or more form fields failed validation; rendered inline, one
    /// line per field.
    #[error("{0}")]
    Validation(#[from] FieldErrors),

    /// Login rejection. Deliberately does not distinguish "no account
    /// registered" from "wrong password".
    #[error("Invalid email or password")]
    InvalidCredentials,
}
