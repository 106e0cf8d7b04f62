//! The fixed storage keys.
//!
//! Each key holds one JSON-serialized value. There is no schema version
//! and no migration; a key either decodes or is corrupt.

/// The single registered [`Account`](quill_shared::Account).
pub const ACCOUNT: &str = "authData";

/// The current [`Session`](quill_shared::Session), if logged in.
pub const SESSION: &str = "loginData";

/// Display name derived at login (account username or email local part).
pub const DISPLAY_NAME: &str = "username";

/// The favourites ledger: a JSON array of post-id strings.
pub const FAVOURITES: &str = "favourite";

/// Every key the store manages, in no particular order.
pub const ALL: &[&str] = &[ACCOUNT, SESSION, DISPLAY_NAME, FAVOURITES];
