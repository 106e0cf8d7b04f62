//! Domain model structs.
//!
//! Everything here derives `Serialize` and `Deserialize`: the account and
//! session records are persisted as JSON in local storage, and `Post` /
//! `PostDraft` travel over the wire to the backend (camelCase field names,
//! matching what the backend serves).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Post id
// ---------------------------------------------------------------------------

/// Server-assigned post identifier.
///
/// The backend emits ids as JSON numbers or strings depending on how the
/// record was created, so deserialization accepts both and normalises to a
/// string. Ids are immutable after creation and opaque to the client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct PostId(pub String);

impl PostId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PostId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => PostId(n.to_string()),
            Raw::Str(s) => PostId(s),
        })
    }
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A blog post as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Server-assigned id, immutable after creation.
    pub id: PostId,
    pub title: String,
    /// Free-text author name. Not a reference to any account.
    pub author: String,
    pub description: String,
    /// Image URL or embedded data URI.
    #[serde(default)]
    pub image: String,
    /// Display date stamped by the client at creation time.
    #[serde(default)]
    pub created_at: String,
}

/// Fields submitted when creating or fully replacing a post.
///
/// The id is never part of the body: the backend assigns it on create and
/// takes it from the URL on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub description: String,
    pub image: String,
    pub created_at: String,
}

/// Today's date rendered the way post cards display it (`MM/DD/YYYY`).
pub fn today_stamp() -> String {
    chrono::Local::now().format("%m/%d/%Y").to_string()
}

// ---------------------------------------------------------------------------
// Account & session
// ---------------------------------------------------------------------------

/// The single registered account, persisted locally in plaintext.
///
/// Registration overwrites any previous account; there is no uniqueness
/// check and no hashing. `confirmPassword` is validated but never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Marker of a logged-in user: a copy of the credentials that matched the
/// stored [`Account`] at login time. Its mere existence gates route access;
/// it is never revalidated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// Raw registration form input, validated by
/// [`validate_register`](crate::validate::validate_register).
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// The account record this form produces (confirm password dropped).
    pub fn into_account(self) -> Account {
        Account {
            username: self.username,
            email: self.email,
            password: self.password,
            phone: self.phone,
        }
    }
}

/// Raw login form input, validated by
/// [`validate_login`](crate::validate::validate_login).
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}
