//! Typed accessors for the account, session, and display-name keys.

use quill_shared::{Account, Session};

use crate::error::Result;
use crate::keys;
use crate::storage::Storage;

impl Storage {
    // ------------------------------------------------------------------
    // Account
    // ------------------------------------------------------------------

    /// Persist `account` as the sole registered account, overwriting any
    /// previous one.
    pub fn save_account(&self, account: &Account) -> Result<()> {
        tracing::info!(email = %account.email, "saving account");
        self.store(keys::ACCOUNT, account)
    }

    /// Load the registered account, if any.
    pub fn load_account(&self) -> Result<Option<Account>> {
        self.load(keys::ACCOUNT)
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Persist a session record after a successful login.
    pub fn save_session(&self, session: &Session) -> Result<()> {
        self.store(keys::SESSION, session)
    }

    /// Load the current session, if any.
    pub fn load_session(&self) -> Result<Option<Session>> {
        self.load(keys::SESSION)
    }

    /// Whether a session record exists at all. Route gating tests
    /// existence, not validity, so this deliberately ignores whether the
    /// record decodes.
    pub fn session_present(&self) -> bool {
        self.exists(keys::SESSION)
    }

    /// Remove the session and everything derived from it (display name).
    /// The account record itself survives logout.
    pub fn clear_session(&self) -> Result<()> {
        self.remove(keys::SESSION)?;
        self.remove(keys::DISPLAY_NAME)
    }

    // ------------------------------------------------------------------
    // Display name
    // ------------------------------------------------------------------

    /// Persist the display name derived at login.
    pub fn save_display_name(&self, name: &str) -> Result<()> {
        self.store(keys::DISPLAY_NAME, &name)
    }

    /// Load the derived display name, if any.
    pub fn load_display_name(&self) -> Result<Option<String>> {
        self.load(keys::DISPLAY_NAME)
    }
}
