//! Injected application state.
//!
//! Instead of every view reading local storage ad hoc, the session context
//! is loaded once at startup into [`AppState`] and passed to every command.
//! Mutations (login, logout) update the in-memory copy and the persisted
//! record together.

use quill_api::{ApiConfig, PostsClient};
use quill_shared::Session;
use quill_store::{FavouriteSet, Storage, StoreError};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Central application state handed to every command.
pub struct AppState {
    /// Local persisted state (account, session, favourites).
    pub storage: Storage,

    /// HTTP client for the posts backend.
    pub posts: PostsClient,

    /// Posts per dashboard/analytics page.
    pub page_size: usize,

    /// Decoded session, if one exists and parses. Kept in sync with
    /// storage by the auth commands.
    session: Option<Session>,

    /// Whether a session record exists at all. Route gating uses this,
    /// not `session`: existence gates access even when the record is
    /// unreadable.
    session_raw_present: bool,

    /// Display name derived at login, if any.
    display_name: Option<String>,
}

impl AppState {
    /// Open storage and load the session context.
    pub fn init(config: &ClientConfig) -> Result<Self, ClientError> {
        let storage = Storage::open()?;
        Self::with_storage(storage, config)
    }

    /// Build state over an already-opened store (tests use this with a
    /// temporary directory).
    pub fn with_storage(storage: Storage, config: &ClientConfig) -> Result<Self, ClientError> {
        let session_raw_present = storage.session_present();

        let session = match storage.load_session() {
            Ok(s) => s,
            Err(e @ StoreError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "session record unreadable");
                None
            }
            Err(e) => return Err(e.into()),
        };

        let display_name = match storage.load_display_name() {
            Ok(n) => n,
            Err(e @ StoreError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "display name unreadable");
                None
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            posts: PostsClient::new(&config.api),
            page_size: config.page_size,
            session,
            session_raw_present,
            display_name,
            storage,
        })
    }

    /// Offline state for commands that never touch the network.
    pub fn with_storage_offline(storage: Storage) -> Result<Self, ClientError> {
        Self::with_storage(
            storage,
            &ClientConfig {
                api: ApiConfig::default(),
                page_size: 5,
            },
        )
    }

    pub fn session_present(&self) -> bool {
        self.session_raw_present
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Record a fresh session (called by login after persisting it).
    pub(crate) fn set_session(&mut self, session: Session, display_name: String) {
        self.session = Some(session);
        self.session_raw_present = true;
        self.display_name = Some(display_name);
    }

    /// Drop the in-memory session (called by logout after clearing
    /// storage).
    pub(crate) fn drop_session(&mut self) {
        self.session = None;
        self.session_raw_present = false;
        self.display_name = None;
    }

    /// The favourites ledger, started empty when the persisted value is
    /// corrupt (logged, not fatal — matching how views treated unreadable
    /// storage).
    pub fn favourites(&self) -> Result<FavouriteSet<'_>, ClientError> {
        match self.storage.load_favourites() {
            Ok(favs) => Ok(favs),
            Err(e @ StoreError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "favourites unreadable, starting empty");
                Ok(FavouriteSet::empty(&self.storage))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_store::keys;

    #[test]
    fn corrupt_session_still_gates_routes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(dir.path()).unwrap();
        storage.put_raw(keys::SESSION, "garbage").unwrap();

        let state = AppState::with_storage_offline(storage).unwrap();
        assert!(state.session_present());
        assert!(state.session().is_none());
    }

    #[test]
    fn corrupt_favourites_start_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(dir.path()).unwrap();
        storage.put_raw(keys::FAVOURITES, "{oops").unwrap();

        let state = AppState::with_storage_offline(storage).unwrap();
        let favs = state.favourites().unwrap();
        assert!(favs.is_empty());
    }
}
