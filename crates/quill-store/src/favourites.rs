//! The favourites ledger: a persisted set of post-id strings.
//!
//! The ledger is independent of the backend. Ids may refer to posts that no
//! longer exist; views filter those out at render time and nothing ever
//! reconciles the set.

use quill_shared::PostId;

use crate::error::Result;
use crate::keys;
use crate::storage::Storage;

/// In-memory view of the persisted favourites set, bound to the storage it
/// came from. Every mutation writes the full set back immediately.
///
/// Insertion order is preserved so listings stay stable across toggles.
#[derive(Debug)]
pub struct FavouriteSet<'a> {
    storage: &'a Storage,
    ids: Vec<String>,
}

impl Storage {
    /// Load the favourites ledger. A corrupt value is an error here; the
    /// caller chooses whether starting empty is acceptable.
    pub fn load_favourites(&self) -> Result<FavouriteSet<'_>> {
        let ids: Vec<String> = self.load(keys::FAVOURITES)?.unwrap_or_default();
        Ok(FavouriteSet { storage: self, ids })
    }
}

impl<'a> FavouriteSet<'a> {
    /// An empty ledger bound to `storage`, for recovering from a corrupt
    /// persisted value.
    pub fn empty(storage: &'a Storage) -> Self {
        Self {
            storage,
            ids: Vec::new(),
        }
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.ids.iter().any(|f| f == id.as_str())
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of `id` and persist the set. Returns whether the id
    /// is a member after the call.
    pub fn toggle(&mut self, id: &PostId) -> Result<bool> {
        let now_member = if self.contains(id) {
            self.ids.retain(|f| f != id.as_str());
            false
        } else {
            self.ids.push(id.to_string());
            true
        };

        self.persist()?;
        tracing::debug!(id = %id, member = now_member, "toggled favourite");
        Ok(now_member)
    }

    /// Remove `id` if present and persist. A no-op for absent ids.
    pub fn remove(&mut self, id: &PostId) -> Result<()> {
        if self.contains(id) {
            self.ids.retain(|f| f != id.as_str());
            self.persist()?;
        }
        Ok(())
    }

    /// Empty the set and persist.
    pub fn clear(&mut self) -> Result<()> {
        self.ids.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.storage.store(keys::FAVOURITES, &self.ids)
    }
}
