//! Key/value storage backed by one JSON file per key.
//!
//! The [`Storage`] struct owns the root directory and exposes a raw string
//! layer plus typed load/store helpers. Writes are plain read-modify-write
//! with last-writer-wins semantics, matching the storage model the client
//! was designed against.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::keys;

/// Handle to the on-disk key/value store.
#[derive(Debug)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open (or create) the default application store.
    ///
    /// The root is `$QUILL_DATA_DIR` when set, otherwise the
    /// platform-appropriate data directory:
    /// - Linux:   `~/.local/share/quill/`
    /// - macOS:   `~/Library/Application Support/com.quill.quill/`
    /// - Windows: `{FOLDERID_RoamingAppData}\quill\quill\data\`
    pub fn open() -> Result<Self> {
        if let Ok(dir) = std::env::var("QUILL_DATA_DIR") {
            if !dir.is_empty() {
                return Self::open_at(Path::new(&dir));
            }
        }

        let project_dirs =
            ProjectDirs::from("com", "quill", "quill").ok_or(StoreError::NoDataDir)?;
        Self::open_at(project_dirs.data_dir())
    }

    /// Open (or create) a store rooted at an explicit directory.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    pub fn open_at(root: &Path) -> Result<Self> {
        std::fs::create_dir_all(root)?;
        tracing::debug!(root = %root.display(), "opened storage");

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Filesystem root of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    // ------------------------------------------------------------------
    // Raw layer
    // ------------------------------------------------------------------

    /// Read the raw JSON text stored under `key`, if any.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.file_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the raw JSON text stored under `key`.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        std::fs::write(self.file_for(key), value)?;
        Ok(())
    }

    /// Whether any value (valid or not) exists under `key`.
    pub fn exists(&self, key: &str) -> bool {
        self.file_for(key).exists()
    }

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.file_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove every managed key.
    pub fn clear(&self) -> Result<()> {
        for key in keys::ALL {
            self.remove(key)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Typed layer
    // ------------------------------------------------------------------

    /// Load and decode the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent and
    /// [`StoreError::Corrupt`] when a value exists but does not decode.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(text) = self.get_raw(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    /// Encode and persist `value` under `key`, replacing any prior value.
    pub fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.put_raw(key, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(dir.path()).unwrap();

        storage.store("k", &vec!["a", "b"]).unwrap();
        let loaded: Option<Vec<String>> = storage.load("k").unwrap();
        assert_eq!(loaded, Some(vec!["a".to_string(), "b".to_string()]));

        storage.remove("k").unwrap();
        let loaded: Option<Vec<String>> = storage.load("k").unwrap();
        assert_eq!(loaded, None);

        // removing again is fine
        storage.remove("k").unwrap();
    }

    #[test]
    fn corrupt_value_is_reported_not_defaulted() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(dir.path()).unwrap();

        storage.put_raw("k", "{not json").unwrap();
        let err = storage.load::<Vec<String>>("k").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "k"));

        // the raw value is still there for inspection
        assert!(storage.exists("k"));
    }

    #[test]
    fn clear_removes_only_managed_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(dir.path()).unwrap();

        storage.store(keys::SESSION, &"x").unwrap();
        storage.store(keys::FAVOURITES, &vec!["1"]).unwrap();
        storage.store("unrelated", &"y").unwrap();

        storage.clear().unwrap();
        assert!(!storage.exists(keys::SESSION));
        assert!(!storage.exists(keys::FAVOURITES));
        assert!(storage.exists("unrelated"));
    }
}
