//! File-backed key-value store.
//!
//! Each key is one file, `<data_dir>/<key>.json`. Writes land in a temporary
//! file first and are renamed over the old value, so a crash mid-write leaves
//! the previous cart intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use toyland_core::{KeyValueStore, StoreError};

/// Key-value store persisted under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| backend_error(&dir, &e))?;
        Ok(Self { dir })
    }

    /// The directory values are stored in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn backend_error(path: &Path, err: &std::io::Error) -> StoreError {
    StoreError::Backend(format!("{}: {err}", path.display()))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(backend_error(&path, &e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| backend_error(&tmp, &e))?;
        std::fs::rename(&tmp, &path).map_err(|e| backend_error(&path, &e))?;
        tracing::debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(backend_error(&path, &e)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use toyland_core::CART_STORAGE_KEY;

    use super::*;

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("nested")).unwrap();

        assert_eq!(store.get(CART_STORAGE_KEY).unwrap(), None);
        store.set(CART_STORAGE_KEY, r#"{"1":null}"#).unwrap();
        store.set(CART_STORAGE_KEY, "{}").unwrap();
        assert_eq!(store.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("{}"));
        assert!(store.dir().join("toyland-cart.json").exists());

        store.remove(CART_STORAGE_KEY).unwrap();
        store.remove(CART_STORAGE_KEY).unwrap();
        assert_eq!(store.get(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::open(dir.path())
            .unwrap()
            .set("prefs", "dark")
            .unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("prefs").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        for key in ["../escape", "a/b", "", "cart.json"] {
            assert!(matches!(
                store.set(key, "x").unwrap_err(),
                StoreError::InvalidKey(_)
            ));
        }
    }
}
