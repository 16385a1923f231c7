//! Where the translation table lives between runs.
//!
//! [`JsonFileStorage`] plays the part browser local storage plays for the
//! web demo: one JSON document, rewritten after every change.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::Result;
use crate::translations::Translations;

/// File name used when only a directory is configured.
pub const DEFAULT_FILE_NAME: &str = "demo-rich-text-translations.json";

pub trait Storage: Send + Sync + fmt::Debug {
    /// Load the stored table, `None` if nothing was stored yet.
    fn load(&self) -> Result<Option<Translations>>;

    /// Replace the stored table.
    fn save(&self, translations: &Translations) -> Result<()>;
}

/// Keeps the table in memory only.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<Translations>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<Translations>> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, translations: &Translations) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(translations.clone());
        Ok(())
    }
}

/// Keeps the table in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Store in `path`; a directory gets [`DEFAULT_FILE_NAME`] appended.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = if path.is_dir() {
            path.join(DEFAULT_FILE_NAME)
        } else {
            path
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<Translations>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, translations: &Translations) -> Result<()> {
        let json = serde_json::to_string_pretty(translations)?;
        fs::write(&self.path, json)?;
        log::debug!("translations written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use trans::Namespace;

    use super::*;
    use crate::error::StoreError;
    use crate::language::Language;

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        let mut translations = Translations::default();
        translations.insert(Language::En, Namespace::Content, "k", "v");
        storage.save(&translations).unwrap();
        assert_eq!(storage.load().unwrap(), Some(translations));
    }

    #[test]
    fn file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("none.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn file_storage_directory_uses_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        assert_eq!(storage.path(), dir.path().join(DEFAULT_FILE_NAME));
    }

    #[test]
    fn file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        let translations = Translations::bundled();
        storage.save(&translations).unwrap();
        assert_eq!(storage.load().unwrap(), Some(translations));
    }

    #[test]
    fn file_storage_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        let storage = JsonFileStorage::new(&path);
        assert!(matches!(storage.load(), Err(StoreError::Json(_))));
    }
}
