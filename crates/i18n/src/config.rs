//! Store configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::Language;
use crate::storage::{JsonFileStorage, MemoryStorage, Storage};

/// Configuration of a [`TranslationStore`](crate::TranslationStore).
///
/// Every field has a default, so `{}` is a valid configuration:
///
/// ```
/// use i18n::{Language, StoreConfig};
///
/// let config = StoreConfig::from_json(r#"{"language": "de"}"#).unwrap();
/// assert_eq!(config.language, Language::De);
/// assert_eq!(config.save_latency_ms, 300);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Language active at startup.
    pub language: Language,
    /// Simulated latency of writes.
    pub save_latency_ms: u64,
    /// Simulated latency of explanation reads.
    pub lookup_latency_ms: u64,
    /// JSON file (or directory) to keep translations in; memory if unset.
    pub storage_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            save_latency_ms: 300,
            lookup_latency_ms: 100,
            storage_path: None,
        }
    }
}

impl StoreConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// No artificial latency.
    pub fn instant() -> Self {
        Self {
            save_latency_ms: 0,
            lookup_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn save_latency(&self) -> Duration {
        Duration::from_millis(self.save_latency_ms)
    }

    pub fn lookup_latency(&self) -> Duration {
        Duration::from_millis(self.lookup_latency_ms)
    }

    /// The storage backend this configuration asks for.
    pub fn storage(&self) -> Arc<dyn Storage> {
        match &self.storage_path {
            Some(path) => Arc::new(JsonFileStorage::new(path)),
            None => Arc::new(MemoryStorage::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(StoreConfig::from_json("{}").unwrap(), StoreConfig::default());
    }

    #[test]
    fn latencies() {
        let config = StoreConfig::default();
        assert_eq!(config.save_latency(), Duration::from_millis(300));
        assert_eq!(config.lookup_latency(), Duration::from_millis(100));
        assert_eq!(StoreConfig::instant().save_latency(), Duration::ZERO);
    }

    #[test]
    fn invalid_language_is_rejected() {
        assert!(StoreConfig::from_json(r#"{"language": "fr"}"#).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"save_latency_ms": 5, "storage_path": "/tmp/x.json"}"#).unwrap();
        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.save_latency_ms, 5);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/x.json")));
    }
}
