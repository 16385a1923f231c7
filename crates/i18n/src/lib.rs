//! Translation store for rich-text content.
//!
//! Strings live in two languages ([`Language`]) and two namespaces
//! ([`trans::Namespace`]). Lookups fall back from the stored table to the
//! bundled defaults and finally to the key itself, so they never fail.
//! Writes and explanation reads go through a simulated network delay and
//! return a [`Pending`] handle.

pub mod bundle;
pub mod config;
pub mod error;
pub mod language;
pub mod pending;
pub mod storage;
pub mod store;
pub mod translations;

pub use config::StoreConfig;
pub use error::{LanguageParseError, Result, StoreError};
pub use language::Language;
pub use pending::Pending;
pub use storage::{DEFAULT_FILE_NAME, JsonFileStorage, MemoryStorage, Storage};
pub use store::TranslationStore;
pub use translations::{LanguageTable, Translations};
