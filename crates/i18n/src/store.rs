//! The translation store shared by the editor and the preview.

use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use trans::{Lookup, Namespace};

use crate::bundle;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::language::Language;
use crate::pending::Pending;
use crate::storage::{MemoryStorage, Storage};
use crate::translations::Translations;

#[derive(Debug)]
struct State {
    language: Language,
    translations: Translations,
}

/// Two-language key/value store with simulated latency on writes and
/// explanation reads.
///
/// Clones share the same table, so one store is created at startup and
/// handed to every consumer.
///
/// ```
/// use i18n::{Language, TranslationStore};
/// use trans::Namespace;
///
/// let store = TranslationStore::in_memory();
/// assert_eq!(store.lookup("demo.reset-button", Namespace::Content), "Reset Demo Text");
/// store.set_language(Language::De);
/// assert_eq!(store.t("content:demo.reset-button", Namespace::Content), "Demo Text zurücksetzen");
/// assert_eq!(store.lookup("no.such.key", Namespace::Content), "no.such.key");
/// ```
#[derive(Clone, Debug)]
pub struct TranslationStore {
    state: Arc<RwLock<State>>,
    config: Arc<StoreConfig>,
    storage: Arc<dyn Storage>,
    /// Held across snapshot and persist so writes reach storage in order.
    save_lock: Arc<Mutex<()>>,
}

impl TranslationStore {
    /// Open a store with the storage backend named by `config`.
    pub fn open(config: StoreConfig) -> Self {
        let storage = config.storage();
        Self::with_storage(config, storage)
    }

    /// Open a store over an explicit storage backend.
    ///
    /// A backend with nothing stored, or one that fails to load, starts the
    /// store from the bundled defaults.
    pub fn with_storage(config: StoreConfig, storage: Arc<dyn Storage>) -> Self {
        let translations = match storage.load() {
            Ok(Some(translations)) => translations,
            Ok(None) => Translations::bundled(),
            Err(e) => {
                log::warn!("failed to load stored translations, using defaults: {e}");
                Translations::bundled()
            }
        };

        Self {
            state: Arc::new(RwLock::new(State {
                language: config.language,
                translations,
            })),
            config: Arc::new(config),
            storage,
            save_lock: Arc::new(Mutex::new(())),
        }
    }

    /// In-memory store without latency.
    pub fn in_memory() -> Self {
        Self::with_storage(StoreConfig::instant(), Arc::new(MemoryStorage::new()))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn language(&self) -> Language {
        self.read().language
    }

    pub fn set_language(&self, language: Language) {
        let mut state = self.write();
        if state.language != language {
            log::debug!("language: {} -> {}", state.language, language);
            state.language = language;
        }
    }

    /// Switch to the other language and return it.
    pub fn toggle_language(&self) -> Language {
        let mut state = self.write();
        state.language = state.language.toggled();
        log::debug!("language toggled to {}", state.language);
        state.language
    }

    /// Resolve `key` in the current language.
    ///
    /// Falls back from the stored table to the bundled defaults and finally
    /// to the key itself.
    pub fn lookup(&self, key: &str, namespace: Namespace) -> String {
        let state = self.read();
        if let Some(value) = state.translations.get(state.language, namespace, key) {
            return value.to_string();
        }
        match bundle::get(state.language, namespace, key).filter(|v| !v.is_empty()) {
            Some(value) => value.to_string(),
            None => {
                log::debug!("missing translation {namespace}:{key} ({})", state.language);
                key.to_string()
            }
        }
    }

    /// Like [`lookup`](Self::lookup), but accepts keys qualified with the
    /// namespace, e.g. `explain:tooltip-demo`.
    pub fn t(&self, key: &str, namespace: Namespace) -> String {
        self.lookup(namespace.unqualified(key), namespace)
    }

    /// A snapshot of the whole table.
    pub fn translations(&self) -> Translations {
        self.read().translations.clone()
    }

    /// Store `content` under `key` in the current language.
    ///
    /// The language is taken when the call is made, not when the write
    /// lands.
    pub fn save_content(
        &self,
        key: impl Into<String>,
        content: impl Into<String>,
        namespace: Namespace,
    ) -> Pending<()> {
        let language = self.language();
        let (key, content) = (key.into(), content.into());
        let store = self.clone();
        Pending::spawn(self.config.save_latency(), move || {
            store.apply(language, namespace, key, content)
        })
    }

    /// Store an explanation under `key` in the current language.
    pub fn save_explanation(
        &self,
        key: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Pending<()> {
        self.save_content(key, explanation, Namespace::Explain)
    }

    /// Fetch the stored explanation for `key`, `None` when there is none.
    ///
    /// Only the stored table is consulted, never the bundle.
    pub fn get_explanation(&self, key: impl Into<String>) -> Pending<Option<String>> {
        let language = self.language();
        let key = key.into();
        let store = self.clone();
        Pending::spawn(self.config.lookup_latency(), move || {
            Ok(store
                .read()
                .translations
                .get(language, Namespace::Explain, &key)
                .map(str::to_string))
        })
    }

    fn apply(
        &self,
        language: Language,
        namespace: Namespace,
        key: String,
        value: String,
    ) -> Result<()> {
        let _guard = self.save_lock.lock().unwrap_or_else(PoisonError::into_inner);
        log::debug!("save {namespace}:{key} ({language})");

        let mut snapshot = self.read().translations.clone();
        snapshot.insert(language, namespace, key.clone(), value.clone());
        // Memory only changes once the write is durable.
        self.storage.save(&snapshot)?;
        self.write()
            .translations
            .insert(language, namespace, key, value);
        Ok(())
    }
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::open(StoreConfig::default())
    }
}

impl Lookup for TranslationStore {
    fn lookup(&self, key: &str, namespace: Namespace) -> String {
        self.t(key, namespace)
    }
}
