//! The mutable translation table.
//!
//! Serialized as `{"de":{"content":{},"explain":{}},"en":{...}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trans::Namespace;

use crate::bundle;
use crate::language::Language;

/// Translations of one language, by namespace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageTable {
    #[serde(default)]
    pub content: BTreeMap<String, String>,
    #[serde(default)]
    pub explain: BTreeMap<String, String>,
}

impl LanguageTable {
    pub fn namespace(&self, namespace: Namespace) -> &BTreeMap<String, String> {
        match namespace {
            Namespace::Content => &self.content,
            Namespace::Explain => &self.explain,
        }
    }

    pub fn namespace_mut(&mut self, namespace: Namespace) -> &mut BTreeMap<String, String> {
        match namespace {
            Namespace::Content => &mut self.content,
            Namespace::Explain => &mut self.explain,
        }
    }

    fn bundled(language: Language) -> Self {
        let collect = |namespace: Namespace| -> BTreeMap<String, String> {
            bundle::entries(language, namespace)
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };
        Self {
            content: collect(Namespace::Content),
            explain: collect(Namespace::Explain),
        }
    }
}

/// Translations of both languages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Translations {
    #[serde(default)]
    pub de: LanguageTable,
    #[serde(default)]
    pub en: LanguageTable,
}

impl Translations {
    /// A table filled with the bundled defaults.
    pub fn bundled() -> Self {
        Self {
            de: LanguageTable::bundled(Language::De),
            en: LanguageTable::bundled(Language::En),
        }
    }

    pub fn language(&self, language: Language) -> &LanguageTable {
        match language {
            Language::De => &self.de,
            Language::En => &self.en,
        }
    }

    pub fn language_mut(&mut self, language: Language) -> &mut LanguageTable {
        match language {
            Language::De => &mut self.de,
            Language::En => &mut self.en,
        }
    }

    /// Get a non-empty entry.
    pub fn get(&self, language: Language, namespace: Namespace, key: &str) -> Option<&str> {
        self.language(language)
            .namespace(namespace)
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(
        &mut self,
        language: Language,
        namespace: Namespace,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.language_mut(language)
            .namespace_mut(namespace)
            .insert(key.into(), value.into())
    }
}
