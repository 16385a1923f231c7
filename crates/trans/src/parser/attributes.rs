//! Attribute parsing for tag heads.
//!
//! Extracts every `key="value"` pair from the raw attribute text of a tag.

use once_cell::sync::Lazy;
use regex::Regex;

/// `key="value"` with an ASCII word key and no escaping inside the value.
static ATTRIBUTE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([A-Za-z0-9_]+)="([^"]*)""#).unwrap());

/// An ordered attribute map.
///
/// Keys keep the position of their first insertion; inserting an existing
/// key overwrites its value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the raw attribute text of a tag.
    ///
    /// Anything that is not a `key="value"` pair is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use trans::Attributes;
    ///
    /// let attrs = Attributes::parse(r#" href="https://x.com" target="blank""#);
    /// assert_eq!(attrs.get("href"), Some("https://x.com"));
    /// assert_eq!(attrs.get("target"), Some("blank"));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut attributes = Self::new();
        for caps in ATTRIBUTE_REGEX.captures_iter(raw) {
            attributes.insert(&caps[1], &caps[2]);
        }
        attributes
    }

    /// Insert or overwrite an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Merge `other` on top of `self`; values from `other` win.
    pub fn merged(&self, other: &Attributes) -> Attributes {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.insert(key, value);
        }
        merged
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty() {
        assert!(Attributes::parse("").is_empty());
        assert!(Attributes::parse("   ").is_empty());
    }

    #[test]
    fn parse_keeps_order() {
        let attrs = Attributes::parse(r#" b="2" a="1""#);
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn duplicate_key_last_wins_in_first_position() {
        let attrs = Attributes::parse(r#"a="1" b="2" a="3""#);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("a"), Some("3"));
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn unquoted_and_single_quoted_values_are_ignored() {
        let attrs = Attributes::parse(r#"a=1 b='2' c="3""#);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("c"), Some("3"));
    }

    #[test]
    fn empty_value() {
        let attrs = Attributes::parse(r#"i18n="""#);
        assert_eq!(attrs.get("i18n"), Some(""));
    }

    #[test]
    fn non_ascii_key_characters_split_the_key() {
        // Only ASCII word characters form keys, as in the markup's origin.
        let attrs = Attributes::parse(r#"schlüssel="x""#);
        assert_eq!(attrs.get("ssel"), Some("x"));
    }

    #[test]
    fn merged_prefers_other() {
        let base: Attributes = [("target", "_self"), ("class", "x")].into_iter().collect();
        let token: Attributes = [("target", "blank")].into_iter().collect();
        let merged = base.merged(&token);
        assert_eq!(merged.get("target"), Some("blank"));
        assert_eq!(merged.get("class"), Some("x"));
    }
}
