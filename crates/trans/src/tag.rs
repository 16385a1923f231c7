//! The numbered tag vocabulary.
//!
//! Markup tags are identified by small decimal ids. Ids `1` through `5`
//! have fixed meanings; every other id is carried as [`Tag::Other`] so a
//! caller can still register a template for it.

use std::fmt;
use std::str::FromStr;

use crate::error::TagParseError;

/// A tag id from the markup vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// `1`: annotated span with an out-of-band explanation.
    Explain,
    /// `2`: strong emphasis.
    Strong,
    /// `3`: light emphasis.
    Emphasis,
    /// `4`: hyperlink.
    Link,
    /// `5`: line break (self-closing).
    LineBreak,
    /// Any other id, kept as its raw digits (`"9"`, `"01"`).
    Other(String),
}

impl Tag {
    /// Map a raw digit string to a tag.
    ///
    /// Only the exact strings `"1"` to `"5"` map to the known variants, so
    /// `"01"` is `Other("01")`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trans::Tag;
    ///
    /// assert_eq!(Tag::from_id("2"), Tag::Strong);
    /// assert_eq!(Tag::from_id("9"), Tag::Other("9".into()));
    /// ```
    pub fn from_id(id: &str) -> Self {
        match id {
            "1" => Tag::Explain,
            "2" => Tag::Strong,
            "3" => Tag::Emphasis,
            "4" => Tag::Link,
            "5" => Tag::LineBreak,
            other => Tag::Other(other.to_string()),
        }
    }

    /// The decimal id as written in markup.
    pub fn id(&self) -> &str {
        match self {
            Tag::Explain => "1",
            Tag::Strong => "2",
            Tag::Emphasis => "3",
            Tag::Link => "4",
            Tag::LineBreak => "5",
            Tag::Other(id) => id,
        }
    }

    /// Returns true for the five built-in ids.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Tag::Other(_))
    }

    /// The built-in tags in id order.
    pub fn builtins() -> [Tag; 5] {
        [
            Tag::Explain,
            Tag::Strong,
            Tag::Emphasis,
            Tag::Link,
            Tag::LineBreak,
        ]
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TagParseError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TagParseError::NotNumeric(s.to_string()));
        }
        Ok(Tag::from_id(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_round_trip() {
        for tag in Tag::builtins() {
            assert_eq!(Tag::from_id(tag.id()), tag);
            assert!(tag.is_builtin());
        }
    }

    #[test]
    fn leading_zero_is_not_builtin() {
        let tag = Tag::from_id("01");
        assert_eq!(tag, Tag::Other("01".to_string()));
        assert_eq!(tag.id(), "01");
        assert!(!tag.is_builtin());
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert_eq!("".parse::<Tag>(), Err(TagParseError::Empty));
        assert_eq!(
            "x1".parse::<Tag>(),
            Err(TagParseError::NotNumeric("x1".to_string()))
        );
        assert_eq!("4".parse::<Tag>(), Ok(Tag::Link));
    }

    #[test]
    fn display_uses_id() {
        assert_eq!(Tag::LineBreak.to_string(), "5");
        assert_eq!(Tag::Other("12".into()).to_string(), "12");
    }
}
