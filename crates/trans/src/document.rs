//! Parsed document type.
//!
//! This is the result of parsing numbered-tag markup: an ordered list of
//! literal runs and recognized tags, each remembering where it came from.

use std::borrow::Cow;
use std::ops::Range;

use crate::parser::Attributes;
use crate::tag::Tag;
use crate::template::TemplateSet;

/// A recognized tag occurrence.
#[derive(Clone, Debug, PartialEq)]
pub struct TagToken<'a> {
    /// Which tag this is.
    pub tag: Tag,
    /// Attributes parsed from the opening tag.
    pub attributes: Attributes,
    /// Inner content; empty for self-closing tags.
    pub inner: &'a str,
    /// True for the `<N/>` form.
    pub self_closing: bool,
    /// Byte range of the tag in the source.
    pub span: Range<usize>,
}

/// A parsed unit of markup.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Literal text. Borrowed for literal runs and unknown paired tags,
    /// owned for the `<N/>` echo of unknown empty tags.
    Text {
        /// Text to display.
        text: Cow<'a, str>,
        /// Byte range of the source this text stands for.
        span: Range<usize>,
    },
    /// A tag with a registered template.
    Tag(TagToken<'a>),
}

impl<'a> Token<'a> {
    /// Byte range of this token's source.
    pub fn span(&self) -> Range<usize> {
        match self {
            Token::Text { span, .. } => span.clone(),
            Token::Tag(tag) => tag.span.clone(),
        }
    }

    /// Get the text if this is a text token.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text { text, .. } => Some(text),
            Token::Tag(_) => None,
        }
    }

    /// Get the tag if this is a tag token.
    pub fn as_tag(&self) -> Option<&TagToken<'a>> {
        match self {
            Token::Tag(tag) => Some(tag),
            Token::Text { .. } => None,
        }
    }
}

/// The result of parsing markup.
///
/// # Examples
///
/// ```
/// use trans::{Document, Tag};
///
/// let doc = Document::parse("a<2>b</2>c<5/>d");
/// assert_eq!(doc.tokens().len(), 5);
/// assert_eq!(doc.tokens()[1].as_tag().unwrap().tag, Tag::Strong);
/// assert_eq!(doc.reconstruct(), "a<2>b</2>c<5/>d");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> Document<'a> {
    /// Create a document from its source and tokens.
    pub fn new(source: &'a str, tokens: Vec<Token<'a>>) -> Self {
        Self { source, tokens }
    }

    /// Parse markup with the default template set deciding which tags are
    /// known.
    pub fn parse(input: &'a str) -> Self {
        let templates = TemplateSet::default();
        crate::parser::parse(input, |tag| templates.contains(tag))
    }

    /// The markup this document was parsed from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// All tokens in source order.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Iterate over the recognized tags.
    pub fn tags(&self) -> impl Iterator<Item = &TagToken<'a>> {
        self.tokens.iter().filter_map(Token::as_tag)
    }

    /// Returns true if no tag was recognized.
    pub fn is_plain(&self) -> bool {
        self.tags().next().is_none()
    }

    /// Returns true if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Concatenate the source spans of all tokens.
    ///
    /// Always equals [`Document::source`].
    pub fn reconstruct(&self) -> String {
        self.tokens
            .iter()
            .map(|token| &self.source[token.span()])
            .collect()
    }

    /// Get the token whose source covers a byte offset.
    pub fn token_at(&self, offset: usize) -> Option<&Token<'a>> {
        self.tokens.iter().find(|t| t.span().contains(&offset))
    }
}
