//! Main markup parser.
//!
//! Combines the lexer and attribute parser to produce a [`Document`].

use std::borrow::Cow;

use crate::document::{Document, TagToken, Token};
use crate::tag::Tag;

use super::attributes::Attributes;
use super::lexer::{Lexeme, Lexer, RawTag};

/// Parses markup into a [`Document`].
///
/// `is_known` decides which tag ids have a template. Tags without one are
/// reduced to text: their inner content, or `<N/>` when there is none.
///
/// # Examples
///
/// ```
/// use trans::parser::parse;
/// use trans::Tag;
///
/// let doc = parse("<2>kept</2> <9>dropped</9>", |tag| *tag == Tag::Strong);
/// assert_eq!(doc.tags().count(), 1);
/// assert_eq!(doc.tokens()[2].as_text(), Some("dropped"));
/// ```
pub fn parse<F>(input: &str, is_known: F) -> Document<'_>
where
    F: Fn(&Tag) -> bool,
{
    let tokens = Lexer::new(input)
        .map(|lexeme| match lexeme {
            Lexeme::Text { text, span } => Token::Text {
                text: Cow::Borrowed(text),
                span,
            },
            Lexeme::Tag(raw) => tag_token(raw, &is_known),
        })
        .collect();

    Document::new(input, tokens)
}

fn tag_token<'a>(raw: RawTag<'a>, is_known: &impl Fn(&Tag) -> bool) -> Token<'a> {
    let tag = Tag::from_id(raw.id);
    let inner = raw.inner.unwrap_or("");

    if !is_known(&tag) {
        return Token::Text {
            text: unknown_tag_text(raw.id, inner),
            span: raw.span,
        };
    }

    Token::Tag(TagToken {
        tag,
        attributes: Attributes::parse(raw.attributes),
        inner,
        self_closing: raw.inner.is_none(),
        span: raw.span,
    })
}

/// Text standing in for a tag nobody renders.
pub(crate) fn unknown_tag_text<'a>(id: &str, inner: &'a str) -> Cow<'a, str> {
    if inner.is_empty() {
        Cow::Owned(format!("<{id}/>"))
    } else {
        Cow::Borrowed(inner)
    }
}
