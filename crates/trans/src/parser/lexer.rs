//! Lexer for numbered-tag markup.
//!
//! Splits input text into literal runs and raw tag occurrences. Matching
//! follows the leftmost-first semantics of the pattern
//! `<(\d+)([^>]*)>(.*?)</\1>|<(\d+)([^>]*)\s*/>`, which `regex` cannot
//! express because of the back-reference, so it is scanned by hand.

use std::ops::Range;

/// A tag occurrence found in the input, before any interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct RawTag<'a> {
    /// The decimal id (`"2"` for `<2>...</2>`).
    pub id: &'a str,
    /// Everything between the id and the end of the opening tag.
    pub attributes: &'a str,
    /// Inner content for paired tags, `None` for self-closing ones.
    pub inner: Option<&'a str>,
    /// Byte range of the whole tag in the input.
    pub span: Range<usize>,
}

impl RawTag<'_> {
    /// Returns true for the `<N/>` form.
    pub fn is_self_closing(&self) -> bool {
        self.inner.is_none()
    }
}

/// A lexeme produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Lexeme<'a> {
    /// A literal run between tags.
    Text {
        /// The literal text.
        text: &'a str,
        /// Byte range in the input.
        span: Range<usize>,
    },
    /// A matched tag.
    Tag(RawTag<'a>),
}

impl Lexeme<'_> {
    /// Byte range of this lexeme in the input.
    pub fn span(&self) -> Range<usize> {
        match self {
            Lexeme::Text { span, .. } => span.clone(),
            Lexeme::Tag(tag) => tag.span.clone(),
        }
    }
}

/// Lexer for numbered-tag markup.
///
/// # Examples
///
/// ```
/// use trans::parser::Lexer;
///
/// let lexemes: Vec<_> = Lexer::new("a<2>b</2>c").collect();
/// assert_eq!(lexemes.len(), 3);
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    /// A tag found while scanning past a literal run.
    pending: Option<RawTag<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: None,
        }
    }

    fn text(&mut self, end: usize) -> Lexeme<'a> {
        let span = self.pos..end;
        self.pos = end;
        Lexeme::Text {
            text: &self.input[span.clone()],
            span,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(tag) = self.pending.take() {
            self.pos = tag.span.end;
            return Some(Lexeme::Tag(tag));
        }

        if self.pos >= self.input.len() {
            return None;
        }

        match find_tag(self.input, self.pos) {
            Some(tag) if tag.span.start > self.pos => {
                let lexeme = self.text(tag.span.start);
                self.pending = Some(tag);
                Some(lexeme)
            }
            Some(tag) => {
                self.pos = tag.span.end;
                Some(Lexeme::Tag(tag))
            }
            None => Some(self.text(self.input.len())),
        }
    }
}

/// Find the first tag at or after `from`.
fn find_tag(input: &str, from: usize) -> Option<RawTag<'_>> {
    let mut search = from;
    while let Some(offset) = input[search..].find('<') {
        let start = search + offset;
        if let Some(tag) = match_tag(input, start) {
            return Some(tag);
        }
        search = start + 1;
    }
    None
}

/// Try to match a tag whose `<` sits at `start`.
fn match_tag(input: &str, start: usize) -> Option<RawTag<'_>> {
    let bytes = input.as_bytes();
    let id_start = start + 1;
    let id_end = id_start
        + bytes[id_start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
    if id_end == id_start {
        return None;
    }

    // Both forms end their opening tag at the first `>`.
    let gt = id_end + input[id_end..].find('>')?;
    let body_start = gt + 1;

    // Paired form, longest id first. Digits left over from a shorter id
    // belong to the attribute text.
    for end in (id_start + 1..=id_end).rev() {
        let id = &input[id_start..end];
        if let Some(inner_end) = find_closing(input, body_start, id) {
            return Some(RawTag {
                id,
                attributes: &input[end..gt],
                inner: Some(&input[body_start..inner_end]),
                span: start..inner_end + id.len() + 3,
            });
        }
    }

    if gt > id_end && bytes[gt - 1] == b'/' {
        return Some(RawTag {
            id: &input[id_start..id_end],
            attributes: &input[id_end..gt - 1],
            inner: None,
            span: start..gt + 1,
        });
    }

    None
}

/// Find the first `</id>` after `from` on the same line.
fn find_closing(input: &str, from: usize, id: &str) -> Option<usize> {
    let rest = &input[from..];
    let line_end = rest.find(is_line_terminator).unwrap_or(rest.len());
    let needle = format!("</{id}>");
    rest[..line_end].find(&needle).map(|offset| from + offset)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
