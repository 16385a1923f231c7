//! Flattening rendered markup into plain text with styled spans.
//!
//! This is the shape a terminal wants: one string plus ranges saying how to
//! decorate it.

use crate::render::{Node, Rendered};
use crate::span::Span;
use crate::style::TextStyle;

/// Plain text with the spans of the elements that produced it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    text: String,
    spans: Vec<Span>,
}

impl StyledText {
    /// Create styled text from its parts. Spans must be sorted and must not
    /// overlap.
    pub fn new(text: String, spans: Vec<Span>) -> Self {
        Self { text, spans }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns true if there are no spans.
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// The span covering a byte offset.
    pub fn span_at(&self, offset: usize) -> Option<&Span> {
        self.spans.iter().find(|span| span.contains(offset))
    }

    /// The style at a byte offset.
    pub fn style_at(&self, offset: usize) -> TextStyle {
        self.span_at(offset)
            .map(|span| span.style)
            .unwrap_or_default()
    }

    /// Iterate over the text in pieces, each either covered by one span or
    /// by none.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            styled: self,
            pos: 0,
            next_span: 0,
        }
    }
}

/// Iterator returned by [`StyledText::segments`].
#[derive(Debug)]
pub struct Segments<'a> {
    styled: &'a StyledText,
    pos: usize,
    next_span: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (&'a str, Option<&'a Span>);

    fn next(&mut self) -> Option<Self::Item> {
        let styled = self.styled;
        if self.pos >= styled.text.len() {
            return None;
        }

        let (end, span) = match styled.spans.get(self.next_span) {
            Some(span) if span.range.start == self.pos => {
                self.next_span += 1;
                (span.range.end, Some(span))
            }
            Some(span) => (span.range.start, None),
            None => (styled.text.len(), None),
        };

        let text = &styled.text[self.pos..end];
        self.pos = end;
        Some((text, span))
    }
}

impl Rendered {
    /// Flatten into plain text and spans.
    ///
    /// Elements with no visible text produce no span, and neither do line
    /// breaks.
    ///
    /// # Examples
    ///
    /// ```
    /// use trans::Renderer;
    ///
    /// let styled = Renderer::default().render("Hello <2>World</2>").to_styled();
    /// assert_eq!(styled.text(), "Hello World");
    /// assert_eq!(styled.spans().len(), 1);
    /// assert!(styled.style_at(6).bold);
    /// ```
    pub fn to_styled(&self) -> StyledText {
        let mut text = String::new();
        let mut spans = Vec::new();

        for node in self.nodes() {
            let start = text.len();
            text.push_str(node.text());
            if let Node::Element(element) = node {
                if element.children.is_some() {
                    spans.push(Span::from_element(start..text.len(), element));
                }
            }
        }

        StyledText::new(text, spans)
    }
}
