//! Regions of flattened text that came from one element.

use std::ops::Range;

use crate::parser::Attributes;
use crate::render::Element;
use crate::style::TextStyle;
use crate::tag::Tag;
use crate::template::Template;

/// The part of the flattened text an element produced.
///
/// Spans never overlap: markup does not nest, so every byte of flattened
/// text belongs to at most one element.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    /// Byte range in the flattened text.
    pub range: Range<usize>,
    /// How the range is decorated.
    pub style: TextStyle,
    /// [`Element::key`] of the source element.
    pub key: usize,
    pub tag: Tag,
    /// Template the element was rendered with. Decides how the span
    /// behaves, whatever its tag id.
    pub template: Template,
    pub attributes: Attributes,
}

impl Span {
    /// Span for `element`, whose text occupies `range`.
    pub fn from_element(range: Range<usize>, element: &Element) -> Self {
        Self {
            range,
            style: TextStyle::for_template(&element.template),
            key: element.key,
            tag: element.tag.clone(),
            template: element.template.clone(),
            attributes: element.attributes.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.range.contains(&offset)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Link target, for spans rendered as links.
    pub fn href(&self) -> Option<&str> {
        match self.template {
            Template::Link => self.attribute("href"),
            _ => None,
        }
    }

    /// Returns true for spans rendered as annotated spans.
    pub fn is_explain(&self) -> bool {
        self.template == Template::Explain
    }
}
