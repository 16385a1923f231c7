//! Numbered-tag inline markup parser and renderer.
//!
//! This crate parses the micro-markup written by the rich-text editor,
//! where a small decimal id names each tag, and renders it into
//! presentational nodes.
//!
//! # Overview
//!
//! | Tag | Form         | Attributes       | Meaning                    |
//! |-----|--------------|------------------|----------------------------|
//! | `1` | paired       | `i18n`           | annotated/explainable span |
//! | `2` | paired       | none             | strong emphasis            |
//! | `3` | paired       | none             | light emphasis             |
//! | `4` | paired       | `href`, `target` | hyperlink                  |
//! | `5` | self-closing | none             | line break                 |
//!
//! - `<2>text</2>` - paired tag; the closing id must match
//! - `<4 href="https://example.com">text</4>` - attributes are `key="value"`
//! - `<5/>` - self-closing tag
//! - `<9>text</9>` - a tag nobody renders shows its inner text
//!
//! Nothing here fails: markup that does not match stays literal text.
//!
//! # Usage
//!
//! ```
//! use trans::{Document, Renderer, Tag};
//!
//! // Parse only
//! let doc = Document::parse("a<2>b</2>c<5/>d");
//! assert_eq!(doc.tags().count(), 2);
//!
//! // Parse and render
//! let rendered = Renderer::default().render("a<2>b</2>c<5/>d");
//! assert_eq!(rendered.text(), "abc\nd");
//! assert_eq!(rendered.to_html(), "a<strong>b</strong>c<br/>d");
//! ```

pub mod document;
pub mod error;
pub mod explain;
pub mod parser;
pub mod render;
pub mod span;
pub mod style;
pub mod styled;
pub mod tag;
pub mod template;

// Re-export main types at crate root
pub use document::{Document, TagToken, Token};
pub use error::{NamespaceParseError, TagParseError, TemplateParseError};
pub use explain::{ExplainTooltip, Lookup, NO_EXPLANATION, Namespace, TooltipState};
pub use parser::{Attributes, parse};
pub use render::{Element, Node, Rendered, Renderer};
pub use span::Span;
pub use style::TextStyle;
pub use styled::StyledText;
pub use tag::Tag;
pub use template::{Template, TemplateSet};
