//! Parser for numbered-tag markup.
//!
//! This module contains the lexer, attribute parser, and main markup parser.

mod attributes;
mod lexer;
mod markup;

pub use attributes::Attributes;
pub use lexer::{Lexeme, Lexer, RawTag};
pub use markup::parse;
pub(crate) use markup::unknown_tag_text;
