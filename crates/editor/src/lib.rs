//! Editing surface for numbered-tag markup.
//!
//! [`Editor`] is a text buffer with a selection, a committed value and the
//! toolbar commands that insert markup (`bold`, `italic`, `line_break`).
//! [`LinkDialog`] and [`ExplanationDialog`] wrap the selection in `<4>` and
//! `<1>` tags; the latter stores the explanation through an
//! [`i18n::TranslationStore`].

pub mod buffer;
pub mod dialog;
pub mod error;
mod grapheme;
pub mod key;

pub use buffer::{Editor, LINE_BREAK};
pub use crossterm::event::KeyCode;
pub use dialog::{ExplanationDialog, LinkDialog};
pub use error::{EditorError, Result};
pub use key::generate_i18n_key;
