//! Rich-text demo built on numbered-tag markup.
//!
//! Ties the workspace crates together: [`trans`] parses and renders the
//! markup, [`i18n`] stores translations and explanations, and [`editor`]
//! edits the markup. This crate adds the demo session, a terminal preview
//! and the interactive terminal demo.

pub mod app;
pub mod demo;
pub mod error;
pub mod log_init;
pub mod preview;

pub use app::DemoApp;
pub use demo::{Demo, INITIAL_CONTENT_KEY};
pub use error::{Error, Result};
pub use preview::{to_ansi_string, write_rendered};

pub use editor;
pub use i18n;
pub use trans;
