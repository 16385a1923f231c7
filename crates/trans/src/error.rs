//! Error types for the trans markup crate.
//!
//! Parsing and rendering markup never fails; malformed input degrades to
//! literal text. These errors only cover converting user-supplied strings
//! into vocabulary types.

use thiserror::Error;

/// Errors that can occur when parsing a tag id.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TagParseError {
    /// The id was empty.
    #[error("empty tag id")]
    Empty,

    /// The id contained something other than ASCII digits.
    #[error("invalid tag id: {0}")]
    NotNumeric(String),
}

/// Errors that can occur when parsing a namespace name.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NamespaceParseError {
    /// Unknown namespace name.
    #[error("unknown namespace: {0}")]
    Unknown(String),
}

/// Errors that can occur when parsing a template name.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TemplateParseError {
    /// Unknown built-in template name.
    #[error("unknown template: {0}")]
    Unknown(String),

    /// Missing `=` in a `tag=template` override.
    #[error("expected <tag>=<template>, got: {0}")]
    MissingSeparator(String),

    /// The tag part of an override was invalid.
    #[error(transparent)]
    Tag(#[from] TagParseError),
}
