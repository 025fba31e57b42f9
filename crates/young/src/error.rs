//! Error types for Young operations.
//!
//! This module provides the main error type [`YoungError`] which wraps
//! the failures of parsing, diagram operations and configuration.

use std::io;

use thiserror::Error;

use young_core::DiagramError;

/// The main error type for Young operations.
#[derive(Debug, Error)]
pub enum YoungError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error("Parse error: {reason} in `{input}`")]
    Parse { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl YoungError {
    /// Create a new `Parse` error for the given partition text.
    pub fn new_parse_error(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
