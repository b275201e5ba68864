//! Error types for Stencil operations.
//!
//! This module provides the main error type [`StencilError`] which wraps
//! the error conditions that can occur while converting one document.

use std::io;

use thiserror::Error;

use stencil_parser::ParseError;

use crate::export;

/// The main error type for Stencil operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the structured parse
/// diagnostics so callers can render snippets around each labeled span.
#[derive(Debug, Error)]
pub enum StencilError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("No BPMN elements found")]
    EmptyDiagram,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}

impl StencilError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
