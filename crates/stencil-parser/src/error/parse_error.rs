//! The error type returned when a document cannot be read.

use std::fmt;

use crate::error::Diagnostic;

/// Error type for reading a BPMN document.
///
/// Wraps one or more diagnostics. Every wrapped list contains at least one
/// error; warnings emitted before the failure are kept for context.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = self
            .diagnostics
            .iter()
            .filter(|diag| diag.severity().is_error());
        if let Some(first) = errors.next() {
            write!(f, "{}", first)?;
            let rest = errors.count();
            if rest > 0 {
                write!(f, " (+{} more)", rest)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}
