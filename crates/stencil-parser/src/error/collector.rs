//! Collector for accumulating diagnostics while reading a document.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so that one document can report every tolerated
/// defect instead of stopping at the first.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// Warnings are logged as they are emitted.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        } else {
            warn!(code:? = diagnostic.code(); "{}", diagnostic.message());
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns true if any error has been emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Finish collection.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - Otherwise returns the collected warnings.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(self.diagnostics)
        }
    }
}
