//! The core diagnostic type.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! code, labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// warning[W300]: shape `Task_1` has a non-numeric `x`
///   --> order.bpmn:42:9
///    |
/// 42 |         <dc:Bounds x="abc" y="80" width="100" height="80" />
///    |         ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ expected a number
///    |
///    = help: the shape is skipped
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use stencil_parser::error::{Diagnostic, ErrorCode};
    /// # use stencil_parser::Span;
    ///
    /// let diag = Diagnostic::error("unexpected end of stream")
    ///     .with_code(ErrorCode::E100)
    ///     .with_label(Span::new(0..1), "here");
    /// assert!(diag.severity().is_error());
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "warning[W300]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::warning("edge `Flow_1` has no waypoints")
            .with_code(ErrorCode::W302)
            .with_label(Span::new(30..60), "empty edge")
            .with_secondary_label(Span::new(0..10), "flow declared here")
            .with_help("the flow is drawn without a connector");

        assert!(diag.severity().is_warning());
        assert_eq!(diag.code(), Some(ErrorCode::W302));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(diag.help(), Some("the flow is drawn without a connector"));
    }

    #[test]
    fn test_diagnostic_display() {
        let with_code = Diagnostic::error("unexpected end of stream").with_code(ErrorCode::E100);
        assert_eq!(with_code.to_string(), "error[E100]: unexpected end of stream");

        let without_code = Diagnostic::warning("ignored");
        assert_eq!(without_code.to_string(), "warning: ignored");
    }
}
