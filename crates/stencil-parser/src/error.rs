//! Error and diagnostic system for the BPMN reader.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating warnings alongside a result
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Errors are wrapped in [`ParseError`]; warnings
//! travel alongside a successfully parsed diagram.
//!
//! # Example
//!
//! ```
//! # use stencil_parser::error::{Diagnostic, ErrorCode};
//! # use stencil_parser::Span;
//!
//! let span = Span::new(100..120);
//!
//! let diag = Diagnostic::warning("shape `Task_1` has a non-numeric `width`")
//!     .with_code(ErrorCode::W300)
//!     .with_label(span, "in this shape")
//!     .with_help("the shape is skipped");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
