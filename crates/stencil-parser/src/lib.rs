//! # Stencil Parser
//!
//! Reader for BPMN 2.0 XML documents. This crate turns the source XML into
//! the typed [`Diagram`] model consumed by the Stencil compiler.
//!
//! ## Usage
//!
//! ```
//! # use stencil_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <definitions xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL">
//!           <process id="Process_1">
//!             <startEvent id="Start_1" name="Order received" />
//!           </process>
//!         </definitions>
//!     "#;
//!
//!     let parsed = parse(source)?;
//!     assert_eq!(parsed.diagram.elements_len(), 1);
//!     assert!(parsed.warnings.is_empty());
//!     Ok(())
//! }
//! ```

pub mod error;
#[cfg(test)]
mod parser_tests;
mod reader;
mod span;

pub use error::{Diagnostic, ParseError};
pub use span::Span;

use log::{debug, info};
use roxmltree::Document;

use stencil_core::model::Diagram;

use error::{DiagnosticCollector, ErrorCode};
use reader::Reader;

/// A successfully read document.
#[derive(Debug)]
pub struct Parsed {
    /// The typed diagram.
    pub diagram: Diagram,
    /// Tolerated defects; each one dropped a piece of geometry or style.
    pub warnings: Vec<Diagnostic>,
}

/// Parse BPMN 2.0 XML into a typed diagram.
///
/// The pipeline is:
///
/// 1. **XML** - Parse the text into a `roxmltree` document
/// 2. **Semantics** - Collect flow nodes, participants, lanes and flows
/// 3. **Hierarchy** - Map participants to their process lanes
/// 4. **Interchange** - Collect shape bounds, label boxes, colors and waypoints
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is not well-formed XML (`E100`) or
/// its root element is not `definitions` (`E200`). Geometry defects are
/// never errors; they are returned as [`Parsed::warnings`].
pub fn parse(source: &str) -> Result<Parsed, ParseError> {
    info!(source_len = source.len(); "Parsing BPMN document");

    let doc = Document::parse(source).map_err(|err| {
        let pos = err.pos();
        Diagnostic::error(err.to_string())
            .with_code(ErrorCode::E100)
            .with_label(Span::from_position(source, pos.row, pos.col), "here")
    })?;

    let mut collector = DiagnosticCollector::new();
    let diagram = Reader::new(&doc, &mut collector).read();
    let warnings = collector.finish()?;

    debug!(warnings_len = warnings.len(); "BPMN document parsed");
    Ok(Parsed { diagram, warnings })
}
