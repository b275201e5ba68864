//! Error codes for the reader's diagnostics.
//!
//! Codes are organized by concern:
//! - `E1xx` - XML well-formedness errors
//! - `E2xx` - Document structure errors
//! - `W3xx` - Tolerated geometry and style defects

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // XML Errors (E1xx)
    // =========================================================================
    /// Malformed XML.
    ///
    /// The document is not well-formed XML.
    E100,

    // =========================================================================
    // Structure Errors (E2xx)
    // =========================================================================
    /// Not a BPMN document.
    ///
    /// The root element is not `definitions`.
    E200,

    // =========================================================================
    // Geometry Warnings (W3xx)
    // =========================================================================
    /// Non-numeric coordinate.
    ///
    /// A `Bounds` or `waypoint` attribute is not a number. The owning
    /// shape or edge geometry is dropped.
    W300,

    /// Shape without bounds.
    ///
    /// A `BPMNShape` has no `Bounds` child and is dropped.
    W301,

    /// Edge without waypoints.
    ///
    /// A `BPMNEdge` has no `waypoint` children and is dropped.
    W302,

    /// Invalid color.
    ///
    /// A color extension attribute is not a CSS color and is ignored.
    W303,

    /// Element without id.
    ///
    /// A flow node, flow or diagram element has no `id` (or `bpmnElement`)
    /// and is ignored.
    W304,

    /// Incomplete flow.
    ///
    /// A flow is missing its `sourceRef` or `targetRef` and is ignored.
    W305,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E200 => "E200",
            ErrorCode::W300 => "W300",
            ErrorCode::W301 => "W301",
            ErrorCode::W302 => "W302",
            ErrorCode::W303 => "W303",
            ErrorCode::W304 => "W304",
            ErrorCode::W305 => "W305",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed XML",
            ErrorCode::E200 => "not a BPMN document",
            ErrorCode::W300 => "non-numeric coordinate",
            ErrorCode::W301 => "shape without bounds",
            ErrorCode::W302 => "edge without waypoints",
            ErrorCode::W303 => "invalid color",
            ErrorCode::W304 => "element without id",
            ErrorCode::W305 => "incomplete flow",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
