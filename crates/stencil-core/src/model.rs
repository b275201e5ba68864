//! Typed diagram model.
//!
//! This module contains the read-only representation of a parsed BPMN
//! diagram that the compiler consumes. Element kinds are closed enums so that
//! outline and marker dispatch are exhaustive matches rather than string
//! comparisons.
//!
//! # Pipeline Position
//!
//! ```text
//! BPMN XML
//!     ↓ stencil-parser
//! Diagram Model (these types) - typed elements, flows, pixel geometry
//!     ↓ layout
//! Page (ShapePrimitive list + page size)
//!     ↓ export
//! VSDX
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - The [`Diagram`] container and its geometry records
//! - [`element`] - Element and flow kinds: [`ElementKind`], [`FlowKind`], etc.

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
