//! Export functionality for compiled pages.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning an assembled [`Page`] into an output package. It is the final
//! stage in the Stencil pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! BPMN XML
//!     ↓ parse
//! Diagram model
//!     ↓ compile
//! Page (ordered shape primitives)
//!     ↓ export (this module)
//! Output package
//! ```
//!
//! # Available Backends
//!
//! - [`vsdx`]: Visio packages via [`vsdx::VsdxBuilder`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering XML serialization, archive
//! and I/O failures. [`Error`] converts into [`StencilError::Export`] at the
//! crate boundary.
//!
//! [`StencilError::Export`]: crate::StencilError::Export

/// VSDX export backend.
pub mod vsdx;

use crate::layout::Page;

/// Abstraction for page export backends.
pub trait Exporter {
    /// Exports an assembled page to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Xml`] if a part cannot be serialized,
    /// [`Error::Archive`] if the package cannot be built, or [`Error::Io`]
    /// if writing the output fails.
    fn export_page(&mut self, page: &Page) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// Serializing an XML part failed.
    Xml(std::io::Error),
    /// Building the zip archive failed.
    Archive(zip::result::ZipError),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xml(err) => write!(f, "XML error: {err}"),
            Self::Archive(err) => write!(f, "Archive error: {err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml(err) | Self::Io(err) => Some(err),
            Self::Archive(err) => Some(err),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err)
    }
}
