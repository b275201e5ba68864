//! Stencil - BPMN 2.0 to Visio geometry compiler.
//!
//! Reads BPMN 2.0 XML with its diagram interchange geometry, maps every
//! shape, label and flow onto a single Visio page and packages the result
//! as a `.vsdx` file. Source geometry is kept as drawn; nothing is laid out
//! again.

pub mod config;

mod error;
pub mod export;
pub mod layout;
mod title;

pub use stencil_core::{color, draw, geometry, model};

pub use error::StencilError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, trace, warn};

use config::AppConfig;
use export::{Exporter, vsdx::VsdxBuilder};
use layout::Page;
use model::Diagram;

/// Converter for turning BPMN documents into Visio packages.
///
/// The stages can be driven one at a time or all at once with
/// [`Converter::convert_file`].
///
/// # Examples
///
/// ```rust,no_run
/// use stencil::{Converter, config::AppConfig};
///
/// let source = std::fs::read_to_string("order.bpmn").expect("Failed to read");
///
/// let converter = Converter::new(AppConfig::default());
///
/// // Parse source to the diagram model
/// let diagram = converter.parse(&source).expect("Failed to parse");
///
/// // Place every shape on the page
/// let page = converter.compile(&diagram);
///
/// // Package the page
/// let bytes = converter.render_vsdx(&page, "Order").expect("Failed to package");
/// ```
#[derive(Debug, Default)]
pub struct Converter {
    config: AppConfig,
}

impl Converter {
    /// Create a new converter with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse BPMN XML into a diagram.
    ///
    /// Tolerated geometry defects are logged as warnings and do not fail the
    /// parse.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::Parse`] if the text is not well-formed XML or
    /// not a BPMN document.
    pub fn parse(&self, source: &str) -> Result<Diagram, StencilError> {
        info!("Parsing diagram");

        let parsed = stencil_parser::parse(source)
            .map_err(|err| StencilError::new_parse_error(err, source))?;

        for warning in &parsed.warnings {
            let code = warning.code().map(|code| code.to_string()).unwrap_or_default();
            warn!(code = code.as_str(); "{}", warning.message());
        }

        debug!(
            elements_len = parsed.diagram.elements_len(),
            flows_len = parsed.diagram.flows().len();
            "Diagram parsed successfully"
        );
        trace!(diagram:? = parsed.diagram; "Parsed diagram");

        Ok(parsed.diagram)
    }

    /// Place every element and flow of a diagram on a page.
    pub fn compile(&self, diagram: &Diagram) -> Page {
        info!("Compiling page");
        layout::assemble(diagram, &self.config)
    }

    /// Package a page as VSDX bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::Export`] if the package cannot be built.
    pub fn render_vsdx(&self, page: &Page, title: &str) -> Result<Vec<u8>, StencilError> {
        let bytes = export::vsdx::package(page, title)?;
        info!(bytes_len = bytes.len(); "VSDX packaged");
        Ok(bytes)
    }

    /// Convert one file end to end.
    ///
    /// The output is written to `<output_dir>/<input stem>.vsdx`, next to the
    /// input when no directory is given. Without an explicit `title` the page
    /// name is derived from the input file name.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::EmptyDiagram`] if the document holds no BPMN
    /// elements, and any read, parse or export error. A failed conversion
    /// leaves no output file behind.
    pub fn convert_file(
        &self,
        input: &Path,
        output_dir: Option<&Path>,
        title: Option<&str>,
    ) -> Result<PathBuf, StencilError> {
        info!(input:? = input; "Converting file");

        let source = fs::read_to_string(input)?;
        let diagram = self.parse(&source)?;
        if diagram.is_empty() {
            return Err(StencilError::EmptyDiagram);
        }

        let page = self.compile(&diagram);

        let file_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let title = match title {
            Some(title) => title.to_string(),
            None => title::from_file_name(&file_name, self.config.page().default_title()),
        };

        let output = output_path(input, output_dir);
        let mut exporter = VsdxBuilder::new(&output).with_title(title).build();
        exporter.export_page(&page)?;

        Ok(output)
    }
}

/// `<dir>/<stem>.vsdx`, where `dir` defaults to the input's directory.
fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let dir = output_dir
        .or_else(|| input.parent())
        .unwrap_or_else(|| Path::new(""));
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".vsdx");
    dir.join(name)
}
