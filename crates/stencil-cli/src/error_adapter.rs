//! miette reports for CLI failures.
//!
//! A parse failure becomes one report per reader diagnostic. Each keeps its
//! own severity, its `E1xx`/`E2xx`/`W3xx` code and its labeled spans, and is
//! rendered against the document text. Warnings collected before the fatal
//! error are reported too. Every other failure becomes a single report with
//! a `stencil::` code.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan,
    SourceSpan,
};

use stencil::StencilError;
use stencil_parser::error::{Diagnostic, ErrorCode, Severity};

use crate::{BatchError, CliError};

/// Render every report of an error as plain text, one entry per report.
pub fn render(err: &CliError) -> Vec<String> {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

    match err {
        CliError::Convert(StencilError::Parse { err, src }) => err
            .diagnostics()
            .iter()
            .map(|diag| render_one(&handler, &DocumentReport { diag, src }))
            .collect(),
        _ => vec![render_one(&handler, &FailureReport(err))],
    }
}

fn render_one(handler: &GraphicalReportHandler, report: &dyn MietteDiagnostic) -> String {
    let mut out = String::new();
    if handler.render_report(&mut out, report).is_err() {
        out = report.to_string();
    }
    out
}

/// A reader diagnostic together with the document it points into.
#[derive(Debug)]
struct DocumentReport<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl fmt::Display for DocumentReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for DocumentReport<'_> {}

impl MietteDiagnostic for DocumentReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|code| Box::new(code.as_str()) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .or_else(|| self.diag.code().map(code_help))
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.diag.labels().is_empty() {
            return None;
        }
        Some(Box::new(self.diag.labels().iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// What a reader code means for the converted page.
fn code_help(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::E100 => "the file must be well-formed XML",
        ErrorCode::E200 => "the root element must be a BPMN 2.0 `definitions` element",
        ErrorCode::W300 | ErrorCode::W301 | ErrorCode::W302 => {
            "the element is kept but not drawn on the page"
        }
        ErrorCode::W303 => "the default color is used instead",
        ErrorCode::W304 | ErrorCode::W305 => "the element is left out of the diagram",
    }
}

/// A failure without a location in any document.
#[derive(Debug)]
struct FailureReport<'a>(&'a CliError);

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for FailureReport<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for FailureReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Convert(StencilError::Io(_)) => "stencil::io",
            CliError::Convert(StencilError::Parse { .. }) => "stencil::parse",
            CliError::Convert(StencilError::EmptyDiagram) => "stencil::empty",
            CliError::Convert(StencilError::Config(_)) => "stencil::config",
            CliError::Convert(StencilError::Export(_)) => "stencil::export",
            CliError::Batch(BatchError::MissingFolder(_)) => "stencil::batch::missing_folder",
            CliError::Batch(BatchError::Scan { .. }) => "stencil::batch::scan",
            CliError::Batch(BatchError::NoInputs(_)) => "stencil::batch::no_inputs",
            CliError::Batch(BatchError::Failed { .. }) => "stencil::batch::failed",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Convert(StencilError::EmptyDiagram) => {
                "the document has no process elements; check that it is a BPMN 2.0 model"
            }
            CliError::Batch(BatchError::MissingFolder(_)) => {
                "pass an existing directory to --batch"
            }
            CliError::Batch(BatchError::NoInputs(_)) => {
                "only files with a .bpmn extension are converted"
            }
            CliError::Batch(BatchError::Failed { .. }) => "each failed file is reported above",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use stencil_parser::{ParseError, Span};

    use super::*;

    fn parse_failure(diagnostics: Vec<Diagnostic>, src: &str) -> CliError {
        StencilError::new_parse_error(ParseError::new(diagnostics), src).into()
    }

    #[test]
    fn test_parse_failure_renders_each_diagnostic() {
        let src = r#"<definitions><dc:Bounds x="ten" y="0"/><task"#;
        let err = parse_failure(
            vec![
                Diagnostic::warning("shape `Task_1` has a non-numeric `x`")
                    .with_code(ErrorCode::W300)
                    .with_label(Span::new(26..31), "not a number"),
                Diagnostic::error("unexpected end of document")
                    .with_code(ErrorCode::E100)
                    .with_label(Span::new(39..44), "unclosed element"),
            ],
            src,
        );

        let rendered = render(&err);
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].contains("W300"));
        assert!(rendered[0].contains("non-numeric"));
        assert!(rendered[0].contains("not a number"));
        assert!(rendered[1].contains("E100"));
        assert!(rendered[1].contains("unclosed element"));
    }

    #[test]
    fn test_document_report_severity_and_labels() {
        let diag = Diagnostic::warning("edge `Flow_1` has no waypoints")
            .with_code(ErrorCode::W302)
            .with_label(Span::new(0..5), "this edge")
            .with_secondary_label(Span::new(10..15), "its flow");
        let report = DocumentReport {
            diag: &diag,
            src: "<bpmndi:BPMNEdge/>",
        };

        assert_eq!(report.severity(), Some(miette::Severity::Warning));
        assert_eq!(report.code().unwrap().to_string(), "W302");

        let labels: Vec<_> = report.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
        assert_eq!(labels[1].label(), Some("its flow"));
    }

    #[test]
    fn test_help_falls_back_to_code() {
        let diag = Diagnostic::error("root element is `svg`").with_code(ErrorCode::E200);
        let report = DocumentReport {
            diag: &diag,
            src: "<svg/>",
        };
        assert_eq!(
            report.help().unwrap().to_string(),
            "the root element must be a BPMN 2.0 `definitions` element"
        );

        let diag = diag.with_help("export the model as BPMN 2.0 XML");
        let report = DocumentReport {
            diag: &diag,
            src: "<svg/>",
        };
        assert_eq!(
            report.help().unwrap().to_string(),
            "export the model as BPMN 2.0 XML"
        );
    }

    #[test]
    fn test_batch_failure_report() {
        let err = CliError::from(BatchError::MissingFolder(PathBuf::from("models")));
        let report = FailureReport(&err);

        assert_eq!(
            report.code().unwrap().to_string(),
            "stencil::batch::missing_folder"
        );
        assert!(report.to_string().starts_with("Batch folder not found"));

        let rendered = render(&err);
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].contains("--batch"));
    }

    #[test]
    fn test_empty_diagram_report() {
        let err = CliError::from(StencilError::EmptyDiagram);
        let report = FailureReport(&err);

        assert_eq!(report.code().unwrap().to_string(), "stencil::empty");
        assert!(report.help().is_some());
        assert_eq!(report.severity(), None);
    }
}
