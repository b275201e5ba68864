//! CLI logic for the Stencil converter.
//!
//! Converts a single BPMN file, or every `.bpmn` file under a folder, into
//! Visio packages.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{error, info, warn};
use thiserror::Error;

use stencil::{Converter, StencilError};

/// Batch-level failures.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Batch folder not found: {}", .0.display())]
    MissingFolder(PathBuf),

    #[error("Failed to scan batch folder {}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No .bpmn files found in {}", .0.display())]
    NoInputs(PathBuf),

    #[error("{failed} of {total} conversions failed")]
    Failed { failed: usize, total: usize },
}

/// Any failure of a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the configuration or converting a single document failed.
    #[error(transparent)]
    Convert(#[from] StencilError),

    #[error(transparent)]
    Batch(#[from] BatchError),
}

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

/// Run the Stencil CLI application
///
/// Converts the input file, or every file of the batch folder, and writes
/// each package to the output directory.
///
/// # Errors
///
/// Returns [`CliError::Convert`] for configuration loading errors and for
/// read, parse or export errors of a single input, and [`CliError::Batch`]
/// for a missing or empty batch folder or any failed batch conversion.
pub fn run(args: &Args) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let converter = Converter::new(app_config);
    let output_dir = args.output.as_deref().map(Path::new);

    if let Some(folder) = &args.batch {
        let summary = run_batch(&converter, Path::new(folder), output_dir)?;
        if summary.failed > 0 {
            return Err(BatchError::Failed {
                failed: summary.failed,
                total: summary.converted + summary.failed,
            }
            .into());
        }
        return Ok(());
    }

    let Some(input) = &args.input else {
        return Err(StencilError::Config(
            "either an input file or --batch is required".to_string(),
        )
        .into());
    };

    info!(input_path = input.as_str(); "Processing diagram");
    let output = converter.convert_file(Path::new(input), output_dir, None)?;
    info!(output_file:? = output; "VSDX exported successfully");

    Ok(())
}

/// Convert every `.bpmn` file under `folder`.
///
/// A failed file is reported and counted; it never stops the others.
///
/// # Errors
///
/// Returns [`BatchError::MissingFolder`], [`BatchError::Scan`] or
/// [`BatchError::NoInputs`] before any conversion starts.
pub fn run_batch(
    converter: &Converter,
    folder: &Path,
    output_dir: Option<&Path>,
) -> Result<Summary, BatchError> {
    if !folder.is_dir() {
        return Err(BatchError::MissingFolder(folder.to_path_buf()));
    }

    let inputs = collect_bpmn_files(folder).map_err(|source| BatchError::Scan {
        path: folder.to_path_buf(),
        source,
    })?;
    if inputs.is_empty() {
        return Err(BatchError::NoInputs(folder.to_path_buf()));
    }
    info!(folder:? = folder, inputs_len = inputs.len(); "Starting batch conversion");

    let mut summary = Summary::default();
    for input in &inputs {
        match converter.convert_file(input, output_dir, None) {
            Ok(output) => {
                info!(input:? = input, output:? = output; "Converted");
                summary.converted += 1;
            }
            Err(err) => {
                warn!(input:? = input; "Conversion failed");
                report(&CliError::from(err));
                summary.failed += 1;
            }
        }
    }

    info!(converted = summary.converted, failed = summary.failed; "Batch finished");
    Ok(summary)
}

/// Log every diagnostic of an error.
pub fn report(err: &CliError) {
    for rendered in error_adapter::render(err) {
        error!("{rendered}");
    }
}

/// All `.bpmn` files below `dir`, in sorted path order.
fn collect_bpmn_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if is_bpmn(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn is_bpmn(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bpmn"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_is_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b").join("inner.bpmn"), "").unwrap();
        fs::write(dir.path().join("c.BPMN"), "").unwrap();
        fs::write(dir.path().join("a.bpmn"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = collect_bpmn_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            [
                PathBuf::from("a.bpmn"),
                PathBuf::from("b").join("inner.bpmn"),
                PathBuf::from("c.BPMN"),
            ]
        );
    }

    #[test]
    fn test_missing_batch_folder() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_batch(&Converter::default(), &dir.path().join("nope"), None);
        assert!(matches!(result, Err(BatchError::MissingFolder(_))));
    }

    #[test]
    fn test_empty_batch_folder() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_batch(&Converter::default(), dir.path(), None);
        let err = result.unwrap_err();
        assert!(matches!(err, BatchError::NoInputs(_)));
        assert!(err.to_string().contains("No .bpmn files"));
    }

    fn batch_args(folder: &Path) -> Args {
        Args {
            input: None,
            batch: Some(folder.to_string_lossy().into_owned()),
            output: None,
            config: None,
            log_level: "off".to_string(),
        }
    }

    #[test]
    fn test_run_keeps_batch_errors_typed() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&batch_args(&dir.path().join("nope"))).unwrap_err();

        assert!(matches!(err, CliError::Batch(BatchError::MissingFolder(_))));
        assert!(err.to_string().starts_with("Batch folder not found"));
        assert!(!err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_run_counts_failed_conversions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.bpmn"), "<definitions").unwrap();
        fs::write(
            dir.path().join("ok.bpmn"),
            r#"<definitions xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL">
                 <process id="P"><task id="T" name="Work" /></process>
               </definitions>"#,
        )
        .unwrap();

        let err = run(&batch_args(dir.path())).unwrap_err();
        assert!(matches!(
            err,
            CliError::Batch(BatchError::Failed {
                failed: 1,
                total: 2
            })
        ));
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.bpmn"), "<definitions").unwrap();
        fs::write(
            dir.path().join("ok.bpmn"),
            r#"<definitions xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL">
                 <process id="P"><task id="T" name="Work" /></process>
               </definitions>"#,
        )
        .unwrap();

        let summary = run_batch(&Converter::default(), dir.path(), None).unwrap();
        assert_eq!(
            summary,
            Summary {
                converted: 1,
                failed: 1
            }
        );
        assert!(dir.path().join("ok.vsdx").exists());
        assert!(!dir.path().join("broken.vsdx").exists());
    }
}
