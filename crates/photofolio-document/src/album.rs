// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One album run: validate inputs, read annotations, assemble, and save.

use std::path::PathBuf;

use photofolio_core::AlbumConfig;
use photofolio_core::error::{PhotofolioError, Result};
use photofolio_core::types::ImageRecord;
use tracing::{info, instrument, warn};

use crate::annotations::example::write_example;
use crate::annotations::parser::AnnotationParser;
use crate::pdf::sink::FileSink;
use crate::pdf::writer::{AssemblyReport, DocumentAssembler};

/// Build the album described by `config` and write it to `config.output`.
///
/// Fails before producing any output when an input image or an explicitly
/// named annotation file is missing. Images that exist but cannot be decoded
/// are left out and listed in the report.
#[instrument(skip_all, fields(images = config.inputs.len(), output = %config.output.display()))]
pub fn run(config: &AlbumConfig) -> Result<AssemblyReport> {
    config.validate()?;
    ensure_inputs_exist(&config.inputs)?;

    let image_count = config.inputs.len();
    let source = annotation_source(config)?;

    let parsed = AnnotationParser::new(image_count).parse_source(source.as_deref())?;
    for diagnostic in &parsed.diagnostics {
        warn!(line = diagnostic.line, "{diagnostic}");
    }

    let records = ImageRecord::from_paths(&config.inputs);
    let document = DocumentAssembler::new(config.title.clone(), config.orientation)
        .with_parallel(config.parallel)
        .assemble(&records, &parsed.annotations);

    document.write_to(&mut FileSink::new(&config.output))?;
    info!(
        path = %config.output.display(),
        pages = document.page_count(),
        skipped = document.skipped().len(),
        "PDF saved"
    );

    let mut report = document.report();
    report.output = Some(config.output.clone());
    report.annotation_diagnostics = parsed.diagnostics;
    Ok(report)
}

/// Every input must exist before any work starts.
fn ensure_inputs_exist(inputs: &[PathBuf]) -> Result<()> {
    match inputs.iter().find(|path| !path.exists()) {
        Some(missing) => Err(PhotofolioError::ImageNotFound(missing.clone())),
        None => Ok(()),
    }
}

/// The annotation file to parse, generating the example file when asked.
///
/// A generated example only becomes the source when no file was named.
fn annotation_source(config: &AlbumConfig) -> Result<Option<PathBuf>> {
    if !config.generate_example_annotations {
        return Ok(config.annotations.clone());
    }

    let example = write_example(&config.example_path, config.inputs.len())?;
    match &config.annotations {
        Some(named) => Ok(Some(named.clone())),
        None => {
            info!(path = %example.display(), "Using generated annotation file");
            Ok(Some(example))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_missing_input_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let present = dir.path().join("present.png");
        std::fs::write(&present, b"x").expect("write");
        let missing = dir.path().join("missing.png");

        let err = ensure_inputs_exist(&[present, missing.clone()]).unwrap_err();
        match err {
            PhotofolioError::ImageNotFound(path) => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn named_source_wins_over_generated_example() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AlbumConfig {
            inputs: vec!["a.png".into()],
            annotations: Some(dir.path().join("mine.txt")),
            generate_example_annotations: true,
            example_path: dir.path().join("example.txt"),
            ..AlbumConfig::default()
        };

        let source = annotation_source(&config).expect("source");
        assert_eq!(source, Some(dir.path().join("mine.txt")));
        assert!(dir.path().join("example.txt").exists());
    }

    #[test]
    fn generated_example_becomes_the_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AlbumConfig {
            inputs: vec!["a.png".into(), "b.png".into()],
            generate_example_annotations: true,
            example_path: dir.path().join("example.txt"),
            ..AlbumConfig::default()
        };

        let source = annotation_source(&config).expect("source");
        assert_eq!(source, Some(dir.path().join("example.txt")));
    }
}
