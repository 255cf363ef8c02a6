// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photofolio: bind images into a numbered, annotated A4 PDF.
//
// Entry point. Parses arguments, initialises logging, runs the album build,
// and maps fatal errors to a non-zero exit status.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use photofolio_core::error::Result;
use photofolio_core::human_errors::humanize_error;
use photofolio_core::types::Orientation;
use photofolio_core::AlbumConfig;

#[derive(Debug, Parser)]
#[command(name = "photofolio")]
#[command(version)]
#[command(
    about = "Create an A4 PDF with bordered, numbered, annotated images and a timestamped title page",
    long_about = None
)]
struct Cli {
    /// Output PDF file, e.g. output.pdf
    #[arg(short, long, value_name = "FILE", required_unless_present = "config")]
    output: Option<PathBuf>,

    /// Input images, in page order
    #[arg(
        short,
        long,
        value_name = "IMAGE",
        num_args = 1..,
        required_unless_present = "config"
    )]
    input: Vec<PathBuf>,

    /// Annotation file with lines like '1: annotation'
    #[arg(short = 'c', long, visible_alias = "comments", value_name = "FILE")]
    annotations: Option<PathBuf>,

    /// Title on the first page [default: Image PDF]
    #[arg(short, long)]
    title: Option<String>,

    /// Page orientation [default: portrait]
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Write an example annotation file for the given images; it is used
    /// when no annotation file is given
    #[arg(long)]
    generate_example_annotations: bool,

    /// Decode and scale images in parallel
    #[arg(long)]
    parallel: bool,

    /// JSON settings file; command-line options override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a JSON report of the produced pages to stdout
    #[arg(long)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

impl Cli {
    /// Merge the optional settings file with the command-line options.
    fn into_config(self) -> Result<AlbumConfig> {
        let mut config = match &self.config {
            Some(path) => AlbumConfig::from_json_file(path)?,
            None => AlbumConfig::default(),
        };

        if let Some(output) = self.output {
            config.output = output;
        }
        if !self.input.is_empty() {
            config.inputs = self.input;
        }
        if self.annotations.is_some() {
            config.annotations = self.annotations;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        if let Some(orientation) = self.orientation {
            config.orientation = orientation.into();
        }
        config.generate_example_annotations |= self.generate_example_annotations;
        config.parallel |= self.parallel;

        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    let result = cli.into_config().and_then(|config| {
        tracing::debug!(?config, "Configuration resolved");
        photofolio_document::run(&config)
    });

    match result {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{out}"),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to serialise report");
                        return ExitCode::FAILURE;
                    }
                }
            } else if let Some(output) = &report.output {
                println!("PDF saved to: {}", output.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let human = humanize_error(&err);
            tracing::error!(error = %err, severity = ?human.severity, "photofolio failed");
            eprintln!("Error: {}", human.message);
            eprintln!("{}", human.suggestion);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photofolio_core::error::PhotofolioError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("photofolio").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn defaults_apply_when_options_are_omitted() {
        let config = parse(&["-o", "out.pdf", "-i", "a.png", "b.png"])
            .into_config()
            .expect("config");
        assert_eq!(config.output, PathBuf::from("out.pdf"));
        assert_eq!(config.inputs, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
        assert_eq!(config.title, "Image PDF");
        assert_eq!(config.orientation, Orientation::Portrait);
        assert!(config.annotations.is_none());
    }

    #[test]
    fn all_options_are_carried_into_the_config() {
        let config = parse(&[
            "--output",
            "out.pdf",
            "--input",
            "a.png",
            "--comments",
            "notes.txt",
            "--title",
            "Trip",
            "--orientation",
            "landscape",
            "--generate-example-annotations",
            "--parallel",
        ])
        .into_config()
        .expect("config");
        assert_eq!(config.annotations, Some(PathBuf::from("notes.txt")));
        assert_eq!(config.title, "Trip");
        assert_eq!(config.orientation, Orientation::Landscape);
        assert!(config.generate_example_annotations);
        assert!(config.parallel);
    }

    #[test]
    fn output_and_input_are_required() {
        assert!(Cli::try_parse_from(["photofolio", "-i", "a.png"]).is_err());
        assert!(Cli::try_parse_from(["photofolio", "-o", "out.pdf"]).is_err());
    }

    #[test]
    fn unknown_orientation_is_rejected() {
        assert!(
            Cli::try_parse_from(["photofolio", "-o", "o.pdf", "-i", "a.png", "--orientation", "diagonal"])
                .is_err()
        );
    }

    #[test]
    fn command_line_overrides_settings_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = dir.path().join("settings.json");
        std::fs::write(
            &settings,
            r#"{"output": "from-file.pdf", "inputs": ["x.png"], "title": "From file"}"#,
        )
        .expect("write settings");

        let config = parse(&["--config", settings.to_str().expect("utf-8 path"), "-t", "Override"])
            .into_config()
            .expect("config");
        assert_eq!(config.output, PathBuf::from("from-file.pdf"));
        assert_eq!(config.inputs, vec![PathBuf::from("x.png")]);
        assert_eq!(config.title, "Override");
    }

    #[test]
    fn settings_file_cannot_change_the_border() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = dir.path().join("settings.json");
        std::fs::write(
            &settings,
            r#"{"output": "o.pdf", "inputs": ["x.png"], "border": {"color": [0, 0, 0], "width": 3000000000}}"#,
        )
        .expect("write settings");

        let err = parse(&["--config", settings.to_str().expect("utf-8 path")])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, PhotofolioError::Serialization(_)));
        assert!(err.is_fatal());
    }
}
