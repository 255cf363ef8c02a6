// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PhotofolioError, Result};
use crate::types::Orientation;

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Image PDF";

/// Where `--generate-example-annotations` writes its file.
pub const DEFAULT_EXAMPLE_PATH: &str = "annotations_example.txt";

/// Settings for one album run.
///
/// The image border is fixed (`BorderStyle::default()`) and is not a setting;
/// unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlbumConfig {
    /// Destination of the finished PDF.
    pub output: PathBuf,
    /// Images in page order. Every one must exist.
    pub inputs: Vec<PathBuf>,
    /// Optional annotation file. Must exist if given.
    pub annotations: Option<PathBuf>,
    /// Text on the title page.
    pub title: String,
    /// Page orientation (A4 either way).
    pub orientation: Orientation,
    /// Write an example annotation file before parsing.
    pub generate_example_annotations: bool,
    /// Path for the generated example file.
    pub example_path: PathBuf,
    /// Decode and resample images on the rayon pool.
    pub parallel: bool,
}

impl Default for AlbumConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("album.pdf"),
            inputs: Vec::new(),
            annotations: None,
            title: DEFAULT_TITLE.to_string(),
            orientation: Orientation::Portrait,
            generate_example_annotations: false,
            example_path: PathBuf::from(DEFAULT_EXAMPLE_PATH),
            parallel: false,
        }
    }
}

impl AlbumConfig {
    /// Load settings from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Check the settings that do not need the filesystem.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(PhotofolioError::InvalidConfig(
                "at least one input image is required".into(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(PhotofolioError::InvalidConfig(
                "output path must not be empty".into(),
            ));
        }
        Ok(())
    }
}
