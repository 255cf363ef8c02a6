// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Photofolio.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Photofolio operations.
#[derive(Debug, Error)]
pub enum PhotofolioError {
    // -- Required inputs (fatal, raised before any output) --
    #[error("image file not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error("annotation file not found: {}", .0.display())]
    AnnotationSourceNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // -- Per-image errors (the image is dropped, the run continues) --
    #[error("failed to decode image {}: {reason}", .path.display())]
    ImageDecode { path: PathBuf, reason: String },

    #[error("layout failed: {0}")]
    Layout(String),

    // -- Document output --
    #[error("failed to write document to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -- Storage / serialisation --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PhotofolioError {
    /// Whether this error aborts the whole run.
    ///
    /// Per-image failures (`ImageDecode`, `Layout`) only drop the affected
    /// page; everything else terminates with a non-zero exit status.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::ImageDecode { .. } | Self::Layout(_))
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PhotofolioError>;
