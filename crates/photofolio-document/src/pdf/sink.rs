// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Destinations for a finished PDF.

use std::path::PathBuf;

use photofolio_core::error::{PhotofolioError, Result};
use tracing::info;

/// Somewhere a serialised PDF can be written once.
pub trait DocumentSink {
    /// Store the complete document. Failure aborts the run.
    fn write_document(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Writes the document to a file, replacing any existing one.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSink for FileSink {
    fn write_document(&mut self, bytes: &[u8]) -> Result<()> {
        std::fs::write(&self.path, bytes).map_err(|source| PhotofolioError::Persist {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = bytes.len(), "PDF written");
        Ok(())
    }
}

/// Keeps the document in memory.
impl DocumentSink for Vec<u8> {
    fn write_document(&mut self, bytes: &[u8]) -> Result<()> {
        self.clear();
        self.extend_from_slice(bytes);
        Ok(())
    }
}
