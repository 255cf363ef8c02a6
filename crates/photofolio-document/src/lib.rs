// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// photofolio-document: Album building for Photofolio.
//
// Provides the annotation file parser, border compositing, page layout, and
// PDF assembly, plus `run`, which ties them together for one configured
// album.

pub mod album;
pub mod annotations;
pub mod image;
pub mod layout;
pub mod pdf;

// Re-export the primary structs so callers can use `photofolio_document::DocumentAssembler` etc.
pub use album::run;
pub use annotations::parser::AnnotationParser;
pub use image::border::BorderCompositor;
pub use layout::fit::LayoutEngine;
pub use pdf::sink::{DocumentSink, FileSink};
pub use pdf::writer::{AssemblyReport, DocumentAssembler};
