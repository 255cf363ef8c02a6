// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module: album assembly and document sinks.

pub mod sink;
pub mod writer;

pub use sink::{DocumentSink, FileSink};
pub use writer::{AssembledDocument, AssemblyReport, DocumentAssembler, Page, SkippedImage};
