// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Annotation module: parse `<index>: <text>` side files and generate examples.

pub mod example;
pub mod parser;

pub use example::write_example;
pub use parser::{AnnotationDiagnostic, AnnotationParser, DiagnosticKind, ParsedAnnotations};
