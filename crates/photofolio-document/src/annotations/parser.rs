// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Annotation file parser.
//
// The file is line based: `<index>: <text>`, blank lines and `#` comments are
// ignored, and several lines for one index accumulate in file order. Bad
// lines are reported back as diagnostics and skipped; only a missing file or
// an unreadable stream fails the parse.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use photofolio_core::error::{PhotofolioError, Result};
use photofolio_core::types::{AnnotationBlock, AnnotationMap};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Why a line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// The line has no `:` between index and text.
    MissingSeparator,
    /// The part before `:` is not an integer.
    InvalidIndex(String),
    /// The index is an integer but not within `1..=max`.
    IndexOutOfRange { index: i64, max: usize },
}

/// A skipped annotation line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationDiagnostic {
    /// 1-based line number in the source.
    pub line: usize,
    pub kind: DiagnosticKind,
    /// The trimmed line as it appeared in the file.
    pub content: String,
}

impl fmt::Display for AnnotationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::MissingSeparator => {
                write!(f, "line {}: no ':' separator, skipping: {}", self.line, self.content)
            }
            DiagnosticKind::InvalidIndex(index) => {
                write!(f, "line {}: '{}' is not an image number, skipping", self.line, index)
            }
            DiagnosticKind::IndexOutOfRange { index, max } => write!(
                f,
                "line {}: image number {} outside valid range (1-{}), skipping",
                self.line, index, max
            ),
        }
    }
}

/// Result of parsing an annotation source.
#[derive(Debug, Clone)]
pub struct ParsedAnnotations {
    /// Exactly one block per image.
    pub annotations: AnnotationMap,
    /// Lines that were skipped, in file order.
    pub diagnostics: Vec<AnnotationDiagnostic>,
}

/// Parses annotation files for a fixed number of images.
pub struct AnnotationParser {
    image_count: usize,
}

impl AnnotationParser {
    pub fn new(image_count: usize) -> Self {
        Self { image_count }
    }

    /// Parse an optional annotation file.
    ///
    /// `None` yields one empty block per image without touching the
    /// filesystem. A path that does not exist is an error.
    #[instrument(skip(self), fields(images = self.image_count))]
    pub fn parse_source(&self, path: Option<&Path>) -> Result<ParsedAnnotations> {
        let Some(path) = path else {
            debug!("No annotation file, using empty annotations");
            return Ok(ParsedAnnotations {
                annotations: AnnotationMap::empty(self.image_count),
                diagnostics: Vec::new(),
            });
        };

        if !path.exists() {
            return Err(PhotofolioError::AnnotationSourceNotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let parsed = self.parse_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            skipped = parsed.diagnostics.len(),
            "Annotation file parsed"
        );
        Ok(parsed)
    }

    /// Parse annotations from any buffered reader.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ParsedAnnotations> {
        let mut collected: Vec<Vec<String>> = vec![Vec::new(); self.image_count];
        let mut diagnostics = Vec::new();

        for (pos, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match self.parse_line(trimmed) {
                Ok((index, text)) => collected[index - 1].push(text.to_string()),
                Err(kind) => diagnostics.push(AnnotationDiagnostic {
                    line: pos + 1,
                    kind,
                    content: trimmed.to_string(),
                }),
            }
        }

        let blocks = collected
            .into_iter()
            .map(AnnotationBlock::from_lines)
            .collect();

        Ok(ParsedAnnotations {
            annotations: AnnotationMap::from_blocks(blocks),
            diagnostics,
        })
    }

    /// Parse annotations held in memory.
    pub fn parse_str(&self, text: &str) -> Result<ParsedAnnotations> {
        self.parse_reader(text.as_bytes())
    }

    /// Split one non-blank, non-comment line into a valid index and its text.
    fn parse_line<'a>(&self, line: &'a str) -> std::result::Result<(usize, &'a str), DiagnosticKind> {
        let (index_part, text) = line
            .split_once(':')
            .ok_or(DiagnosticKind::MissingSeparator)?;

        let index_part = index_part.trim();
        let index: i64 = index_part
            .parse()
            .map_err(|_| DiagnosticKind::InvalidIndex(index_part.to_string()))?;

        match usize::try_from(index) {
            Ok(i) if (1..=self.image_count).contains(&i) => Ok((i, text.trim())),
            _ => Err(DiagnosticKind::IndexOutOfRange {
                index,
                max: self.image_count,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, images: usize) -> ParsedAnnotations {
        AnnotationParser::new(images).parse_str(text).expect("parse")
    }

    #[test]
    fn no_source_yields_empty_blocks() {
        let parsed = AnnotationParser::new(4).parse_source(None).expect("parse");
        assert_eq!(parsed.annotations.texts(), vec![""; 4]);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn lines_for_one_index_accumulate_in_order() {
        let parsed = parse("1: a\n1: b\n", 1);
        assert_eq!(parsed.annotations.get(1).map(|b| b.text()), Some("a\nb".into()));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let parsed = parse("# header\n\n   \n  # indented comment\n2: second\n", 2);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.annotations.texts(), vec!["".to_string(), "second".to_string()]);
    }

    #[test]
    fn out_of_range_index_is_dropped() {
        let parsed = parse("0: zero\n1: one\n3: three\n-1: minus\n", 2);
        assert_eq!(parsed.annotations.texts(), vec!["one".to_string(), String::new()]);
        assert_eq!(parsed.diagnostics.len(), 3);
        assert_eq!(
            parsed.diagnostics[1].kind,
            DiagnosticKind::IndexOutOfRange { index: 3, max: 2 }
        );
        assert_eq!(parsed.diagnostics[1].line, 3);
    }

    #[test]
    fn missing_separator_is_skipped_and_parsing_continues() {
        let parsed = parse("just some text\n1: kept\n", 1);
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].kind, DiagnosticKind::MissingSeparator);
        assert_eq!(parsed.diagnostics[0].line, 1);
        assert_eq!(parsed.annotations.get(1).map(|b| b.text()), Some("kept".into()));
    }

    #[test]
    fn non_integer_index_is_skipped() {
        let parsed = parse("one: text\n1.5: text\n1: ok\n", 1);
        assert_eq!(parsed.diagnostics.len(), 2);
        assert_eq!(
            parsed.diagnostics[0].kind,
            DiagnosticKind::InvalidIndex("one".into())
        );
        assert_eq!(parsed.annotations.get(1).map(|b| b.text()), Some("ok".into()));
    }

    #[test]
    fn text_splits_on_first_colon_only() {
        let parsed = parse("  2 :  time: 12:30  \n", 2);
        assert_eq!(
            parsed.annotations.get(2).map(|b| b.text()),
            Some("time: 12:30".into())
        );
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let parsed = parse("1: first\r\n1: second\r\n", 1);
        assert_eq!(
            parsed.annotations.get(1).map(|b| b.text()),
            Some("first\nsecond".into())
        );
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = AnnotationParser::new(1)
            .parse_source(Some(Path::new("/nonexistent/photofolio/notes.txt")))
            .unwrap_err();
        assert!(matches!(err, PhotofolioError::AnnotationSourceNotFound(_)));
    }

    #[test]
    fn diagnostic_messages_name_the_line() {
        let parsed = parse("7: far away\n", 3);
        assert_eq!(
            parsed.diagnostics[0].to_string(),
            "line 1: image number 7 outside valid range (1-3), skipping"
        );
    }
}
