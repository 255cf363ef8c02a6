// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Example annotation file generator.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use photofolio_core::error::Result;
use tracing::info;

/// Images that get a sample line in the generated file.
const MAX_EXAMPLES: usize = 3;

/// Render the example annotation file for `image_count` images.
pub fn example_text(image_count: usize) -> String {
    let mut out = String::new();
    out.push_str("# Example annotation file for photofolio\n");
    out.push_str("# Format: <image number>: <annotation text>\n");
    out.push_str("# Several lines per image are allowed\n\n");

    for index in 1..=image_count.min(MAX_EXAMPLES) {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{index}: This is an example annotation for image {index}");
        if index == 1 {
            let _ = writeln!(out, "{index}: Here is a second line for image {index}");
        }
    }

    if image_count > MAX_EXAMPLES {
        let _ = writeln!(
            out,
            "\n# Add more annotations for images {}-{image_count}...",
            MAX_EXAMPLES + 1
        );
    }

    out
}

/// Write the example file to `path` and return the path written.
pub fn write_example(path: impl AsRef<Path>, image_count: usize) -> Result<PathBuf> {
    let path = path.as_ref();
    std::fs::write(path, example_text(image_count))?;
    info!(path = %path.display(), image_count, "Example annotation file created");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::parser::AnnotationParser;

    #[test]
    fn example_parses_back_without_diagnostics() {
        let parsed = AnnotationParser::new(5)
            .parse_str(&example_text(5))
            .expect("parse");
        assert!(parsed.diagnostics.is_empty());

        let line_counts: Vec<usize> = parsed
            .annotations
            .iter()
            .map(|(_, block)| block.lines().len())
            .collect();
        assert_eq!(line_counts, vec![2, 1, 1, 0, 0]);
    }

    #[test]
    fn small_album_has_no_trailing_hint() {
        let text = example_text(2);
        assert!(!text.contains("Add more annotations"));
        assert!(!text.contains("3: "));
    }

    #[test]
    fn large_album_mentions_remaining_images() {
        assert!(example_text(8).contains("# Add more annotations for images 4-8..."));
    }
}
