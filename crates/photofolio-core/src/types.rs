// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Photofolio.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Points per millimetre (1 pt = 1/72 inch).
const PT_PER_MM: f32 = 72.0 / 25.4;

/// A4 paper in millimetres (portrait).
const A4_MM: (f32, f32) = (210.0, 297.0);

/// Fraction of the page width and height available to the bordered image.
pub const CONTENT_BOX_FRACTION: f32 = 0.8;

/// One input image and its 1-based position in the input list.
///
/// The index is fixed when the list is read and survives images being
/// dropped later, so page labels always refer to the original position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub index: usize,
    pub path: PathBuf,
}

impl ImageRecord {
    /// Number an ordered list of paths starting at 1.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<Self> {
        paths
            .iter()
            .enumerate()
            .map(|(pos, path)| Self {
                index: pos + 1,
                path: path.as_ref().to_path_buf(),
            })
            .collect()
    }
}

/// The annotation text attached to one image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationBlock {
    lines: Vec<String>,
}

impl AnnotationBlock {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The block as a single string, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Annotation blocks for images `1..=N`.
///
/// Always holds exactly one (possibly empty) block per image; lookups
/// outside that range return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationMap {
    blocks: Vec<AnnotationBlock>,
}

impl AnnotationMap {
    /// A map of `count` empty blocks.
    pub fn empty(count: usize) -> Self {
        Self {
            blocks: vec![AnnotationBlock::default(); count],
        }
    }

    /// Build from blocks ordered by image index, the first being image 1.
    pub fn from_blocks(blocks: Vec<AnnotationBlock>) -> Self {
        Self { blocks }
    }

    /// Block for the 1-based image `index`.
    pub fn get(&self, index: usize) -> Option<&AnnotationBlock> {
        index.checked_sub(1).and_then(|pos| self.blocks.get(pos))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// `(index, block)` pairs in image order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &AnnotationBlock)> {
        self.blocks.iter().enumerate().map(|(pos, b)| (pos + 1, b))
    }

    /// The joined text of every block, in image order.
    pub fn texts(&self) -> Vec<String> {
        self.blocks.iter().map(AnnotationBlock::text).collect()
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// A4 page dimensions for this orientation, in points.
    pub fn page_size(&self) -> PageSize {
        let (w_mm, h_mm) = match self {
            Self::Portrait => A4_MM,
            Self::Landscape => (A4_MM.1, A4_MM.0),
        };
        PageSize {
            width: w_mm * PT_PER_MM,
            height: h_mm * PT_PER_MM,
        }
    }
}

/// Physical page size in PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// Page dimensions in millimetres (printpdf builds pages from `Mm`).
    pub fn dimensions_mm(&self) -> (f32, f32) {
        (self.width / PT_PER_MM, self.height / PT_PER_MM)
    }

    /// The box an image is scaled into on this page.
    pub fn content_box(&self) -> ContentBox {
        ContentBox {
            max_width: self.width * CONTENT_BOX_FRACTION,
            max_height: self.height * CONTENT_BOX_FRACTION,
        }
    }
}

/// Drawable area reserved for the bordered image, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentBox {
    pub max_width: f32,
    pub max_height: f32,
}

/// Where a bordered image lands on its page.
///
/// `width`/`height` are the scaled size in points, which is also the pixel
/// size the bitmap is resampled to. `x`/`y` is the bottom-left corner in
/// PDF page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub width: u32,
    pub height: u32,
    pub x: f32,
    pub y: f32,
}

/// Uniform border drawn around every image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderStyle {
    /// RGB colour of the border.
    pub color: [u8; 3],
    /// Border width in pixels on each side.
    pub width: u32,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            width: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_numbered_from_one() {
        let records = ImageRecord::from_paths(&["a.png", "b.jpg", "c.png"]);
        let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(records[1].path, PathBuf::from("b.jpg"));
    }

    #[test]
    fn annotation_map_rejects_out_of_range_lookups() {
        let map = AnnotationMap::empty(2);
        assert_eq!(map.len(), 2);
        assert!(map.get(0).is_none());
        assert!(map.get(1).is_some());
        assert!(map.get(2).is_some());
        assert!(map.get(3).is_none());
    }

    #[test]
    fn block_text_joins_with_newline() {
        let block = AnnotationBlock::from_lines(vec!["a".into(), "b".into()]);
        assert_eq!(block.text(), "a\nb");
        assert!(AnnotationBlock::default().text().is_empty());
    }

    #[test]
    fn landscape_swaps_a4_dimensions() {
        let portrait = Orientation::Portrait.page_size();
        let landscape = Orientation::Landscape.page_size();
        assert!((portrait.width - 595.2756).abs() < 0.01);
        assert!((portrait.height - 841.8898).abs() < 0.01);
        assert_eq!(portrait.width, landscape.height);
        assert_eq!(portrait.height, landscape.width);
    }

    #[test]
    fn content_box_is_eighty_percent() {
        let page = PageSize {
            width: 500.0,
            height: 1000.0,
        };
        let content = page.content_box();
        assert_eq!(content.max_width, 400.0);
        assert_eq!(content.max_height, 800.0);
    }
}
