// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page layout: scale a bordered image into the content box and centre it on
// the page.

use photofolio_core::error::{PhotofolioError, Result};
use photofolio_core::types::{ContentBox, Orientation, PageSize, Placement};
use tracing::debug;

/// Computes image placements for one page size.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    page: PageSize,
}

impl LayoutEngine {
    pub fn new(page: PageSize) -> Self {
        Self { page }
    }

    /// Engine for an A4 page in the given orientation.
    pub fn for_orientation(orientation: Orientation) -> Self {
        Self::new(orientation.page_size())
    }

    pub fn page(&self) -> PageSize {
        self.page
    }

    pub fn content_box(&self) -> ContentBox {
        self.page.content_box()
    }

    /// Place an image of `size` pixels on this engine's page.
    pub fn place(&self, size: (u32, u32)) -> Result<Placement> {
        fit(self.content_box(), self.page, size)
    }
}

/// Scale `size` to fit `content` and centre it on `page`.
///
/// One factor, `min(maxW / w, maxH / h)`, is applied to both axes, so the
/// aspect ratio is kept. Images smaller than the box are enlarged. The
/// scaled size is floored to whole points but never below one.
pub fn fit(content: ContentBox, page: PageSize, size: (u32, u32)) -> Result<Placement> {
    let (w, h) = size;
    if w == 0 || h == 0 {
        return Err(PhotofolioError::Layout(format!(
            "cannot place an image of {w}x{h} pixels"
        )));
    }

    let (w, h) = (f64::from(w), f64::from(h));
    let scale = (f64::from(content.max_width) / w).min(f64::from(content.max_height) / h);

    let width = ((w * scale).floor() as u32).max(1);
    let height = ((h * scale).floor() as u32).max(1);

    let x = (page.width - width as f32) / 2.0;
    let y = (page.height - height as f32) / 2.0;

    debug!(scale, width, height, x, y, "Image placed");
    Ok(Placement {
        width,
        height,
        x,
        y,
    })
}
