// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Border compositor: decode an image, normalise it to RGB8, and pad it with a
// uniform coloured border. Operates on in-memory images using the `image`
// crate.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, Rgb, RgbImage};
use photofolio_core::error::{PhotofolioError, Result};
use photofolio_core::types::{BorderStyle, Placement};
use tracing::{debug, instrument};

/// Adds a fixed border to decoded images.
///
/// ```ignore
/// let bordered = BorderCompositor::new(BorderStyle::default()).open("photo.jpg")?;
/// let pixels = bordered.resize_to(&placement);
/// ```
pub struct BorderCompositor {
    style: BorderStyle,
}

impl BorderCompositor {
    pub fn new(style: BorderStyle) -> Self {
        Self { style }
    }

    /// Decode the image at `path` and border it.
    ///
    /// The format is sniffed from the file content, so a misnamed file still
    /// decodes. Any failure is reported as [`PhotofolioError::ImageDecode`].
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn open(&self, path: &Path) -> Result<BorderedImage> {
        let decode_err = |reason: String| PhotofolioError::ImageDecode {
            path: path.to_path_buf(),
            reason,
        };

        let image = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| decode_err(err.to_string()))?
            .decode()
            .map_err(|err| decode_err(err.to_string()))?;

        debug!(width = image.width(), height = image.height(), "Image decoded");
        self.compose(&image)
    }

    /// Decode encoded bytes (JPEG, PNG, ...) and border the result.
    pub fn from_bytes(&self, data: &[u8]) -> Result<BorderedImage> {
        let image = image::load_from_memory(data).map_err(|err| PhotofolioError::ImageDecode {
            path: "<memory>".into(),
            reason: err.to_string(),
        })?;
        self.compose(&image)
    }

    /// Border an already-decoded image. Alpha and palettes are dropped.
    pub fn compose(&self, image: &DynamicImage) -> Result<BorderedImage> {
        Ok(BorderedImage {
            image: add_border(&image.to_rgb8(), self.style)?,
        })
    }
}

/// Pad `image` with `style.width` pixels of `style.color` on every side.
///
/// The original pixels are copied unchanged to `(width, width)`. A canvas
/// wider or taller than `u32::MAX` is a [`PhotofolioError::Layout`] error.
pub fn add_border(image: &RgbImage, style: BorderStyle) -> Result<RgbImage> {
    let pad = style.width;
    let grow = |side: u32| {
        pad.checked_mul(2)
            .and_then(|both| side.checked_add(both))
            .ok_or_else(|| {
                PhotofolioError::Layout(format!(
                    "a {pad}px border around {}x{} pixels overflows the canvas",
                    image.width(),
                    image.height()
                ))
            })
    };
    let (width, height) = (grow(image.width())?, grow(image.height())?);
    let mut canvas = RgbImage::from_pixel(width, height, Rgb(style.color));
    imageops::replace(&mut canvas, image, i64::from(pad), i64::from(pad));
    Ok(canvas)
}

/// An RGB8 image that already carries its border.
#[derive(Debug, Clone)]
pub struct BorderedImage {
    image: RgbImage,
}

impl BorderedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    /// Resample to the placed size with Lanczos3, one pixel per point.
    #[instrument(skip(self), fields(width = placement.width, height = placement.height))]
    pub fn resize_to(&self, placement: &Placement) -> RgbImage {
        if self.image.dimensions() == (placement.width, placement.height) {
            return self.image.clone();
        }
        imageops::resize(
            &self.image,
            placement.width,
            placement.height,
            FilterType::Lanczos3,
        )
    }
}
