// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document assembler: build the album PDF with `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. All coordinates here are PDF points with the origin
// at the bottom-left of the page.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use image::RgbImage;
use photofolio_core::error::Result;
use photofolio_core::types::{
    AnnotationBlock, AnnotationMap, BorderStyle, ImageRecord, Orientation, PageSize, Placement,
};
use printpdf::{
    BuiltinFont, DictItem, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt,
    RawImage, RawImageData, RawImageFormat, XObjectId, XObjectTransform,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::annotations::parser::AnnotationDiagnostic;
use crate::image::border::BorderCompositor;
use crate::layout::fit::LayoutEngine;
use crate::layout::text::{centered_x, encode_win_ansi};
use crate::pdf::sink::DocumentSink;

const TITLE_FONT: BuiltinFont = BuiltinFont::HelveticaBold;
const TITLE_SIZE_PT: f32 = 24.0;
/// Title baseline, measured down from the top edge.
const TITLE_DROP_PT: f32 = 100.0;

const TIMESTAMP_FONT: BuiltinFont = BuiltinFont::Helvetica;
const TIMESTAMP_SIZE_PT: f32 = 12.0;
const TIMESTAMP_DROP_PT: f32 = 130.0;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const LABEL_FONT: BuiltinFont = BuiltinFont::HelveticaBold;
const LABEL_SIZE_PT: f32 = 20.0;
/// Label baseline distance below the image's bottom edge.
const LABEL_GAP_PT: f32 = 30.0;

const ANNOTATION_FONT: BuiltinFont = BuiltinFont::Helvetica;
const ANNOTATION_SIZE_PT: f32 = 12.0;
/// Baseline of the first annotation line above the bottom edge.
const ANNOTATION_BASELINE_PT: f32 = 50.0;
const ANNOTATION_LINE_HEIGHT_PT: f32 = 15.0;

/// At 72 dpi one bitmap pixel covers one point.
const IMAGE_DPI: f32 = 72.0;

/// One sealed page of the album.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    Title {
        title: String,
        generated_at: String,
    },
    Image {
        /// 1-based position in the input list, printed as the page label.
        index: usize,
        path: PathBuf,
        placement: Placement,
        annotation: AnnotationBlock,
    },
}

/// An image that did not make it into the document.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedImage {
    pub index: usize,
    pub path: PathBuf,
    pub reason: String,
}

/// What a run produced, suitable for logging or `--json` output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssemblyReport {
    pub output: Option<PathBuf>,
    pub page_count: usize,
    pub pages: Vec<Page>,
    pub skipped: Vec<SkippedImage>,
    pub annotation_diagnostics: Vec<AnnotationDiagnostic>,
}

/// Builds the title page and one page per decodable image.
///
/// Pages are emitted strictly in input order. Images that fail to decode are
/// logged and left out; their neighbours keep their original numbers.
pub struct DocumentAssembler {
    title: String,
    layout: LayoutEngine,
    compositor: BorderCompositor,
    generated_at: Option<DateTime<Local>>,
    parallel: bool,
}

impl DocumentAssembler {
    pub fn new(title: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            title: title.into(),
            layout: LayoutEngine::for_orientation(orientation),
            compositor: BorderCompositor::new(BorderStyle::default()),
            generated_at: None,
            parallel: false,
        }
    }

    /// Stamp the title page with `timestamp` instead of the current time.
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.generated_at = Some(timestamp);
        self
    }

    /// Decode, border and resample images on the rayon pool.
    ///
    /// Pages are still emitted in input order.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn page_size(&self) -> PageSize {
        self.layout.page()
    }

    /// Assemble the complete document.
    #[instrument(skip_all, fields(images = records.len(), parallel = self.parallel))]
    pub fn assemble(&self, records: &[ImageRecord], annotations: &AnnotationMap) -> AssembledDocument {
        let timestamp = self
            .generated_at
            .unwrap_or_else(Local::now)
            .format(TIMESTAMP_FORMAT)
            .to_string();

        info!(title = %self.title, page = ?self.page_size(), "Assembling album PDF");

        let mut builder = PageBuilder::new(&self.title, self.page_size());
        builder.push_title(&self.title, &timestamp);

        if self.parallel {
            let prepared: Vec<Result<PreparedImage>> =
                records.par_iter().map(|record| self.prepare(record)).collect();
            for (record, outcome) in records.iter().zip(prepared) {
                builder.push_image(record, outcome, annotations);
            }
        } else {
            for record in records {
                builder.push_image(record, self.prepare(record), annotations);
            }
        }

        let document = builder.finish();
        debug!(
            pages = document.pages.len(),
            skipped = document.skipped.len(),
            "Album layout complete"
        );
        document
    }

    /// Decode, border, place and resample one image.
    fn prepare(&self, record: &ImageRecord) -> Result<PreparedImage> {
        let bordered = self.compositor.open(&record.path)?;
        let placement = self.layout.place(bordered.dimensions())?;
        let pixels = bordered.resize_to(&placement);
        Ok(PreparedImage { placement, pixels })
    }
}

/// A bordered image resampled to its placed size.
struct PreparedImage {
    placement: Placement,
    pixels: RgbImage,
}

/// Accumulates pages in order while the assembler walks the records.
struct PageBuilder {
    doc: PdfDocument,
    page_size: PageSize,
    pdf_pages: Vec<PdfPage>,
    pages: Vec<Page>,
    skipped: Vec<SkippedImage>,
}

impl PageBuilder {
    fn new(title: &str, page_size: PageSize) -> Self {
        Self {
            doc: PdfDocument::new(title),
            page_size,
            pdf_pages: Vec::new(),
            pages: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn seal(&mut self, ops: Vec<Op>) {
        let (w_mm, h_mm) = self.page_size.dimensions_mm();
        self.pdf_pages.push(PdfPage::new(Mm(w_mm), Mm(h_mm), ops));
    }

    fn push_title(&mut self, title: &str, timestamp: &str) {
        let width = self.page_size.width;
        let top = self.page_size.height;
        let mut ops = Vec::new();

        centered_text(&mut ops, title, TITLE_FONT, TITLE_SIZE_PT, width, top - TITLE_DROP_PT);
        centered_text(
            &mut ops,
            &format!("Created on: {timestamp}"),
            TIMESTAMP_FONT,
            TIMESTAMP_SIZE_PT,
            width,
            top - TIMESTAMP_DROP_PT,
        );

        self.seal(ops);
        self.pages.push(Page::Title {
            title: title.to_string(),
            generated_at: timestamp.to_string(),
        });
    }

    fn push_image(
        &mut self,
        record: &ImageRecord,
        outcome: Result<PreparedImage>,
        annotations: &AnnotationMap,
    ) {
        let prepared = match outcome {
            Ok(prepared) => prepared,
            Err(err) => {
                warn!(
                    index = record.index,
                    path = %record.path.display(),
                    error = %err,
                    "Skipping image"
                );
                self.skipped.push(SkippedImage {
                    index: record.index,
                    path: record.path.clone(),
                    reason: err.to_string(),
                });
                return;
            }
        };

        let placement = prepared.placement;
        let annotation = annotations.get(record.index).cloned().unwrap_or_default();
        let xobject = self.doc.add_image(&raw_image(prepared.pixels));

        let mut ops = Vec::new();
        draw_image(&mut ops, xobject, &placement);
        centered_text(
            &mut ops,
            &record.index.to_string(),
            LABEL_FONT,
            LABEL_SIZE_PT,
            self.page_size.width,
            placement.y - LABEL_GAP_PT,
        );
        draw_annotation(&mut ops, &annotation, self.page_size.width);

        self.seal(ops);
        debug!(index = record.index, lines = annotation.lines().len(), "Image page sealed");
        self.pages.push(Page::Image {
            index: record.index,
            path: record.path.clone(),
            placement,
            annotation,
        });
    }

    fn finish(mut self) -> AssembledDocument {
        self.doc.with_pages(self.pdf_pages);
        AssembledDocument {
            pdf: self.doc,
            pages: self.pages,
            skipped: self.skipped,
        }
    }
}

/// A finished album waiting to be written.
pub struct AssembledDocument {
    pdf: PdfDocument,
    pages: Vec<Page>,
    skipped: Vec<SkippedImage>,
}

impl AssembledDocument {
    /// Pages in document order; the first is always the title page.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn skipped(&self) -> &[SkippedImage] {
        &self.skipped
    }

    /// Serialise the PDF.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        // Text runs are raw `Tj` operators, which the secure mode strips.
        let options = PdfSaveOptions {
            secure: false,
            ..PdfSaveOptions::default()
        };
        let bytes = self.pdf.save(&options, &mut warnings);
        if !warnings.is_empty() {
            debug!(warnings = warnings.len(), "printpdf reported warnings while saving");
        }
        bytes
    }

    /// Serialise the PDF and hand it to `sink` in one write.
    pub fn write_to(&self, sink: &mut impl DocumentSink) -> Result<()> {
        sink.write_document(&self.to_bytes())
    }

    pub fn report(&self) -> AssemblyReport {
        AssemblyReport {
            output: None,
            page_count: self.pages.len(),
            pages: self.pages.clone(),
            skipped: self.skipped.clone(),
            annotation_diagnostics: Vec::new(),
        }
    }
}

// -- Drawing helpers ----------------------------------------------------------

fn raw_image(pixels: RgbImage) -> RawImage {
    let (width, height) = pixels.dimensions();
    RawImage {
        pixels: RawImageData::U8(pixels.into_raw()),
        width: width as usize,
        height: height as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    }
}

fn draw_image(ops: &mut Vec<Op>, id: XObjectId, placement: &Placement) {
    ops.push(Op::UseXobject {
        id,
        transform: XObjectTransform {
            translate_x: Some(Pt(placement.x)),
            translate_y: Some(Pt(placement.y)),
            scale_x: Some(1.0),
            scale_y: Some(1.0),
            dpi: Some(IMAGE_DPI),
            rotate: None,
        },
    });
}

/// Stack the annotation lines upward from the bottom margin.
fn draw_annotation(ops: &mut Vec<Op>, annotation: &AnnotationBlock, page_width: f32) {
    if annotation.text().is_empty() {
        return;
    }
    for (i, line) in annotation.lines().iter().enumerate() {
        let baseline = ANNOTATION_BASELINE_PT + i as f32 * ANNOTATION_LINE_HEIGHT_PT;
        centered_text(ops, line, ANNOTATION_FONT, ANNOTATION_SIZE_PT, page_width, baseline);
    }
}

fn centered_text(
    ops: &mut Vec<Op>,
    text: &str,
    font: BuiltinFont,
    size: f32,
    page_width: f32,
    baseline: f32,
) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(centered_x(text, font, size, page_width)),
            y: Pt(baseline),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(size),
        font,
    });
    // printpdf writes `TextItem` strings as UTF-8, but the base-14 faces are
    // declared /WinAnsiEncoding. The empty run only registers the font in the
    // page resources; the glyph codes follow as a hex string.
    ops.push(Op::WriteTextBuiltinFont {
        items: Vec::new(),
        font,
    });
    ops.push(Op::Unknown {
        key: "Tj".to_string(),
        value: vec![DictItem::String {
            data: encode_win_ansi(text),
            literal: false,
        }],
    });
    ops.push(Op::EndTextSection);
}
