//! PDF report writer
//!
//! A4 portrait pages with a centered title header and a page-number footer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Rgb,
};

use super::{ReportError, ReportResult, ReportWriter, REPORT_TITLE};

// ============================================================================
// Layout Constants
// ============================================================================

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 10.0;

const HEADER_Y_MM: f32 = PAGE_HEIGHT_MM - 17.0;
const FOOTER_Y_MM: f32 = 10.0;
const BODY_TOP_MM: f32 = PAGE_HEIGHT_MM - 37.0;
const BODY_BOTTOM_MM: f32 = 25.0;
const LINE_HEIGHT_MM: f32 = 10.0;

const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const FOOTER_SIZE: f32 = 8.0;

const PT_TO_MM: f32 = 0.352_778;

const COLOR_TITLE: (u8, u8, u8) = (0, 102, 204);
const COLOR_BODY: (u8, u8, u8) = (50, 50, 50);
const COLOR_FOOTER: (u8, u8, u8) = (128, 128, 128);

// ============================================================================
// Helpers
// ============================================================================

fn rgb_to_printpdf(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}

fn add_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    x: Mm,
    y: Mm,
    size: f32,
    color: (u8, u8, u8),
) {
    layer.set_fill_color(rgb_to_printpdf(color.0, color.1, color.2));
    layer.use_text(text, size, x, y, font);
}

/// Left edge that roughly centers `text` on the page.
///
/// Builtin fonts carry no metrics here, so width uses an average Helvetica
/// glyph of `em_ratio` em.
fn centered_x(text: &str, size: f32, em_ratio: f32) -> Mm {
    let width = text.chars().count() as f32 * size * em_ratio * PT_TO_MM;
    Mm(((PAGE_WIDTH_MM - width) / 2.0).max(MARGIN_LEFT_MM))
}

// ============================================================================
// Placements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementKind {
    Header,
    Footer,
    Body,
}

/// One run of text drawn onto a page
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    /// 1-based page number
    pub page: usize,
    pub kind: PlacementKind,
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
}

// ============================================================================
// Writer
// ============================================================================

pub struct PdfReportWriter {
    doc: PdfDocumentReference,
    /// Page created together with the document, used by the first `open_page`
    first_page: Option<(PdfPageIndex, PdfLayerIndex)>,
    layer: Option<PdfLayerReference>,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    font_italic: IndirectFontRef,
    page_count: usize,
    cursor_y: f32,
    placements: Vec<TextPlacement>,
}

impl PdfReportWriter {
    pub fn new() -> ReportResult<Self> {
        let (doc, page, layer) = PdfDocument::new(
            REPORT_TITLE,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );

        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        let font_italic = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;

        Ok(Self {
            doc,
            first_page: Some((page, layer)),
            layer: None,
            font,
            font_bold,
            font_italic,
            page_count: 0,
            cursor_y: BODY_TOP_MM,
            placements: Vec::new(),
        })
    }

    /// Pages opened so far
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Every text run drawn so far, in drawing order
    pub fn placements(&self) -> &[TextPlacement] {
        &self.placements
    }

    fn place(&mut self, layer: &PdfLayerReference, kind: PlacementKind, text: &str, x: f32, y: f32) {
        let (font, size, color) = match kind {
            PlacementKind::Header => (&self.font_bold, TITLE_SIZE, COLOR_TITLE),
            PlacementKind::Footer => (&self.font_italic, FOOTER_SIZE, COLOR_FOOTER),
            PlacementKind::Body => (&self.font, BODY_SIZE, COLOR_BODY),
        };
        add_text(layer, font, text, Mm(x), Mm(y), size, color);

        self.placements.push(TextPlacement {
            page: self.page_count,
            kind,
            text: text.to_string(),
            x_mm: x,
            y_mm: y,
        });
    }

    fn draw_header(&mut self, layer: &PdfLayerReference) {
        let x = centered_x(REPORT_TITLE, TITLE_SIZE, 0.55);
        self.place(layer, PlacementKind::Header, REPORT_TITLE, x.0, HEADER_Y_MM);
    }

    fn draw_footer(&mut self, layer: &PdfLayerReference) {
        let text = format!("Page {}", self.page_count);
        let x = centered_x(&text, FOOTER_SIZE, 0.5);
        self.place(layer, PlacementKind::Footer, &text, x.0, FOOTER_Y_MM);
    }
}

impl ReportWriter for PdfReportWriter {
    const EXTENSION: &'static str = "pdf";
    const MIME_TYPE: &'static str = "application/pdf";

    fn open_page(&mut self) -> ReportResult<()> {
        let (page, layer) = match self.first_page.take() {
            Some(indices) => indices,
            None => self.doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1"),
        };
        let layer = self.doc.get_page(page).get_layer(layer);

        self.page_count += 1;
        self.draw_header(&layer);
        self.draw_footer(&layer);

        self.layer = Some(layer);
        self.cursor_y = BODY_TOP_MM;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> ReportResult<()> {
        if self.layer.is_none() || self.cursor_y < BODY_BOTTOM_MM {
            self.open_page()?;
        }
        let Some(layer) = self.layer.clone() else {
            return Err(ReportError::Pdf("No open page".to_string()));
        };

        self.place(&layer, PlacementKind::Body, text, MARGIN_LEFT_MM, self.cursor_y);
        self.cursor_y -= LINE_HEIGHT_MM;
        Ok(())
    }

    fn save(self, path: &Path) -> ReportResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        Ok(())
    }
}
