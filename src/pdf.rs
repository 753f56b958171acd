use std::io::BufWriter;

use printpdf::*;

use crate::error::{ExtractoError, Result};

// US Letter dimensions (mm)
const PAGE_W: f32 = 215.9;
const PAGE_H: f32 = 279.4;
const MARGIN_TOP: f32 = 25.4;
const MARGIN_BOTTOM: f32 = 25.4;
const MARGIN_LEFT: f32 = 19.05;
const MARGIN_RIGHT: f32 = 19.05;
const LINE_H: f32 = 5.5;
const FONT_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 16.0;
const WRAP_COLUMNS: usize = 92;

const REPORT_TITLE: &str = "Financial Analysis Report";

struct PdfWriter {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    current_page: PdfPageIndex,
    current_layer: PdfLayerIndex,
    y: f32,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExtractoError::Pdf(format!("{e:?}")))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExtractoError::Pdf(format!("{e:?}")))?;
        Ok(Self {
            doc,
            font,
            font_bold,
            current_page: page,
            current_layer: layer,
            y: MARGIN_TOP,
        })
    }

    fn pdf_y(&self) -> f32 {
        PAGE_H - self.y
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer");
        self.current_page = page;
        self.current_layer = layer;
        self.y = MARGIN_TOP;
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y + needed > PAGE_H - MARGIN_BOTTOM {
            self.new_page();
        }
    }

    fn text(&self, s: &str, size: f32, bold: bool) {
        let font = if bold {
            self.font_bold.clone()
        } else {
            self.font.clone()
        };
        let layer = self
            .doc
            .get_page(self.current_page)
            .get_layer(self.current_layer);
        layer.use_text(s, size, Mm(MARGIN_LEFT), Mm(self.pdf_y()), &font);
    }

    fn hline(&self) {
        let layer = self
            .doc
            .get_page(self.current_page)
            .get_layer(self.current_layer);
        layer.set_outline_thickness(0.5);
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT), Mm(self.pdf_y())), false),
                (Point::new(Mm(PAGE_W - MARGIN_RIGHT), Mm(self.pdf_y())), false),
            ],
            is_closed: false,
        };
        layer.add_line(line);
    }

    fn to_bytes(self) -> Result<Vec<u8>> {
        let mut buf = BufWriter::new(Vec::new());
        self.doc
            .save(&mut buf)
            .map_err(|e| ExtractoError::Pdf(format!("{e:?}")))?;
        Ok(buf
            .into_inner()
            .map_err(|e| ExtractoError::Pdf(e.to_string()))?)
    }
}

/// Renders the advice text as a titled, page-breaking PDF report.
pub fn render_report(advice: &str) -> Result<Vec<u8>> {
    let mut pdf = PdfWriter::new(REPORT_TITLE)?;

    pdf.text(REPORT_TITLE, TITLE_SIZE, true);
    pdf.y += 7.0;
    let ts = chrono::Local::now()
        .format("Generated %Y-%m-%d %H:%M")
        .to_string();
    pdf.text(&ts, 8.0, false);
    pdf.y += 5.0;
    pdf.hline();
    pdf.y += 7.0;

    for paragraph in advice.lines() {
        if paragraph.trim().is_empty() {
            pdf.y += LINE_H;
            continue;
        }
        for line in textwrap::wrap(paragraph, WRAP_COLUMNS) {
            pdf.ensure_space(LINE_H);
            pdf.text(&line, FONT_SIZE, false);
            pdf.y += LINE_H;
        }
    }

    pdf.to_bytes()
}
