//! Single-column PDF rendering of the report summary with `printpdf`.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::report::render::ReportRenderer;
use crate::report::{AnalysisReport, ReportError};

// A4 portrait
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const ROW_HEIGHT_MM: f32 = 10.0;
/// Baseline offset inside a row, roughly centering 12pt text vertically.
const BASELINE_OFFSET_MM: f32 = 6.5;
const FONT_SIZE_PT: f32 = 12.0;
/// Helvetica's average glyph advance is about half the font size.
const AVG_CHAR_WIDTH_MM: f32 = FONT_SIZE_PT * 0.5 * 0.3528;
const GAP_AFTER_TITLE_MM: f32 = 10.0;
const GAP_AFTER_BEST_MATCH_MM: f32 = 5.0;

pub struct PdfReportRenderer;

impl ReportRenderer for PdfReportRenderer {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn file_name(&self) -> &'static str {
        "match_report.pdf"
    }

    fn render(&self, report: &AnalysisReport) -> Result<Vec<u8>, ReportError> {
        let summary = &report.summary;
        let (doc, page, layer) = PdfDocument::new(
            summary.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Report",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;

        let mut cursor = PageCursor {
            layer: doc.get_page(page).get_layer(layer),
            top_mm: MARGIN_MM,
        };

        let title_width = summary.title.chars().count() as f32 * AVG_CHAR_WIDTH_MM;
        let title_x = ((PAGE_WIDTH_MM - title_width) / 2.0).max(MARGIN_MM);
        cursor.write(&summary.title, title_x, &font);
        cursor.skip(GAP_AFTER_TITLE_MM);
        cursor.write(&summary.best_match_line, MARGIN_MM, &font);
        cursor.skip(GAP_AFTER_BEST_MATCH_MM);
        cursor.write(&summary.scores_heading, MARGIN_MM, &font);

        for line in &summary.score_lines {
            if cursor.top_mm + ROW_HEIGHT_MM > PAGE_HEIGHT_MM - MARGIN_MM {
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Report");
                cursor = PageCursor {
                    layer: doc.get_page(next_page).get_layer(next_layer),
                    top_mm: MARGIN_MM,
                };
            }
            cursor.write(line, MARGIN_MM, &font);
        }

        doc.save_to_bytes()
            .map_err(|e| ReportError::Pdf(e.to_string()))
    }
}

/// Writes rows top-down on one page; PDF coordinates grow upwards from the bottom edge.
struct PageCursor {
    layer: PdfLayerReference,
    top_mm: f32,
}

impl PageCursor {
    fn write(&mut self, text: &str, x_mm: f32, font: &IndirectFontRef) {
        let baseline = PAGE_HEIGHT_MM - self.top_mm - BASELINE_OFFSET_MM;
        self.layer
            .use_text(text, FONT_SIZE_PT, Mm(x_mm), Mm(baseline), font);
        self.top_mm += ROW_HEIGHT_MM;
    }

    fn skip(&mut self, mm: f32) {
        self.top_mm += mm;
    }
}
