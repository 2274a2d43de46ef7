use serde::Deserialize;

use crate::report::pdf::PdfReportRenderer;
use crate::report::{AnalysisReport, ReportError};

/// Turns an [`AnalysisReport`] into a downloadable file.
pub trait ReportRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;
    fn file_name(&self) -> &'static str;
    fn render(&self, report: &AnalysisReport) -> Result<Vec<u8>, ReportError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Text,
}

impl ReportFormat {
    pub fn renderer(self) -> Box<dyn ReportRenderer> {
        match self {
            ReportFormat::Pdf => Box::new(PdfReportRenderer),
            ReportFormat::Text => Box::new(TextReportRenderer),
        }
    }
}

/// The summary lines as a UTF-8 text file.
pub struct TextReportRenderer;

impl ReportRenderer for TextReportRenderer {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn file_name(&self) -> &'static str {
        "match_report.txt"
    }

    fn render(&self, report: &AnalysisReport) -> Result<Vec<u8>, ReportError> {
        let mut body = report.summary.lines().join("\n");
        body.push('\n');
        Ok(body.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::matching::analyze;
    use crate::report::build_report;

    #[test]
    fn test_text_report_contains_best_match() {
        let catalog = builtin_catalog().unwrap();
        let text = "SQL, Excel, Tableau, Power BI, Python, Pandas";
        let outcome = analyze(text, &catalog).unwrap();
        let report = build_report(&outcome, &catalog, text, 3);

        let bytes = TextReportRenderer.render(&report).unwrap();
        let body = String::from_utf8(bytes).unwrap();
        assert!(body.starts_with("Smart Resume Analyzer - Match Report\n"));
        assert!(body.contains("Best Matched Role: Data Analyst (100.0%)\n"));
        assert!(body.contains("AI Engineer: 16.67%\n"));
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let format: ReportFormat = serde_json::from_str(r#""text""#).unwrap();
        assert_eq!(format, ReportFormat::Text);
        assert_eq!(ReportFormat::default(), ReportFormat::Pdf);
    }

    #[test]
    fn test_renderer_metadata() {
        assert_eq!(ReportFormat::Pdf.renderer().file_name(), "match_report.pdf");
        assert_eq!(ReportFormat::Text.renderer().content_type(), "text/plain; charset=utf-8");
    }
}
