//! Plain-text report writer

use std::path::Path;

use super::{ReportResult, ReportWriter, REPORT_TITLE};

/// Collects report pages in memory; saved as plain text
#[derive(Debug, Clone, Default)]
pub struct TextReportWriter {
    pages: Vec<Vec<String>>,
}

impl TextReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[Vec<String>] {
        &self.pages
    }

    /// All body lines across pages
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flatten().map(String::as_str)
    }

    /// Render every page with its header and footer
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, page) in self.pages.iter().enumerate() {
            out.push_str(REPORT_TITLE);
            out.push_str("\n\n");
            for line in page {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(&format!("\nPage {}\n", i + 1));
        }
        out
    }
}

impl ReportWriter for TextReportWriter {
    const EXTENSION: &'static str = "txt";
    const MIME_TYPE: &'static str = "text/plain";

    fn open_page(&mut self) -> ReportResult<()> {
        self.pages.push(Vec::new());
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> ReportResult<()> {
        if self.pages.is_empty() {
            self.open_page()?;
        }
        if let Some(page) = self.pages.last_mut() {
            page.push(text.to_string());
        }
        Ok(())
    }

    fn save(self, path: &Path) -> ReportResult<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}
