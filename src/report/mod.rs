//! Report generation
//!
//! Formats an assessment into a paged document through a [`ReportWriter`].
//! The PDF writer is used for downloads; the text writer backs previews.

pub mod pdf;
pub mod text;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::models::Assessment;

pub use pdf::PdfReportWriter;
pub use text::TextReportWriter;

/// Page header printed on every page
pub const REPORT_TITLE: &str = "BMI & Calorie Report";

const FILENAME_PREFIX: &str = "bmi_report";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF error: {0}")]
    Pdf(String),
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Minimal paged-document interface
pub trait ReportWriter {
    /// File extension without the leading dot
    const EXTENSION: &'static str;
    const MIME_TYPE: &'static str;

    /// Start a new page, including its header and footer
    fn open_page(&mut self) -> ReportResult<()>;

    /// Write one body line, breaking onto a new page when the current one is full
    fn write_line(&mut self, text: &str) -> ReportResult<()>;

    fn save(self, path: &Path) -> ReportResult<()>;
}

/// A report written to disk
#[derive(Debug, Clone, Serialize)]
pub struct ReportFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
    pub generated_at: String,
}

/// Body lines of the report, in print order
pub fn report_lines(assessment: &Assessment, generated_at: &NaiveDateTime) -> Vec<String> {
    vec![
        format!("Date: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
        format!("Age: {} years", assessment.age),
        format!("Gender: {}", assessment.gender.display_name()),
        format!("Weight: {:.2} kg", assessment.weight_kg),
        format!("Height: {:.2} cm", assessment.height_cm),
        format!("BMI: {:.2} ({})", assessment.bmi, assessment.category.display_name()),
        format!("BMR: {:.2} calories/day", assessment.bmr),
        format!("Activity Level: {}", assessment.activity_level.display_name()),
        format!("Recommended Daily Calories: {:.2} cal/day", assessment.calories),
    ]
}

/// `bmi_report_<YYYYMMDD>_<HHMMSS>.<ext>`
pub fn report_filename(generated_at: &NaiveDateTime, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        FILENAME_PREFIX,
        generated_at.format("%Y%m%d_%H%M%S"),
        extension
    )
}

/// Write the report body onto a fresh page
pub fn write_assessment<W: ReportWriter>(
    writer: &mut W,
    assessment: &Assessment,
    generated_at: &NaiveDateTime,
) -> ReportResult<()> {
    writer.open_page()?;
    for line in report_lines(assessment, generated_at) {
        writer.write_line(&line)?;
    }
    Ok(())
}

/// Generate a PDF report for the assessment in `output_dir`, stamped with the local time
pub fn generate_report(assessment: &Assessment, output_dir: &Path) -> ReportResult<ReportFile> {
    let generated_at = chrono::Local::now().naive_local();
    let writer = PdfReportWriter::new()?;
    generate_report_with(writer, assessment, output_dir, &generated_at)
}

/// Generate a report with any writer and a fixed timestamp
pub fn generate_report_with<W: ReportWriter>(
    mut writer: W,
    assessment: &Assessment,
    output_dir: &Path,
    generated_at: &NaiveDateTime,
) -> ReportResult<ReportFile> {
    std::fs::create_dir_all(output_dir)?;

    let file_name = report_filename(generated_at, W::EXTENSION);
    let path = output_dir.join(&file_name);

    write_assessment(&mut writer, assessment, generated_at)?;
    writer.save(&path)?;

    tracing::info!(path = %path.display(), "Report generated");

    Ok(ReportFile {
        path,
        file_name,
        mime_type: W::MIME_TYPE,
        generated_at: generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}
