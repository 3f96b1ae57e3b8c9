//! Report generation tools
//!
//! Compute an assessment and export it as a PDF report.

use std::path::Path;

use serde::Serialize;

use crate::models::{Assessment, AssessmentInput};
use crate::report;
use crate::tools::assessment::summary_lines;

#[derive(Debug, Serialize)]
pub struct GenerateReportResponse {
    pub success: bool,
    pub file_path: String,
    pub file_name: String,
    pub mime_type: &'static str,
    pub generated_at: String,
    pub summary: Vec<String>,
    pub message: String,
}

/// Generate a PDF report for one submission in `output_dir`
pub fn generate_report(
    input: &AssessmentInput,
    output_dir: &Path,
) -> Result<GenerateReportResponse, String> {
    let assessment = Assessment::from_input(input).map_err(|e| e.to_string())?;
    let file = report::generate_report(&assessment, output_dir).map_err(|e| e.to_string())?;

    Ok(GenerateReportResponse {
        success: true,
        file_path: file.path.display().to_string(),
        message: format!("Report saved as {}", file.file_name),
        file_name: file.file_name,
        mime_type: file.mime_type,
        generated_at: file.generated_at,
        summary: summary_lines(&assessment),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::temp_output_dir;

    fn sample_input() -> AssessmentInput {
        AssessmentInput {
            age: 25,
            gender: "Female".to_string(),
            weight_kg: 60.0,
            height_cm: 165.0,
            activity_level: "Moderately active".to_string(),
        }
    }

    #[test]
    fn test_generate_report() {
        let dir = temp_output_dir("tool_report");
        let response = generate_report(&sample_input(), &dir).unwrap();

        assert!(response.success);
        assert_eq!(response.mime_type, "application/pdf");
        assert!(response.file_name.starts_with("bmi_report_"));
        assert!(response.file_name.ends_with(".pdf"));
        assert!(Path::new(&response.file_path).exists());
        assert_eq!(response.summary[1], "BMR: 1345.25 calories/day");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_generate_report_invalid_input_writes_nothing() {
        let dir = temp_output_dir("tool_report_invalid");
        let mut input = sample_input();
        input.height_cm = 0.0;

        assert!(generate_report(&input, &dir).is_err());
        assert!(!dir.exists());
    }
}
