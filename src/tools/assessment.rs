//! Assessment tools
//!
//! Calculate an assessment, preview its report, and list activity levels.

use serde::Serialize;

use crate::models::{ActivityLevel, Assessment, AssessmentInput};
use crate::report::{self, TextReportWriter};

/// Response for calculate_assessment
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub assessment: Assessment,
    /// Result lines as shown to the user
    pub summary: Vec<String>,
}

/// Response for preview_report
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub title: &'static str,
    pub lines: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ActivityLevelInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub factor: f64,
    pub description: &'static str,
}

/// On-screen echo of the three headline results
pub fn summary_lines(assessment: &Assessment) -> Vec<String> {
    vec![
        format!("BMI: {:.2} ({})", assessment.bmi, assessment.category.display_name()),
        format!("BMR: {:.2} calories/day", assessment.bmr),
        format!("Daily Calorie Needs: {:.2} calories/day", assessment.calories),
    ]
}

/// Validate the input and compute the assessment
pub fn calculate(input: &AssessmentInput) -> Result<CalculateResponse, String> {
    let assessment = Assessment::from_input(input).map_err(|e| e.to_string())?;
    let summary = summary_lines(&assessment);
    Ok(CalculateResponse { assessment, summary })
}

/// Render the report body without writing a file
pub fn preview_report(input: &AssessmentInput) -> Result<PreviewResponse, String> {
    let assessment = Assessment::from_input(input).map_err(|e| e.to_string())?;
    let generated_at = chrono::Local::now().naive_local();

    let mut writer = TextReportWriter::new();
    report::write_assessment(&mut writer, &assessment, &generated_at).map_err(|e| e.to_string())?;

    Ok(PreviewResponse {
        title: report::REPORT_TITLE,
        lines: writer.lines().map(str::to_string).collect(),
    })
}

pub fn activity_levels() -> Vec<ActivityLevelInfo> {
    ActivityLevel::ALL
        .iter()
        .map(|level| ActivityLevelInfo {
            id: level.as_str(),
            label: level.display_name(),
            factor: level.factor(),
            description: level.description(),
        })
        .collect()
}
