//! MCP Server Implementation
//!
//! Exposes the assessment and report tools over MCP.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{ActivityLevel, AssessmentInput};
use crate::tools::assessment;
use crate::tools::reports;
use crate::tools::status::StatusTracker;

/// BMI calculator MCP service
#[derive(Clone)]
pub struct BmiService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<BmiService>,
}

impl BmiService {
    pub fn new(report_dir: PathBuf) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(report_dir))),
            tool_router: Self::tool_router(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AssessmentParams {
    /// Age in years (1-120)
    pub age: u32,
    /// "Male" or "Female". Any value other than "male" uses the female BMR formula.
    pub gender: String,
    /// Weight in kilograms (at least 1.0)
    pub weight_kg: f64,
    /// Height in centimeters (at least 1.0)
    pub height_cm: f64,
    /// Activity level label ("Moderately active") or id ("moderately_active"), default "Sedentary"
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
}

fn default_activity_level() -> String { "Sedentary".to_string() }

impl From<AssessmentParams> for AssessmentInput {
    fn from(p: AssessmentParams) -> Self {
        // JSON clients may send the snake_case id; the calculator only knows display labels
        let activity_level = match ActivityLevel::from_id(&p.activity_level) {
            Some(level) => level.display_name().to_string(),
            None => p.activity_level,
        };

        Self {
            age: p.age,
            gender: p.gender,
            weight_kg: p.weight_kg,
            height_cm: p.height_cm,
            activity_level,
        }
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl BmiService {
    // --- Status ---

    #[tool(description = "Get the current status of the BMI calculator service including build info, report directory, and process information")]
    async fn bmi_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for collecting inputs and running assessments. Call this before the first assessment in a session.")]
    fn assessment_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::ASSESSMENT_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(ASSESSMENT_INSTRUCTIONS)]))
    }

    #[tool(description = "List the five activity levels with their BMR multipliers")]
    fn activity_levels(&self) -> Result<CallToolResult, McpError> {
        json_result(&assessment::activity_levels())
    }

    // --- Assessments ---

    #[tool(description = "Calculate BMI, BMI category, BMR (Mifflin-St Jeor) and recommended daily calories")]
    fn calculate_assessment(&self, Parameters(p): Parameters<AssessmentParams>) -> Result<CallToolResult, McpError> {
        let result = assessment::calculate(&p.into())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Show the report text for an assessment without creating a file")]
    fn preview_report(&self, Parameters(p): Parameters<AssessmentParams>) -> Result<CallToolResult, McpError> {
        let result = assessment::preview_report(&p.into())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Calculate an assessment and save it as a PDF report (bmi_report_YYYYMMDD_HHMMSS.pdf). Returns the file path for download.")]
    async fn generate_report(&self, Parameters(p): Parameters<AssessmentParams>) -> Result<CallToolResult, McpError> {
        let input: AssessmentInput = p.into();
        input.validate().map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let report_dir = self.status_tracker.lock().await.report_dir().clone();
        let result = reports::generate_report(&input, &report_dir)
            .map_err(|e| McpError::internal_error(e, None))?;
        self.status_tracker.lock().await.record_report();
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for BmiService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bmi-calc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("BMI & Calorie Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "BMI & Calorie Calculator - BMI, BMR and daily calorie needs from metric inputs. \
                 Call assessment_instructions first. \
                 Inputs: age, gender, weight_kg, height_cm, activity_level (see activity_levels). \
                 Tools: calculate_assessment, preview_report, generate_report (PDF), bmi_status."
                    .into(),
            ),
        }
    }
}
