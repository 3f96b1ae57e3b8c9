//! BMI & Calorie Calculator
//!
//! An MCP server for BMI, BMR and calorie assessments with PDF reports.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use bmi_calc::build_info;
use bmi_calc::config;
use bmi_calc::mcp::BmiService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays free for MCP
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bmi_calc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let report_dir = config::report_dir();
    eprintln!("Report directory: {}", report_dir.display());
    std::fs::create_dir_all(&report_dir)?;

    let service = BmiService::new(report_dir);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
