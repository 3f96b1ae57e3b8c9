//! MCP server module

mod server;

pub use server::{AssessmentParams, BmiService};
