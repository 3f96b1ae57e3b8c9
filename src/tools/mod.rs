//! Tools module
//!
//! Request-level operations behind the MCP server and the CLI.

pub mod assessment;
pub mod reports;
pub mod status;
