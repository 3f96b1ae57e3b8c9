//! BMI & Calorie Calculator Library
//!
//! BMI, BMR and calorie calculations with PDF report export.

pub mod build_info;
pub mod calculator;
pub mod config;
pub mod mcp;
pub mod models;
pub mod report;
pub mod tools;
