//! Status Tool
//!
//! Runtime status of the calculator service and the usage guide for assistants.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Instructions for AI assistants calling the assessment tools
pub const ASSESSMENT_INSTRUCTIONS: &str = r#"
# BMI & Calorie Assessment Instructions

## Inputs

Every assessment tool takes the same five fields:

| Field | Type | Allowed values |
|-------|------|----------------|
| age | integer | 1 to 120 years |
| gender | string | "Male" or "Female" |
| weight_kg | number | at least 1.0 kg |
| height_cm | number | at least 1.0 cm |
| activity_level | string | one of the labels from `activity_levels` |

Metric units only. Convert pounds and inches before calling:
- kg = lb × 0.453592
- cm = in × 2.54

## Fallbacks

- **gender**: only "male" (any case) selects the male BMR formula. Any other
  value, including typos, uses the female formula. Confirm with the user when
  unsure.
- **activity_level**: an unrecognized label uses the sedentary factor (1.2)
  without an error. Call `activity_levels` and pass an exact label or id.

## Workflow

1. `calculate_assessment` to show BMI, BMR and daily calories.
2. `preview_report` to show the report text without creating a file.
3. `generate_report` to write the PDF. Return `file_path` to the user.

## Formulas

- BMI = weight(kg) / height(m)²
- Categories: Underweight < 18.5 ≤ Normal weight < 25 ≤ Overweight < 30 ≤ Obese
- BMR (Mifflin-St Jeor): 10 × kg + 6.25 × cm - 5 × age, then +5 (male) or -161 (female)
- Daily calories = BMR × activity factor
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    /// Package information
    pub name: &'static str,
    pub version: &'static str,
    pub profile: &'static str,

    /// Report output
    pub report_dir: String,
    pub reports_generated: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    report_dir: PathBuf,
    reports_generated: u64,
}

impl StatusTracker {
    pub fn new(report_dir: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            report_dir,
            reports_generated: 0,
        }
    }

    pub fn report_dir(&self) -> &PathBuf {
        &self.report_dir
    }

    /// Count a successfully written report
    pub fn record_report(&mut self) {
        self.reports_generated += 1;
    }

    pub fn get_status(&self) -> ServiceStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            name: build_info.name,
            version: build_info.version,
            profile: build_info.profile,
            report_dir: self.report_dir.display().to_string(),
            reports_generated: self.reports_generated,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_reports() {
        let mut tracker = StatusTracker::new(PathBuf::from("/tmp/reports"));
        assert_eq!(tracker.get_status().reports_generated, 0);

        tracker.record_report();
        tracker.record_report();

        let status = tracker.get_status();
        assert_eq!(status.reports_generated, 2);
        assert_eq!(status.report_dir, "/tmp/reports");
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.name, "bmi-calc");
        assert_eq!(status.version, crate::build_info::VERSION);
    }
}
