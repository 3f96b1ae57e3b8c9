//! Runtime configuration
//!
//! Report output location, taken from the environment with a project-relative default.

use std::path::{Path, PathBuf};

/// Environment variable overriding the report directory
pub const REPORT_DIR_ENV: &str = "BMI_REPORT_DIR";

/// Get the report directory from environment or use default
pub fn report_dir() -> PathBuf {
    std::env::var(REPORT_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));
            default_report_dir(&exe_dir)
        })
}

/// `<project root>/reports`, stepping out of `target/{debug,release}` when run from there
fn default_report_dir(exe_dir: &Path) -> PathBuf {
    let mut path = exe_dir.to_path_buf();

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("reports");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_dir_from_target() {
        let dir = default_report_dir(Path::new("/work/bmi-calc/target/release"));
        assert_eq!(dir, PathBuf::from("/work/bmi-calc/reports"));

        let dir = default_report_dir(Path::new("/work/bmi-calc/target/debug"));
        assert_eq!(dir, PathBuf::from("/work/bmi-calc/reports"));
    }

    #[test]
    fn test_default_report_dir_installed() {
        let dir = default_report_dir(Path::new("/usr/local/bin"));
        assert_eq!(dir, PathBuf::from("/usr/local/bin/reports"));
    }
}
