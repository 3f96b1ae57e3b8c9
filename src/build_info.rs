//! Package and build profile metadata for the banner and status tool

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// "debug" or "release"
    pub profile: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            profile: if cfg!(debug_assertions) { "debug" } else { "release" },
        }
    }

    pub fn banner(&self) -> String {
        format!(
            "BMI & Calorie Calculator v{} ({} build)\n{}",
            self.version, self.profile, DESCRIPTION
        )
    }
}

pub fn print_startup_banner() {
    eprintln!("{}", BuildInfo::current().banner());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_build_info() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "bmi-calc");
        assert_eq!(info.version, VERSION);
        assert!(info.profile == "debug" || info.profile == "release");
    }

    #[test]
    fn test_banner_mentions_version_and_profile() {
        let info = BuildInfo::current();
        let banner = info.banner();
        assert!(banner.starts_with("BMI & Calorie Calculator v"));
        assert!(banner.contains(VERSION));
        assert!(banner.contains(info.profile));
    }
}
