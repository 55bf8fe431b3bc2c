//! Default configurations and presets for sbom-diff.

use super::types::{AppConfig, BehaviorConfig, FilterConfig, MatchingConfig, OutputConfig};
use crate::diff::MatchKey;
use crate::reports::ReportFormat;

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Name matching, all severities, no failure modes
    Default,
    /// Name + purl type matching for multi-ecosystem projects
    Strict,
    /// Fail on new vulnerabilities
    Security,
    /// Compact JSON output, fail on changes and new vulnerabilities
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Security => "security",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "strict" | "exact" => Some(Self::Strict),
            "security" | "security-focused" => Some(Self::Security),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Security, Self::CiCd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self {
                matching: MatchingConfig {
                    key: MatchKey::NameAndPurlType,
                },
                ..Self::default()
            },
            ConfigPreset::Security => Self {
                behavior: BehaviorConfig {
                    fail_on_vuln: true,
                    ..BehaviorConfig::default()
                },
                ..Self::default()
            },
            ConfigPreset::CiCd => Self {
                output: OutputConfig {
                    format: ReportFormat::Json,
                    no_color: true,
                    pretty: false,
                    ..OutputConfig::default()
                },
                filtering: FilterConfig::default(),
                behavior: BehaviorConfig {
                    fail_on_vuln: true,
                    fail_on_change: true,
                    quiet: true,
                },
                ..Self::default()
            },
        }
    }
}
