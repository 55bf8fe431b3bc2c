//! Configuration types for sbom-diff operations.

use crate::diff::{DiffEngine, MatchKey};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Component matching configuration
    pub matching: MatchingConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Filtering options
    pub filtering: FilterConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Build a diff engine from the matching and filtering sections.
    #[must_use]
    pub fn to_engine(&self) -> DiffEngine {
        DiffEngine::new()
            .with_match_key(self.matching.key)
            .with_min_severity(self.filtering.min_severity.clone())
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the component identity key.
    pub const fn match_key(mut self, key: MatchKey) -> Self {
        self.config.matching.key = key;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Emit compact instead of pretty-printed JSON.
    pub const fn compact(mut self, compact: bool) -> Self {
        self.config.output.pretty = !compact;
        self
    }

    /// Set the minimum severity for reported vulnerabilities.
    pub fn min_severity(mut self, severity: Option<String>) -> Self {
        self.config.filtering.min_severity = severity;
        self
    }

    /// Enable fail-on-vulnerability mode.
    pub const fn fail_on_vuln(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_vuln = fail;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command Configuration Types
// ============================================================================

/// Configuration for the diff command
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Snapshot store and ids to compare
    pub request: DiffTarget,
    /// Everything that may also come from a config file
    pub app: AppConfig,
}

/// Where the snapshots come from and which ones to compare
#[derive(Debug, Clone)]
pub struct DiffTarget {
    /// JSON snapshot store
    pub store: PathBuf,
    /// Base snapshot id (unvalidated)
    pub base_id: String,
    /// Target snapshot id (unvalidated)
    pub target_id: String,
    /// Restrict to snapshots of this project
    pub project: Option<String>,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Component matching configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Identity key: `name` or `name-and-purl-type`
    pub key: MatchKey,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
            pretty: true,
        }
    }
}

/// Filtering options for diff results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum severity of reported new vulnerabilities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<String>,
}

/// Behavior flags for diff operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 2 if new vulnerabilities are introduced
    pub fail_on_vuln: bool,
    /// Exit with code 1 if any component changes are detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .match_key(MatchKey::NameAndPurlType)
            .min_severity(Some("high".to_string()))
            .fail_on_vuln(true)
            .compact(true)
            .build();

        assert_eq!(config.matching.key, MatchKey::NameAndPurlType);
        assert!(config.behavior.fail_on_vuln);
        assert!(!config.output.pretty);

        let engine = config.to_engine();
        assert_eq!(engine.match_key(), MatchKey::NameAndPurlType);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("behavior:\n  fail_on_vuln: true\n").unwrap();
        assert!(config.behavior.fail_on_vuln);
        assert_eq!(config.matching.key, MatchKey::Name);
        assert!(config.output.pretty);
        assert_eq!(config.output.format, ReportFormat::Auto);
    }
}
