//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary on a terminal, JSON otherwise
    #[default]
    Auto,
    /// The JSON response body
    Json,
    /// Brief human-readable summary
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Snapshot ids shown alongside a report.
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    pub base_id: Option<String>,
    pub target_id: Option<String>,
}

impl ReportContext {
    pub fn new(base_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            base_id: Some(base_id.into()),
            target_id: Some(target_id.into()),
        }
    }
}
