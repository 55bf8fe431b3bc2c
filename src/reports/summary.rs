//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportContext, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn severity_color(severity: &str) -> &'static str {
        match crate::model::severity_rank(severity) {
            4 | 3 => "red",
            2 => "yellow",
            _ => "dim",
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        context: &ReportContext,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = &result.summary;

        lines.push(self.color("SBOM Diff Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if let (Some(base), Some(target)) = (&context.base_id, &context.target_id) {
            lines.push(format!("{}  {base} → {target}", self.color("Snapshots:", "cyan")));
        }

        lines.push(format!(
            "{}  {} added, {} removed, {} updated",
            self.color("Components:", "cyan"),
            self.color(&format!("+{}", summary.added_count), "green"),
            self.color(&format!("-{}", summary.removed_count), "red"),
            self.color(&format!("~{}", summary.updated_count), "yellow"),
        ));
        lines.push(format!(
            "{}  {} new",
            self.color("Vulnerabilities:", "cyan"),
            summary.new_vulnerabilities_count
        ));

        if !result.added.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Added:", "bold"));
            for entry in &result.added {
                lines.push(format!("  {} {} {}", self.color("+", "green"), entry.name, entry.version));
            }
        }

        if !result.removed.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Removed:", "bold"));
            for entry in &result.removed {
                lines.push(format!("  {} {} {}", self.color("-", "red"), entry.name, entry.version));
            }
        }

        if !result.updated.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Updated:", "bold"));
            for entry in &result.updated {
                lines.push(format!(
                    "  {} {} {} → {}",
                    self.color("~", "yellow"),
                    entry.name,
                    entry.old_version,
                    entry.new_version
                ));
            }
        }

        if !result.new_vulnerabilities.is_empty() {
            lines.push(String::new());
            lines.push(self.color("New vulnerabilities:", "bold"));
            for vuln in &result.new_vulnerabilities {
                lines.push(format!(
                    "  [{}] {} in {} {}",
                    self.color(&vuln.severity, Self::severity_color(&vuln.severity)),
                    vuln.cve_id,
                    vuln.component,
                    vuln.version
                ));
            }
        }

        if !result.has_changes() {
            lines.push(String::new());
            lines.push(self.color("No changes detected", "green"));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
