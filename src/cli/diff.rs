//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two stored snapshots.

use crate::config::{AppConfig, DiffConfig, Validatable};
use crate::diff::{DiffResult, SnapshotDiffService};
use crate::pipeline::{
    auto_detect_format, exit_codes, should_use_color, write_output, DiffRequest,
    DiffRequestHandler, DiffResponse, OutputTarget,
};
use crate::provider::InMemoryProvider;
use crate::reports::{create_reporter, ReportContext, ReportFormat};
use anyhow::{Context, Result};

/// Run the diff command, returning the desired exit code.
///
/// Request errors are reported like the HTTP handler would report them and
/// map to [`exit_codes::ERROR`]. The caller is responsible for calling
/// `std::process::exit()` with the returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let errors = config.validate();
    if let Some(first) = errors.first() {
        anyhow::bail!("invalid configuration: {first}");
    }

    let app = &config.app;
    let quiet = app.behavior.quiet;
    let target = &config.request;

    let provider = InMemoryProvider::from_path(&target.store)
        .with_context(|| format!("failed to load snapshot store {}", target.store.display()))?;
    if !quiet {
        tracing::info!(
            "Loaded {} snapshots from {}",
            provider.len(),
            target.store.display()
        );
    }

    let handler = DiffRequestHandler::new(SnapshotDiffService::new(provider, app.to_engine()))
        .with_project_scope(target.project.clone());
    let response = handler.handle(&DiffRequest::new(&target.base_id, &target.target_id));

    let output_target = OutputTarget::from_option(app.output.file.clone());
    let format = auto_detect_format(app.output.format, &output_target);

    let result = match response {
        DiffResponse::Ok(result) => result,
        error @ DiffResponse::Error { .. } => {
            report_error(&error, format, &output_target, app)?;
            return Ok(exit_codes::ERROR);
        }
    };

    if !quiet {
        tracing::info!(
            added = result.summary.added_count,
            removed = result.summary.removed_count,
            updated = result.summary.updated_count,
            new_vulnerabilities = result.summary.new_vulnerabilities_count,
            "diff computed"
        );
    }

    let colored = should_use_color(app.output.no_color);
    let reporter = create_reporter(format, colored, app.output.pretty)?;
    let context = ReportContext::new(&target.base_id, &target.target_id);
    let report = reporter.generate_diff_report(&result, &context)?;
    write_output(&report, &output_target, quiet)?;

    Ok(determine_exit_code(app, &result))
}

/// JSON consumers get the error body on the output target; everyone else
/// gets a log line.
fn report_error(
    response: &DiffResponse,
    format: ReportFormat,
    target: &OutputTarget,
    app: &AppConfig,
) -> Result<()> {
    if let DiffResponse::Error { status, body } = response {
        if format == ReportFormat::Json {
            let json = response
                .body_json(app.output.pretty)
                .context("failed to serialize error body")?;
            write_output(&json, target, app.behavior.quiet)?;
        }
        tracing::error!(status = *status, "{}", body.error);
    }
    Ok(())
}

/// Determine the appropriate exit code based on diff results and config flags.
const fn determine_exit_code(config: &AppConfig, result: &DiffResult) -> i32 {
    if config.behavior.fail_on_vuln && result.summary.new_vulnerabilities_count > 0 {
        return exit_codes::VULNS_INTRODUCED;
    }
    if config.behavior.fail_on_change && result.summary.component_changes() > 0 {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffTarget;
    use crate::diff::{ComponentEntry, NewVulnerability};
    use crate::model::{Component, SbomFormat, SbomSnapshot, SnapshotContents, SnapshotId};
    use tempfile::TempDir;

    fn result_with(added: usize, vulns: usize) -> DiffResult {
        let mut result = DiffResult::new();
        result.added = (0..added)
            .map(|i| ComponentEntry::new(format!("pkg-{i}"), "1.0.0", ""))
            .collect();
        result.new_vulnerabilities = (0..vulns)
            .map(|i| NewVulnerability::new(format!("CVE-2024-{i:04}"), "pkg-0", "1.0.0", "HIGH"))
            .collect();
        result.calculate_summary();
        result
    }

    #[test]
    fn test_exit_codes() {
        let mut config = AppConfig::default();
        assert_eq!(determine_exit_code(&config, &result_with(1, 1)), exit_codes::SUCCESS);

        config.behavior.fail_on_change = true;
        assert_eq!(determine_exit_code(&config, &result_with(0, 0)), exit_codes::SUCCESS);
        assert_eq!(
            determine_exit_code(&config, &result_with(1, 0)),
            exit_codes::CHANGES_DETECTED
        );

        config.behavior.fail_on_vuln = true;
        assert_eq!(
            determine_exit_code(&config, &result_with(1, 1)),
            exit_codes::VULNS_INTRODUCED
        );
    }

    fn write_store(dir: &TempDir) -> (std::path::PathBuf, SnapshotId, SnapshotId) {
        let base = SnapshotId::new_v4();
        let target = SnapshotId::new_v4();
        let mut provider = InMemoryProvider::new();
        provider.insert(
            SbomSnapshot::new(base, "web", SbomFormat::CycloneDx),
            SnapshotContents::new(vec![Component::new("react", "17.0.2")], Vec::new()),
        );
        provider.insert(
            SbomSnapshot::new(target, "web", SbomFormat::CycloneDx),
            SnapshotContents::new(vec![Component::new("react", "18.2.0")], Vec::new()),
        );
        let path = dir.path().join("store.json");
        std::fs::write(&path, serde_json::to_string(&provider.to_store()).unwrap()).unwrap();
        (path, base, target)
    }

    fn diff_config(
        store: std::path::PathBuf,
        base: String,
        target: String,
        out: &std::path::Path,
    ) -> DiffConfig {
        DiffConfig {
            request: DiffTarget {
                store,
                base_id: base,
                target_id: target,
                project: None,
            },
            app: AppConfig::builder()
                .output_format(ReportFormat::Json)
                .output_file(Some(out.to_path_buf()))
                .fail_on_change(true)
                .quiet(true)
                .build(),
        }
    }

    #[test]
    fn test_run_diff_writes_json() {
        let dir = TempDir::new().unwrap();
        let (store, base, target) = write_store(&dir);
        let out = dir.path().join("diff.json");

        let config = diff_config(store, base.to_string(), target.to_string(), &out);
        let code = run_diff(config).unwrap();
        assert_eq!(code, exit_codes::CHANGES_DETECTED);

        let written: DiffResult =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written.summary.updated_count, 1);
        assert_eq!(written.updated[0].new_version, "18.2.0");
    }

    #[test]
    fn test_run_diff_request_error() {
        let dir = TempDir::new().unwrap();
        let (store, base, _) = write_store(&dir);
        let out = dir.path().join("diff.json");

        let code = run_diff(diff_config(store, base.to_string(), "bogus".into(), &out)).unwrap();
        assert_eq!(code, exit_codes::ERROR);

        let body = std::fs::read_to_string(&out).unwrap();
        assert!(body.contains("target_sbom_id must be a valid UUID"), "{body}");
    }

    #[test]
    fn test_run_diff_missing_store() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("diff.json");
        let store = dir.path().join("missing.json");
        let config = diff_config(store, String::new(), String::new(), &out);
        assert!(run_diff(config).is_err());
    }
}
