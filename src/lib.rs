//! **Snapshot-to-snapshot SBOM diffing.**
//!
//! `sbom-diff` compares two stored SBOM snapshots of the same project and
//! reports which components were added, removed or updated, plus which
//! vulnerabilities were newly introduced. Snapshots are read through a
//! [`SnapshotProvider`], so the engine itself never touches storage.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: snapshot metadata, component records and vulnerability
//!   associations as a provider returns them.
//! - **[`provider`]**: the [`SnapshotProvider`] trait and an in-memory
//!   implementation backed by a JSON store file.
//! - **[`diff`]**: the component matcher, the vulnerability delta calculator
//!   and the [`DiffEngine`] that assembles a [`DiffResult`].
//! - **[`pipeline`]**: the request handler mapping a diff request onto a
//!   status code and JSON body.
//! - **[`reports`]**: JSON and summary renderings of a result.
//! - **[`config`]**: YAML configuration, presets and validation.
//!
//! ## Diffing Two Snapshots
//!
//! ```
//! use sbom_diff::{Component, DiffEngine, SnapshotContents, VulnerabilityAssociation};
//!
//! let base = SnapshotContents::new(vec![Component::new("lodash", "4.17.15")], Vec::new());
//! let target = SnapshotContents::new(
//!     vec![Component::new("lodash", "4.17.21")],
//!     vec![VulnerabilityAssociation::new("lodash", "4.17.21", "CVE-2021-23337", "HIGH")],
//! );
//!
//! let diff = DiffEngine::new().diff(&base, &target);
//! assert_eq!(diff.summary.updated_count, 1);
//! assert_eq!(diff.new_vulnerabilities[0].cve_id, "CVE-2021-23337");
//! ```
//!
//! ## Handling a Request
//!
//! ```no_run
//! use sbom_diff::pipeline::DiffRequestHandler;
//! use sbom_diff::{DiffEngine, InMemoryProvider, SnapshotDiffService};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = InMemoryProvider::from_path("snapshots.json")?;
//!     let handler = DiffRequestHandler::new(SnapshotDiffService::new(provider, DiffEngine::new()));
//!
//!     let response = handler.handle_json(
//!         r#"{"base_sbom_id": "0b6f7a52-3f5e-4f0e-9a43-0d3c9b2f1a01",
//!             "target_sbom_id": "0b6f7a52-3f5e-4f0e-9a43-0d3c9b2f1a02"}"#,
//!     );
//!     println!("{} {}", response.status(), response.body_json(true)?);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, DiffConfig};
pub use config::{BehaviorConfig, FilterConfig, MatchingConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{
    ComponentEntry, DiffEngine, DiffResult, DiffSummary, MatchKey, NewVulnerability,
    SnapshotDiffService, UpdatedComponent,
};
pub use error::{ErrorContext, OptionContext, ProviderErrorKind, Result, SbomDiffError};
pub use model::{
    Component, SbomFormat, SbomSnapshot, SnapshotContents, SnapshotId, VulnerabilityAssociation,
};
pub use pipeline::{DiffRequest, DiffRequestHandler, DiffResponse};
pub use provider::{InMemoryProvider, SnapshotProvider};
pub use reports::{ReportFormat, ReportGenerator};
