//! Snapshot diff engine for SBOMs.
//!
//! Compares the flattened component lists and vulnerability associations
//! of two stored snapshots of the same project.
//!
//! # Architecture
//!
//! - [`ChangeComputer`](traits::ChangeComputer): one computer per category of change
//! - [`ComponentChangeComputer`](changes::ComponentChangeComputer): added / removed / updated
//! - [`VulnerabilityChangeComputer`](changes::VulnerabilityChangeComputer): newly introduced CVEs
//! - [`DiffResult::assemble`]: summary counts and canonical ordering
//! - [`DiffEngine`]: pure list-in, result-out core
//! - [`SnapshotDiffService`]: engine bound to a [`SnapshotProvider`](crate::provider::SnapshotProvider)
//!
//! # Example
//!
//! ```ignore
//! use sbom_diff::diff::{DiffEngine, SnapshotDiffService};
//!
//! let service = SnapshotDiffService::new(provider, DiffEngine::new());
//! let result = service.diff(base_id, target_id)?;
//! println!("{} updated", result.summary.updated_count);
//! ```

pub mod changes;
mod engine;
mod engine_config;
mod result;
mod service;
pub mod traits;

pub use engine::DiffEngine;
pub use engine_config::MatchKey;
pub use result::{ComponentEntry, DiffResult, DiffSummary, NewVulnerability, UpdatedComponent};
pub use service::SnapshotDiffService;
pub use traits::{ChangeComputer, ComponentChangeSet};
