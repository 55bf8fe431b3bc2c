//! Data model consumed by the diff engine.
//!
//! These are already-normalized records: parsing SBOM documents into them is
//! the job of the ingestion side, not of this crate.

mod component;
mod snapshot;
mod vulnerability;

pub use component::{Component, ComponentType};
pub use snapshot::{SbomFormat, SbomSnapshot, SnapshotContents, SnapshotId};
pub use vulnerability::{severity_rank, VulnerabilityAssociation};
