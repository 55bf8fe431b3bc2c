//! Snapshot providers.
//!
//! A provider resolves snapshot ids into the flattened records the diff
//! engine consumes. Production deployments back this with their own
//! storage; the crate ships an in-memory implementation that can also be
//! loaded from a JSON snapshot store file.

mod memory;
mod traits;

pub use memory::{InMemoryProvider, SnapshotStore, StoredSnapshot};
pub use traits::SnapshotProvider;
