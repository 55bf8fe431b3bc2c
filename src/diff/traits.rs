//! Trait definitions for diff computation strategies.
//!
//! Each computer owns one category of change and works on flattened,
//! already-fetched snapshot records. Computers hold no mutable state, so a
//! single instance can serve concurrent diffs.

use super::{ComponentEntry, UpdatedComponent};

/// Trait for computing a specific type of change between two snapshots.
pub trait ChangeComputer: Send + Sync {
    /// Record type this computer compares.
    type Input;
    /// The type of changes this computer produces.
    type ChangeSet;

    /// Compute changes between the base and target record lists.
    fn compute(&self, base: &[Self::Input], target: &[Self::Input]) -> Self::ChangeSet;

    /// Get the name of this change computer for logging/debugging.
    fn name(&self) -> &str;
}

/// Container for component changes (added, removed, updated).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentChangeSet {
    pub added: Vec<ComponentEntry>,
    pub removed: Vec<ComponentEntry>,
    pub updated: Vec<UpdatedComponent>,
    /// Instances present with the same version on both sides
    pub unchanged: usize,
}

impl ComponentChangeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.updated.len()
    }

    /// Put every list into its canonical order.
    pub fn sort(&mut self) {
        self.added.sort();
        self.removed.sort();
        self.updated.sort();
    }
}
