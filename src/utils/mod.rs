//! Shared utilities.

mod hash;
mod serde_helpers;

pub use hash::content_hash;
pub use serde_helpers::null_as_empty;
