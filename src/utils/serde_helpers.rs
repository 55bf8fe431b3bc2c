//! Serde helpers shared by wire types.

use serde::{Deserialize, Deserializer};

/// Deserialize a list, treating an explicit `null` like a missing field.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
