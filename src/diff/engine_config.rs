//! Configuration types for the diff engine.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identity key used to decide that two components are "the same" library.
///
/// Version is never part of the key: version differences are exactly what the
/// matcher reports as updates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKey {
    /// Exact, case-sensitive component name
    #[default]
    Name,
    /// Name plus package-url type, so `npm/util` and `pypi/util` stay apart
    NameAndPurlType,
}

impl std::fmt::Display for MatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::NameAndPurlType => write!(f, "name-and-purl-type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_key_serde_names() {
        assert_eq!(serde_json::to_string(&MatchKey::Name).unwrap(), "\"name\"");
        let key: MatchKey = serde_json::from_str("\"name-and-purl-type\"").unwrap();
        assert_eq!(key, MatchKey::NameAndPurlType);
        assert_eq!(key.to_string(), "name-and-purl-type");
    }
}
