//! Flattened component records as returned by a snapshot provider.

use packageurl::PackageUrl;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Component kind, following the `CycloneDX` component type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    #[default]
    Library,
    Application,
    Framework,
    Container,
    OperatingSystem,
    Device,
    Firmware,
    File,
    #[serde(other)]
    Other,
}

/// One dependency entry of a snapshot.
///
/// Storage identity is deliberately absent: two rows are "the same
/// component" when their names match, regardless of which snapshot row
/// they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(rename = "type", default)]
    pub component_type: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Component {
    /// Create a library component with the given name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            component_type: ComponentType::Library,
            purl: None,
            license: None,
        }
    }

    #[must_use]
    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = Some(purl.into());
        self
    }

    #[must_use]
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    #[must_use]
    pub const fn with_type(mut self, component_type: ComponentType) -> Self {
        self.component_type = component_type;
        self
    }

    /// License as reported in diff output (`""` when absent).
    #[must_use]
    pub fn license_or_empty(&self) -> &str {
        self.license.as_deref().unwrap_or("")
    }

    /// Package URL type (`npm`, `maven`, `pypi`, ...), if the purl parses.
    #[must_use]
    pub fn purl_type(&self) -> Option<String> {
        let purl = self.purl.as_deref()?;
        match PackageUrl::from_str(purl) {
            Ok(parsed) => Some(parsed.ty().to_string()),
            Err(e) => {
                tracing::debug!(component = %self.name, purl, "unparseable purl: {e}");
                None
            }
        }
    }
}
