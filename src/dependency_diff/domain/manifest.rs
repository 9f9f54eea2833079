use super::dependency_map::DependencyMap;
use serde::{Deserialize, Deserializer};

/// Parsed package manifest (package.json shape)
///
/// Only the fields the comparison needs are kept; anything else in the
/// document is ignored. A missing or `null` dependency section is an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: DependencyMap,
    #[serde(default, rename = "devDependencies", deserialize_with = "null_as_empty")]
    pub dev_dependencies: DependencyMap,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<DependencyMap, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DependencyMap>::deserialize(deserializer)?.unwrap_or_default())
}

impl Manifest {
    /// Parses manifest JSON text
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Name shown in report headers, falling back to `default` when the
    /// manifest does not declare one
    pub fn display_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(default)
    }

    pub fn display_version(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }
}
