use super::dependency_map::DependencyMap;
use indexmap::IndexMap;
use serde::Serialize;

/// A specifier that differs between base and target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionChange {
    pub from: String,
    pub to: String,
}

impl VersionChange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Result of comparing a base dependency set against a target one
///
/// The three maps never share a key. `removed` and `changed` follow the
/// base map's order, `added` follows the target map's order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diff {
    pub added: DependencyMap,
    pub removed: DependencyMap,
    pub changed: IndexMap<String, VersionChange>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Number of entries across all three categories
    pub fn total_changes(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}
