use super::diff::Diff;

/// Report header information
///
/// Only the JSON and HTML renderers look at this; the terminal listing
/// shows the diffs alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMetadata {
    pub base_path: String,
    pub target_path: String,
    /// RFC 3339 UTC timestamp of report generation
    pub generated: String,
    pub base_name: String,
    pub base_version: String,
    pub target_name: String,
    pub target_version: String,
}

/// Runtime and development diffs for one comparison
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBundle {
    pub dependencies: Diff,
    pub dev_dependencies: Diff,
    pub metadata: ReportMetadata,
}

impl ReportBundle {
    pub fn new(dependencies: Diff, dev_dependencies: Diff, metadata: ReportMetadata) -> Self {
        Self {
            dependencies,
            dev_dependencies,
            metadata,
        }
    }

    pub fn has_differences(&self) -> bool {
        !self.dependencies.is_empty() || !self.dev_dependencies.is_empty()
    }

    /// Sections in report order, paired with their labels
    pub fn sections(&self) -> [(&'static str, &Diff); 2] {
        [
            ("dependencies", &self.dependencies),
            ("devDependencies", &self.dev_dependencies),
        ]
    }
}
