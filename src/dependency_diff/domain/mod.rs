pub mod dependency_map;
pub mod diff;
pub mod manifest;
pub mod report_bundle;

pub use dependency_map::DependencyMap;
pub use diff::{Diff, VersionChange};
pub use manifest::Manifest;
pub use report_bundle::{ReportBundle, ReportMetadata};
