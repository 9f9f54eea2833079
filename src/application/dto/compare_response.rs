use crate::dependency_diff::domain::{Manifest, ReportBundle};

/// CompareResponse - Response DTO from the manifest comparison use case
///
/// Besides the report bundle it hands back both parsed manifests, since
/// output naming needs the declared package names.
#[derive(Debug, Clone)]
pub struct CompareResponse {
    pub bundle: ReportBundle,
    pub base_manifest: Manifest,
    pub target_manifest: Manifest,
}

impl CompareResponse {
    pub fn new(bundle: ReportBundle, base_manifest: Manifest, target_manifest: Manifest) -> Self {
        Self {
            bundle,
            base_manifest,
            target_manifest,
        }
    }
}
