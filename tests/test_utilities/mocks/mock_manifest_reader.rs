use package_diff::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving manifest contents from memory
#[derive(Default)]
pub struct MockManifestReader {
    pub manifests: HashMap<PathBuf, String>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, path: &str, content: &str) -> Self {
        self.manifests
            .insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        match self.manifests.get(path) {
            Some(content) => Ok(content.clone()),
            None => Err(DiffError::ManifestNotFound {
                path: path.to_path_buf(),
            }
            .into()),
        }
    }
}
