use std::path::PathBuf;

/// CompareRequest - Request DTO for the manifest comparison use case
#[derive(Debug, Clone)]
pub struct CompareRequest {
    /// Path to the base manifest (the "before" side)
    pub base_path: PathBuf,
    /// Path to the target manifest (the "after" side)
    pub target_path: PathBuf,
}

impl CompareRequest {
    pub fn new(base_path: PathBuf, target_path: PathBuf) -> Self {
        Self {
            base_path,
            target_path,
        }
    }
}
