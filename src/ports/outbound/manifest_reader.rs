use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading manifest contents
///
/// This port abstracts the file system operations needed to load a
/// package.json-style manifest. Parsing stays in the application layer.
pub trait ManifestReader {
    /// Reads the raw manifest text at the given path
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_manifest(&self, manifest_path: &Path) -> Result<String>;
}
