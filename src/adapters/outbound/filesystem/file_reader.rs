use crate::ports::outbound::{ManifestReader, TemplateReader};
use crate::shared::error::DiffError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both ManifestReader and TemplateReader ports,
/// providing file system access for manifests and HTML templates.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let file_size = validate_regular_file(path, file_type)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        tracing::debug!(path = %path.display(), bytes = file_size, "reading {}", file_type);

        fs::read_to_string(path).map_err(|e| {
            DiffError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<String> {
        if !manifest_path.exists() {
            return Err(DiffError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
            }
            .into());
        }

        self.safe_read_file(manifest_path, "manifest")
    }
}

impl TemplateReader for FileSystemReader {
    fn read_template(&self, template_path: &Path) -> Result<String> {
        if !template_path.exists() {
            return Err(DiffError::TemplateNotFound {
                path: template_path.to_path_buf(),
            }
            .into());
        }

        self.safe_read_file(template_path, "HTML template")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_manifest_success() {
        let temp_dir = TempDir::new().unwrap();
        let manifest_path = temp_dir.path().join("package.json");
        fs::write(&manifest_path, r#"{"name": "app"}"#).unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_manifest(&manifest_path).unwrap();

        assert_eq!(content, r#"{"name": "app"}"#);
    }

    #[test]
    fn test_read_manifest_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let manifest_path = temp_dir.path().join("missing.json");

        let reader = FileSystemReader::new();
        let result = reader.read_manifest(&manifest_path);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Manifest file not found"));
        assert!(err_string.contains("missing.json"));
    }

    #[test]
    fn test_read_manifest_directory() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_manifest(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a regular file"));
    }

    #[test]
    fn test_read_template_success() {
        let temp_dir = TempDir::new().unwrap();
        let template_path = temp_dir.path().join("report.html");
        fs::write(&template_path, "<h1>{{title}}</h1>").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_template(&template_path).unwrap();

        assert_eq!(content, "<h1>{{title}}</h1>");
    }

    #[test]
    fn test_read_template_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let template_path = temp_dir.path().join("nope.html");

        let reader = FileSystemReader::new();
        let err = reader.read_template(&template_path).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DiffError>(),
            Some(DiffError::TemplateNotFound { .. })
        ));
        assert!(err.to_string().contains("nope.html"));
    }
}
