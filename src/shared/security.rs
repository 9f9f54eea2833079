use crate::shared::error::DiffError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for manifests and templates (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is a regular file and not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected rather than
/// its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "base manifest") for error messages
///
/// # Returns
/// The size of the file in bytes
///
/// # Errors
/// Returns an error if the path is a symbolic link, is not a regular file,
/// or its metadata cannot be read
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| DiffError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(DiffError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Pass the path of the real file instead of a link to it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(DiffError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DiffError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Manifests and templates are expected to be small text files".to_string(),
        }
        .into());
    }
    Ok(())
}
