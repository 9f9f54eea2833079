use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DiffError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing reports to files
///
/// This adapter implements the OutputPresenter port for file output.
/// The parent directory is created when it does not exist yet.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Creates the parent directory chain if needed
    fn ensure_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.exists() {
                tracing::debug!(dir = %parent.display(), "creating output directory");
                fs::create_dir_all(parent).map_err(|e| DiffError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!(
                        "Failed to create output directory {}: {}",
                        parent.display(),
                        e
                    ),
                })?;
            }
        }
        Ok(())
    }

    /// Rejects an existing output path that is a symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(&self.output_path) {
            if metadata.is_symlink() {
                return Err(DiffError::SecurityError {
                    path: self.output_path.clone(),
                    reason: "Output path is a symbolic link".to_string(),
                    hint: "Remove the link or choose another output directory".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.ensure_parent_directory()?;
        self.validate_output_security()?;

        fs::write(&self.output_path, content).map_err(|e| DiffError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
