use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a clean comparison from
/// one that found differences, and both from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report produced (and no differences when `--exit-code` is set)
    Success = 0,
    /// Differences were found and `--exit-code` was requested
    DifferencesFound = 1,
    /// Invalid command-line arguments (clap parsing errors, unknown format)
    InvalidArguments = 2,
    /// Application error (unreadable manifest, missing template, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DifferencesFound => write!(f, "Differences Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for manifest comparison.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Manifest file not found: {path}\n\n💡 Hint: Check the path to the package.json file")]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to parse manifest: {path}\nDetails: {details}\n\n💡 Hint: The manifest must be a JSON object whose dependency sections map names to version strings")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("HTML template file not found: {path}\n\n💡 Hint: Pass an existing file with --template, or omit it to use the bundled template")]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the output directory")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
