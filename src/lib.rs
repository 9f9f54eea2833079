//! package-diff - dependency comparison tool for package.json manifests
//!
//! This library compares the `dependencies` and `devDependencies` sections
//! of two package.json files and renders the differences as a colored
//! terminal listing, a JSON document, or an HTML page built from a template.
//! It follows a hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_diff`): Dependency maps, diffs and the diff engine
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, console and report formatter implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use package_diff::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case
//! let use_case = CompareManifestsUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = CompareRequest::new(
//!     PathBuf::from("old/package.json"),
//!     PathBuf::from("new/package.json"),
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = JsonFormatter::new();
//! let output = formatter.format(&response.bundle)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_diff;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        diff_to_html_list, html_escape, render_html_template, HtmlFormatter, JsonFormatter,
        TemplateData, TerminalFormatter, DEFAULT_TEMPLATE,
    };
    pub use crate::application::dto::{CompareRequest, CompareResponse, OutputFormat};
    pub use crate::application::factories::{
        FormatterFactory, FormatterType, PresenterFactory, PresenterType,
    };
    pub use crate::application::use_cases::CompareManifestsUseCase;
    pub use crate::dependency_diff::domain::{
        DependencyMap, Diff, Manifest, ReportBundle, ReportMetadata, VersionChange,
    };
    pub use crate::dependency_diff::services::{compare_deps, DiffEngine, ReportNaming};
    pub use crate::ports::outbound::{
        ManifestReader, OutputPresenter, ProgressReporter, ReportFormatter, TemplateReader,
    };
    pub use crate::shared::error::{DiffError, ExitCode};
    pub use crate::shared::Result;
}
