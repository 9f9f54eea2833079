use crate::application::dto::{CompareRequest, CompareResponse};
use crate::dependency_diff::domain::{Manifest, ReportBundle, ReportMetadata};
use crate::dependency_diff::services::DiffEngine;
use crate::ports::outbound::{ManifestReader, ProgressReporter};
use crate::shared::error::DiffError;
use crate::shared::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::Path;


/// Name shown for the base manifest when it declares none
const DEFAULT_BASE_NAME: &str = "Base";

/// Name shown for the target manifest when it declares none
const DEFAULT_TARGET_NAME: &str = "Target";

/// CompareManifestsUseCase - Core use case for manifest comparison
///
/// This use case loads both manifests, runs the diff engine over the
/// runtime and development sections, and assembles the report bundle.
/// Rendering and delivery are left to the formatter and presenter.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareManifestsUseCase<MR, PR> {
    manifest_reader: MR,
    progress_reporter: PR,
}

impl<MR, PR> CompareManifestsUseCase<MR, PR>
where
    MR: ManifestReader,
    PR: ProgressReporter,
{
    /// Creates a new CompareManifestsUseCase with injected dependencies
    pub fn new(manifest_reader: MR, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            progress_reporter,
        }
    }

    /// The reporter used for progress output, for callers continuing the run
    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Executes the comparison use case, stamping the report with the current time
    pub fn execute(&self, request: CompareRequest) -> Result<CompareResponse> {
        self.execute_at(request, Utc::now())
    }

    /// Executes the comparison use case with an explicit generation time
    ///
    /// # Arguments
    /// * `request` - Paths of the base and target manifests
    /// * `generated_at` - Timestamp recorded in the report metadata
    ///
    /// # Errors
    /// Returns an error if either manifest cannot be read or parsed
    pub fn execute_at(
        &self,
        request: CompareRequest,
        generated_at: DateTime<Utc>,
    ) -> Result<CompareResponse> {
        // Step 1: Load both manifests
        let base = self.load_manifest(&request.base_path, "base")?;
        let target = self.load_manifest(&request.target_path, "target")?;

        // Step 2: Diff each section
        let (dependencies, dev_dependencies) = DiffEngine::compare_manifests(&base, &target);

        tracing::debug!(
            added = dependencies.added.len(),
            removed = dependencies.removed.len(),
            changed = dependencies.changed.len(),
            "dependencies compared"
        );
        tracing::debug!(
            added = dev_dependencies.added.len(),
            removed = dev_dependencies.removed.len(),
            changed = dev_dependencies.changed.len(),
            "devDependencies compared"
        );

        self.progress_reporter.report(&format!(
            "✅ Compared manifests: {} change(s) in dependencies, {} change(s) in devDependencies",
            dependencies.total_changes(),
            dev_dependencies.total_changes()
        ));

        // Step 3: Assemble report metadata and bundle
        let metadata = ReportMetadata {
            base_path: request.base_path.display().to_string(),
            target_path: request.target_path.display().to_string(),
            generated: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            base_name: base.display_name(DEFAULT_BASE_NAME).to_string(),
            base_version: base.display_version().to_string(),
            target_name: target.display_name(DEFAULT_TARGET_NAME).to_string(),
            target_version: target.display_version().to_string(),
        };

        let bundle = ReportBundle::new(dependencies, dev_dependencies, metadata);
        Ok(CompareResponse::new(bundle, base, target))
    }

    /// Reads and parses one manifest, attaching its path to any failure
    fn load_manifest(&self, path: &Path, role: &str) -> Result<Manifest> {
        self.progress_reporter
            .report(&format!("📖 Loading {} manifest: {}", role, path.display()));

        let content = self.manifest_reader.read_manifest(path)?;

        let manifest = Manifest::from_json(&content).map_err(|e| DiffError::ManifestParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        tracing::debug!(
            path = %path.display(),
            dependencies = manifest.dependencies.len(),
            dev_dependencies = manifest.dev_dependencies.len(),
            "manifest loaded"
        );

        Ok(manifest)
    }
}
