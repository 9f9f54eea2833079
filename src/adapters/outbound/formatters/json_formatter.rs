use crate::dependency_diff::domain::{Diff, ReportBundle};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    compared: Compared<'a>,
    generated: &'a str,
    dependencies: &'a Diff,
    #[serde(rename = "devDependencies")]
    dev_dependencies: &'a Diff,
}

#[derive(Debug, Serialize)]
struct Compared<'a> {
    base: &'a str,
    target: &'a str,
}

/// JsonFormatter adapter for machine-readable reports
///
/// This adapter implements the ReportFormatter port for JSON output,
/// pretty-printed with two-space indentation.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, bundle: &ReportBundle) -> Result<String> {
        let report = JsonReport {
            compared: Compared {
                base: &bundle.metadata.base_path,
                target: &bundle.metadata.target_path,
            },
            generated: &bundle.metadata.generated,
            dependencies: &bundle.dependencies,
            dev_dependencies: &bundle.dev_dependencies,
        };

        serde_json::to_string_pretty(&report).map_err(Into::into)
    }
}
