use crate::dependency_diff::domain::ReportBundle;
use crate::shared::Result;

/// ReportFormatter port for rendering comparison reports
///
/// This port abstracts the rendering logic for the different report
/// representations (terminal listing, JSON, HTML). Implementations return
/// the rendered text and never write it anywhere themselves.
pub trait ReportFormatter {
    /// Renders both dependency sections of a report bundle
    ///
    /// # Arguments
    /// * `bundle` - Runtime and development diffs plus report metadata
    ///
    /// # Returns
    /// Rendered report content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, bundle: &ReportBundle) -> Result<String>;
}
