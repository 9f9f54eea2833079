use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, report file)
/// where the rendered report is delivered.
pub trait OutputPresenter {
    /// Presents the rendered report to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The output directory cannot be created
    fn present(&self, content: &str) -> Result<()>;
}
