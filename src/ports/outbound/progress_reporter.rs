/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user-facing status messages (e.g., to stderr)
/// so they never mix with report content on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
