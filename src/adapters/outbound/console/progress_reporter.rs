use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing status
/// messages to stderr so they never interleave with a report on stdout.
/// In quiet mode only errors are written.
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Creates a reporter that suppresses everything except errors
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        assert!(!reporter.quiet);
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_progress_reporter_quiet() {
        let reporter = StderrProgressReporter::quiet();
        assert!(reporter.quiet);
        reporter.report("suppressed");
        reporter.report_error("still shown");
    }

    #[test]
    fn test_progress_reporter_default() {
        let reporter = StderrProgressReporter::default();
        assert!(!reporter.quiet);
    }
}
