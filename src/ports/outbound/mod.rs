/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod template_reader;

pub use formatter::ReportFormatter;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use template_reader::TemplateReader;
