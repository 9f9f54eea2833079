use crate::adapters::outbound::formatters::{HtmlFormatter, JsonFormatter, TerminalFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Formatter selection, carrying whatever each formatter needs to be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterType {
    Terminal { colored: bool },
    Json,
    Html { template: String },
}

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for the different formatter
/// implementations. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use package_diff::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let formatter = FormatterFactory::create(FormatterType::Json);
    /// ```
    pub fn create(formatter_type: FormatterType) -> Box<dyn ReportFormatter> {
        match formatter_type {
            FormatterType::Terminal { colored } => Box::new(TerminalFormatter::with_color(colored)),
            FormatterType::Json => Box::new(JsonFormatter::new()),
            FormatterType::Html { template } => Box::new(HtmlFormatter::new(template)),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use package_diff::application::dto::OutputFormat;
    /// use package_diff::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Terminal => "📝 Generating terminal report...",
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Html => "📝 Generating HTML report...",
        }
    }
}
