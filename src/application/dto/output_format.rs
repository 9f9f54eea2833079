/// Output format enumeration for comparison reports
///
/// This enum represents the supported report representations. It belongs in
/// the application layer as both the CLI (inbound adapter) and the formatters
/// (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colorized listing on stdout (default)
    #[default]
    Terminal,
    /// JSON document written to the output directory
    Json,
    /// HTML document rendered from a template, written to the output directory
    Html,
}

impl OutputFormat {
    /// Extension used for report files, or `None` for terminal output
    pub fn file_extension(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Terminal => None,
            OutputFormat::Json => Some("json"),
            OutputFormat::Html => Some("html"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!(
                "Unknown format: {}. Please specify 'terminal', 'json' or 'html'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}
