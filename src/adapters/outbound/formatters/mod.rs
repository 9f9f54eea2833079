/// Formatter adapters for the supported report representations
pub mod escape;
mod html_formatter;
mod json_formatter;
pub mod template;
mod terminal_formatter;

pub use escape::html_escape;
pub use html_formatter::{diff_to_html_list, HtmlFormatter, DEFAULT_TEMPLATE, REPORT_TITLE};
pub use json_formatter::JsonFormatter;
pub use template::{render_html_template, TemplateData};
pub use terminal_formatter::{LineKind, TerminalFormatter, TerminalLine};
