use super::escape::html_escape;
use super::template::{render_html_template, TemplateData};
use crate::dependency_diff::domain::{Diff, ReportBundle};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Title placed into the `{{title}}` slot of the template
pub const REPORT_TITLE: &str = "package.json Comparison Report";

/// Template bundled into the binary, used when no template path is configured
pub const DEFAULT_TEMPLATE: &str = include_str!("../../../../templates/report.html");

/// Renders one diff as an HTML `<ul>` fragment
///
/// Each entry becomes an `<li>` classed `added`, `removed` or `changed`,
/// with the same text as the terminal listing except that the arrow is
/// written as `&rarr;`. Names and specifiers are escaped.
pub fn diff_to_html_list(diff: &Diff) -> String {
    let mut html = String::from("<ul>");

    for (name, version) in diff.added.iter() {
        html.push_str(&format!(
            "<li class=\"added\">+ {}@{}</li>",
            html_escape(name),
            html_escape(version)
        ));
    }
    for (name, version) in diff.removed.iter() {
        html.push_str(&format!(
            "<li class=\"removed\">- {}@{}</li>",
            html_escape(name),
            html_escape(version)
        ));
    }
    for (name, change) in &diff.changed {
        html.push_str(&format!(
            "<li class=\"changed\">~ {}: {} &rarr; {}</li>",
            html_escape(name),
            html_escape(&change.from),
            html_escape(&change.to)
        ));
    }

    html.push_str("</ul>");
    html
}

/// HtmlFormatter adapter for template-based HTML reports
///
/// This adapter implements the ReportFormatter port for HTML output.
/// It owns the template text; loading it is the caller's job.
pub struct HtmlFormatter {
    template: String,
}

impl HtmlFormatter {
    pub fn new(template: String) -> Self {
        Self { template }
    }

    /// Builds the substitution values, escaping manifest-supplied text
    fn template_data(&self, bundle: &ReportBundle) -> TemplateData {
        let metadata = &bundle.metadata;
        TemplateData {
            title: REPORT_TITLE.to_string(),
            base_name: html_escape(&metadata.base_name),
            base_version: html_escape(&metadata.base_version),
            target_name: html_escape(&metadata.target_name),
            target_version: html_escape(&metadata.target_version),
            dependencies: diff_to_html_list(&bundle.dependencies),
            dev_dependencies: diff_to_html_list(&bundle.dev_dependencies),
        }
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, bundle: &ReportBundle) -> Result<String> {
        Ok(render_html_template(
            &self.template,
            &self.template_data(bundle),
        ))
    }
}
