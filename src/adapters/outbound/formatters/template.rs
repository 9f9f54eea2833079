//! Literal placeholder substitution for HTML report templates.
//!
//! Recognized tokens are `{{title}}`, `{{baseName}}`, `{{baseVersion}}`,
//! `{{targetName}}`, `{{targetVersion}}`, `{{dependencies}}` and
//! `{{devDependencies}}`. There are no conditionals, loops or filters.

/// Values substituted into a report template
///
/// Values are inserted verbatim. Anything that came from a manifest must be
/// escaped by the caller before it is placed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateData {
    pub title: String,
    pub base_name: String,
    pub base_version: String,
    pub target_name: String,
    pub target_version: String,
    /// Pre-rendered `<ul>` fragment for runtime dependencies
    pub dependencies: String,
    /// Pre-rendered `<ul>` fragment for development dependencies
    pub dev_dependencies: String,
}

impl TemplateData {
    fn lookup(&self, field: &str) -> Option<&str> {
        let value = match field {
            "title" => &self.title,
            "baseName" => &self.base_name,
            "baseVersion" => &self.base_version,
            "targetName" => &self.target_name,
            "targetVersion" => &self.target_version,
            "dependencies" => &self.dependencies,
            "devDependencies" => &self.dev_dependencies,
            _ => return None,
        };
        Some(value)
    }
}

/// Replaces every recognized `{{field}}` token in `template`
///
/// The template is scanned once from left to right, so text inserted for
/// one token is never searched for further tokens. Unrecognized tokens are
/// copied through unchanged.
pub fn render_html_template(template: &str, data: &TemplateData) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let replacement = after_open
            .find("}}")
            .and_then(|end| data.lookup(&after_open[..end]).map(|value| (end, value)));

        match replacement {
            Some((end, value)) => {
                output.push_str(value);
                rest = &after_open[end + 2..];
            }
            None => {
                output.push_str("{{");
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> TemplateData {
        TemplateData {
            title: "Report".to_string(),
            base_name: "base-app".to_string(),
            base_version: "1.0.0".to_string(),
            target_name: "target-app".to_string(),
            target_version: "2.0.0".to_string(),
            dependencies: "<ul><li>deps</li></ul>".to_string(),
            dev_dependencies: "<ul><li>dev</li></ul>".to_string(),
        }
    }

    #[test]
    fn test_replaces_every_field() {
        let template = "{{title}}|{{baseName}}|{{baseVersion}}|{{targetName}}|\
                        {{targetVersion}}|{{dependencies}}|{{devDependencies}}";

        let output = render_html_template(template, &sample_data());

        assert_eq!(
            output,
            "Report|base-app|1.0.0|target-app|2.0.0|<ul><li>deps</li></ul>|<ul><li>dev</li></ul>"
        );
    }

    #[test]
    fn test_replaces_all_occurrences() {
        let template = "<title>{{title}}</title><h1>{{title}}</h1>";
        let output = render_html_template(template, &sample_data());
        assert_eq!(output, "<title>Report</title><h1>Report</h1>");
    }

    #[test]
    fn test_unrecognized_placeholders_untouched() {
        let template = "{{unknown}} {{ title }} {{Title}} {{title}}";
        let output = render_html_template(template, &sample_data());
        assert_eq!(output, "{{unknown}} {{ title }} {{Title}} Report");
    }

    #[test]
    fn test_template_without_placeholders_unchanged() {
        let templates = [
            "",
            "<html><body>static</body></html>",
            "{ single } {{ unterminated",
            "}} {{",
        ];
        for template in templates {
            assert_eq!(render_html_template(template, &sample_data()), template);
        }
    }

    #[test]
    fn test_inserted_values_are_not_expanded() {
        let data = TemplateData {
            title: "{{baseName}}".to_string(),
            ..sample_data()
        };
        let output = render_html_template("{{title}} / {{baseName}}", &data);
        assert_eq!(output, "{{baseName}} / base-app");
    }

    #[test]
    fn test_extra_braces_around_token() {
        let output = render_html_template("{{{{title}}}}", &sample_data());
        assert_eq!(output, "{{Report}}");
    }

    #[test]
    fn test_values_inserted_verbatim() {
        let data = TemplateData {
            base_name: "<b>raw</b>".to_string(),
            ..TemplateData::default()
        };
        assert_eq!(render_html_template("{{baseName}}", &data), "<b>raw</b>");
    }

    #[test]
    fn test_multibyte_text_preserved() {
        let output = render_html_template("→ {{title}} ✓", &sample_data());
        assert_eq!(output, "→ Report ✓");
    }
}
