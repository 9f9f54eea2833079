//! HTML escaping for report output.
//!
//! Dependency names, specifiers and package names come straight from the
//! manifests, so every one of them passes through [`html_escape`] before it
//! is embedded in an HTML report.

use std::fmt::Display;

/// Escape a value for safe inclusion in HTML content or attributes.
///
/// The value is converted to its string form, then each reserved character
/// is replaced:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#39;`
///
/// # Examples
///
/// ```
/// use package_diff::adapters::outbound::formatters::html_escape;
///
/// assert_eq!(html_escape("<>&\"'"), "&lt;&gt;&amp;&quot;&#39;");
/// assert_eq!(html_escape("left-pad"), "left-pad");
/// assert_eq!(html_escape(42), "42");
/// ```
pub fn html_escape(value: impl Display) -> String {
    let text = value.to_string();
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
