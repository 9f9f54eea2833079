use crate::dependency_diff::domain::{Diff, ReportBundle};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Semantic tag of a terminal report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Section heading (`=== dependencies ===`)
    Header,
    /// Dependency present only in the target
    Added,
    /// Dependency present only in the base
    Removed,
    /// Dependency whose specifier differs
    Changed,
}

/// One line of the terminal listing, before any coloring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
}

impl TerminalLine {
    fn new(kind: LineKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// TerminalFormatter adapter for the colorized listing
///
/// This adapter implements the ReportFormatter port for terminal output.
/// Added entries are green, removed red and changed yellow; with color
/// disabled the same text is emitted without escape sequences.
pub struct TerminalFormatter {
    colored: bool,
}

impl TerminalFormatter {
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    pub fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    pub fn with_color(colored: bool) -> Self {
        Self { colored }
    }

    /// Builds the tagged lines for one labeled diff
    ///
    /// Order: header, then added entries (target order), removed entries
    /// (base order), changed entries (base order).
    pub fn lines(diff: &Diff, label: &str) -> Vec<TerminalLine> {
        let mut lines = Vec::with_capacity(diff.total_changes() + 1);
        lines.push(TerminalLine::new(
            LineKind::Header,
            format!("=== {} ===", label),
        ));

        for (name, version) in diff.added.iter() {
            lines.push(TerminalLine::new(
                LineKind::Added,
                format!("+ {}@{}", name, version),
            ));
        }
        for (name, version) in diff.removed.iter() {
            lines.push(TerminalLine::new(
                LineKind::Removed,
                format!("- {}@{}", name, version),
            ));
        }
        for (name, change) in &diff.changed {
            lines.push(TerminalLine::new(
                LineKind::Changed,
                format!("~ {}: {} → {}", name, change.from, change.to),
            ));
        }

        lines
    }

    fn paint(&self, line: &TerminalLine) -> String {
        if !self.colored {
            return line.text.clone();
        }
        match line.kind {
            LineKind::Header => line.text.clone(),
            LineKind::Added => line.text.green().to_string(),
            LineKind::Removed => line.text.red().to_string(),
            LineKind::Changed => line.text.yellow().to_string(),
        }
    }
}

impl Default for TerminalFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TerminalFormatter {
    fn format(&self, bundle: &ReportBundle) -> Result<String> {
        let mut output = String::new();

        for (label, diff) in bundle.sections() {
            for line in Self::lines(diff, label) {
                // Each section heading is preceded by a blank line
                if line.kind == LineKind::Header {
                    output.push('\n');
                }
                output.push_str(&self.paint(&line));
                output.push('\n');
            }
        }

        Ok(output)
    }
}
