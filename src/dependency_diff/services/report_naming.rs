use chrono::{DateTime, Utc};
use std::path::Path;

/// ReportNaming service for deterministic report file names
///
/// Produces `report_<base>_vs_<target>_<timestamp>.<ext>` where both
/// names are reduced to `[A-Za-z0-9_-]` characters.
pub struct ReportNaming;

impl ReportNaming {
    /// Collapses every run of characters outside `[A-Za-z0-9_-]` into a
    /// single underscore
    pub fn safe_name(name: &str) -> String {
        let mut safe = String::with_capacity(name.len());
        let mut in_run = false;

        for c in name.chars() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                safe.push(c);
                in_run = false;
            } else if !in_run {
                safe.push('_');
                in_run = true;
            }
        }

        safe
    }

    /// Name used for a manifest in the file name: the declared package name,
    /// or the file name without a trailing `.json`
    pub fn short_name(declared: Option<&str>, manifest_path: &Path) -> String {
        let raw = match declared {
            Some(name) => name.to_string(),
            None => {
                let file_name = manifest_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                match file_name.strip_suffix(".json") {
                    Some(stem) => stem.to_string(),
                    None => file_name,
                }
            }
        };
        Self::safe_name(&raw)
    }

    /// Second-precision UTC timestamp safe for file names
    /// (e.g. `2024-03-01T12-30-45`)
    pub fn file_timestamp(time: &DateTime<Utc>) -> String {
        time.format("%Y-%m-%dT%H-%M-%S").to_string()
    }

    /// Builds the report file name for a json or html report
    ///
    /// # Arguments
    /// * `base_short` - Safe base name (see [`ReportNaming::short_name`])
    /// * `target_short` - Safe target name
    /// * `time` - Generation time
    /// * `extension` - File extension without the dot
    pub fn report_file_name(
        base_short: &str,
        target_short: &str,
        time: &DateTime<Utc>,
        extension: &str,
    ) -> String {
        format!(
            "report_{}_vs_{}_{}.{}",
            base_short,
            target_short,
            Self::file_timestamp(time),
            extension
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 45).unwrap()
    }

    #[test]
    fn test_safe_name_keeps_allowed_characters() {
        assert_eq!(ReportNaming::safe_name("my-app_v2"), "my-app_v2");
    }

    #[test]
    fn test_safe_name_collapses_runs() {
        assert_eq!(ReportNaming::safe_name("@scope/pkg name"), "_scope_pkg_name");
        assert_eq!(ReportNaming::safe_name("a...b"), "a_b");
        assert_eq!(ReportNaming::safe_name("a. /b"), "a_b");
    }

    #[test]
    fn test_safe_name_replaces_non_ascii() {
        assert_eq!(ReportNaming::safe_name("café"), "caf_");
    }

    #[test]
    fn test_short_name_prefers_declared_name() {
        let name = ReportNaming::short_name(Some("@org/web"), Path::new("x/package.json"));
        assert_eq!(name, "_org_web");
    }

    #[test]
    fn test_short_name_falls_back_to_file_stem() {
        let name = ReportNaming::short_name(None, Path::new("fixtures/base-package.json"));
        assert_eq!(name, "base-package");
    }

    #[test]
    fn test_short_name_keeps_other_extensions() {
        let name = ReportNaming::short_name(None, Path::new("manifest.txt"));
        assert_eq!(name, "manifest_txt");
    }

    #[test]
    fn test_file_timestamp_format() {
        assert_eq!(
            ReportNaming::file_timestamp(&fixed_time()),
            "2024-03-01T12-30-45"
        );
    }

    #[test]
    fn test_report_file_name() {
        let time = fixed_time();
        assert_eq!(
            ReportNaming::report_file_name("base", "target", &time, "json"),
            "report_base_vs_target_2024-03-01T12-30-45.json"
        );
        assert_eq!(
            ReportNaming::report_file_name("base", "target", &time, "html"),
            "report_base_vs_target_2024-03-01T12-30-45.html"
        );
    }
}
