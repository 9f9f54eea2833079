//! Configuration file support for package-diff.
//!
//! Provides YAML-based configuration through `package-diff.config.yml`
//! files, including data structures, file loading, and validation.
//! Command-line flags always take precedence over values loaded here.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::error::DiffError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "package-diff.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub template: Option<String>,
    pub output_dir: Option<String>,
    pub no_color: Option<bool>,
    pub quiet: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format` value, if one is configured
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| {
                OutputFormat::from_str(f)
                    .map_err(|message| anyhow::Error::from(DiffError::InvalidConfig { message }))
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;

    for (field, value) in [("template", &config.template), ("output_dir", &config.output_dir)] {
        if let Some(value) = value {
            if value.trim().is_empty() {
                return Err(DiffError::InvalidConfig {
                    message: format!("{} must not be empty", field),
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: html
template: templates/custom.html
output_dir: reports
no_color: true
quiet: false
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("html"));
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Html));
        assert_eq!(config.template.as_deref(), Some("templates/custom.html"));
        assert_eq!(config.output_dir.as_deref(), Some("reports"));
        assert_eq!(config.no_color, Some(true));
        assert_eq!(config.quiet, Some(false));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(
            config.unwrap().output_format().unwrap(),
            Some(OutputFormat::Json)
        );
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: pdf\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Invalid configuration"));
        assert!(err.contains("pdf"));
    }

    #[test]
    fn test_empty_output_dir_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "output_dir: \"  \"\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("output_dir must not be empty"));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: terminal
colour: always
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("colour"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.template.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.no_color.is_none());
        assert!(config.quiet.is_none());
        assert_eq!(config.output_format().unwrap(), None);
        assert!(config.unknown_fields.is_empty());
    }
}
