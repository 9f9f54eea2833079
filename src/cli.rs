use clap::Parser;
use package_diff::application::dto::OutputFormat;
use package_diff::config::ConfigFile;
use package_diff::shared::Result;
use std::path::PathBuf;

/// Directory receiving JSON and HTML reports when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Compare dependencies and devDependencies between two package.json files
#[derive(Parser, Debug)]
#[command(name = "package-diff")]
#[command(version)]
#[command(about = "Compare dependencies and devDependencies between two package.json files", long_about = None)]
pub struct Args {
    /// Path to the base manifest
    pub base: PathBuf,

    /// Path to the target manifest
    pub target: PathBuf,

    /// Output format: terminal, json or html [default: terminal]
    pub format: Option<OutputFormat>,

    /// HTML template file (defaults to the bundled template)
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Directory for JSON and HTML reports (defaults to ./output)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a config file (defaults to ./package-diff.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    pub no_color: bool,

    /// Exit with status 1 when any differences are found
    #[arg(long)]
    pub exit_code: bool,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective options after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base: PathBuf,
    pub target: PathBuf,
    pub format: OutputFormat,
    /// `None` selects the bundled template
    pub template: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub no_color: bool,
    pub quiet: bool,
    pub exit_code: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges the arguments with an optional config file
    ///
    /// CLI values win over config values, which win over built-in defaults.
    pub fn resolve(self, config: Option<ConfigFile>) -> Result<Settings> {
        let config = config.unwrap_or_default();

        let format = match self.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };

        let template = self.template.or_else(|| config.template.map(PathBuf::from));

        let output_dir = self
            .output_dir
            .or_else(|| config.output_dir.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(Settings {
            base: self.base,
            target: self.target,
            format,
            template,
            output_dir,
            no_color: self.no_color || config.no_color.unwrap_or(false),
            quiet: self.quiet || config.quiet.unwrap_or(false),
            exit_code: self.exit_code,
        })
    }
}
