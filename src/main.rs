mod cli;

use chrono::Utc;
use cli::{Args, Settings};
use package_diff::adapters::outbound::console::StderrProgressReporter;
use package_diff::adapters::outbound::filesystem::FileSystemReader;
use package_diff::adapters::outbound::formatters::DEFAULT_TEMPLATE;
use package_diff::application::dto::{CompareRequest, OutputFormat};
use package_diff::application::factories::{
    FormatterFactory, FormatterType, PresenterFactory, PresenterType,
};
use package_diff::application::use_cases::CompareManifestsUseCase;
use package_diff::config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use package_diff::dependency_diff::services::ReportNaming;
use package_diff::ports::outbound::{ProgressReporter, TemplateReader};
use package_diff::shared::error::{DiffError, ExitCode};
use package_diff::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with status 2 on usage errors
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            // Errors print even when --quiet is set
            StderrProgressReporter::new().report_error(&error_report(&e));
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Error message followed by its cause chain
fn error_report(error: &anyhow::Error) -> String {
    let mut report = format!("\n❌ An error occurred:\n\n{}", error);
    for cause in error.chain().skip(1) {
        report.push_str(&format!("\n\nCaused by: {}", cause));
    }
    report.push('\n');
    report
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<DiffError>() {
        Some(DiffError::InvalidConfig { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let loaded = load_config(args.config.as_deref())?;
    let (config_notice, config) = match loaded {
        Some((notice, config)) => (Some(notice), Some(config)),
        None => (None, None),
    };
    let settings = args.resolve(config)?;
    tracing::debug!(?settings, "settings resolved");

    let progress_reporter = if settings.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    if let Some(notice) = config_notice {
        progress_reporter.report(&notice);
    }

    // Create use case with injected dependencies
    let use_case = CompareManifestsUseCase::new(FileSystemReader::new(), progress_reporter);

    // One timestamp feeds both the report metadata and the file name
    let generated_at = Utc::now();
    let request = CompareRequest::new(settings.base.clone(), settings.target.clone());
    let response = use_case.execute_at(request, generated_at)?;

    let formatter_type = formatter_type(&settings)?;
    let reporter = use_case.progress_reporter();
    reporter.report(FormatterFactory::progress_message(settings.format));

    let formatter = FormatterFactory::create(formatter_type);
    let formatted_output = formatter.format(&response.bundle)?;

    match settings.format.file_extension() {
        None => {
            PresenterFactory::create(PresenterType::Stdout).present(&formatted_output)?;
        }
        Some(extension) => {
            let file_name = ReportNaming::report_file_name(
                &ReportNaming::short_name(response.base_manifest.name.as_deref(), &settings.base),
                &ReportNaming::short_name(
                    response.target_manifest.name.as_deref(),
                    &settings.target,
                ),
                &generated_at,
                extension,
            );
            let output_path = settings.output_dir.join(file_name);

            PresenterFactory::create(PresenterType::File(output_path.clone()))
                .present(&formatted_output)?;

            let label = match settings.format {
                OutputFormat::Html => "HTML",
                _ => "JSON",
            };
            reporter.report_completion(&format!(
                "{} report written to {}",
                label,
                output_path.display()
            ));
        }
    }

    if settings.exit_code && response.bundle.has_differences() {
        Ok(ExitCode::DifferencesFound)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Explicit `--config` must exist; otherwise look in the working directory.
/// Returns the config together with a notice naming where it came from.
fn load_config(explicit: Option<&Path>) -> Result<Option<(String, ConfigFile)>> {
    match explicit {
        Some(path) => {
            let config = load_config_from_path(path)?;
            Ok(Some((
                format!("📋 Loaded config from: {}", path.display()),
                config,
            )))
        }
        None => Ok(discover_config(Path::new("."))?.map(|config| {
            (
                format!("📋 Auto-discovered config file: {}", CONFIG_FILENAME),
                config,
            )
        })),
    }
}

fn formatter_type(settings: &Settings) -> Result<FormatterType> {
    Ok(match settings.format {
        OutputFormat::Terminal => FormatterType::Terminal {
            colored: color_enabled(settings.no_color),
        },
        OutputFormat::Json => FormatterType::Json,
        OutputFormat::Html => FormatterType::Html {
            template: match &settings.template {
                Some(path) => FileSystemReader::new().read_template(path)?,
                None => DEFAULT_TEMPLATE.to_string(),
            },
        },
    })
}

fn color_enabled(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
