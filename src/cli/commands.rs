//! CLI command definition for the plugin config validation tool
//!
//! A single command: one required positional path (the dynamic plugins
//! configuration) and one optional positional path (the app configuration
//! carrying the branding section). The two documents are loaded and
//! validated independently; a structural failure in one never prevents the
//! other from being checked.

use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use super::output::{print_document_header, OutputFormat, ReportOutput};
use super::ExitCode;
use crate::error::ValidationError;
use crate::report::ValidationReport;
use crate::{validate_branding_file, validate_wiring_file};

/// Validate dynamic plugin wiring and branding configuration
#[derive(Parser, Debug)]
#[command(name = "plugin-config-validate")]
#[command(about = "Validate dynamic plugin wiring and branding configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the dynamic plugins configuration file
    pub plugins_config: Option<PathBuf>,

    /// Path to the app configuration file carrying the branding section
    pub app_config: Option<PathBuf>,

    /// Output format for the validation report
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the report; the exit code still carries the result
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the validation run described by the parsed arguments
pub fn execute(cli: Cli) -> Result<ExitCode, ValidationError> {
    let Some(plugins_path) = cli.plugins_config else {
        eprintln!("Usage: plugin-config-validate <plugins-config.yaml> [<app-config.yaml>]");
        return Ok(ExitCode::Failure);
    };

    let table = cli.format == OutputFormat::Table && !cli.quiet;

    let mut report = ValidationReport::new();

    if table {
        print_document_header("Validating", &plugins_path);
    }
    info!(path = %plugins_path.display(), "validating plugin wiring");
    report.append(validate_wiring_file(&plugins_path));

    if let Some(app_path) = cli.app_config.as_deref() {
        if table {
            print_document_header("Validating branding", app_path);
        }
        info!(path = %app_path.display(), "validating branding");
        report.append(validate_branding_file(app_path));
    }

    if !cli.quiet {
        ReportOutput::from_report(&report).render(cli.format)?;
    }

    Ok(ExitCode::from_report(&report))
}

impl Cli {
    /// Build a quiet table-format invocation for the given paths
    pub fn for_paths(plugins_config: Option<&Path>, app_config: Option<&Path>) -> Self {
        Self {
            plugins_config: plugins_config.map(Path::to_path_buf),
            app_config: app_config.map(Path::to_path_buf),
            format: OutputFormat::Table,
            verbose: 0,
            quiet: true,
        }
    }
}
