//! Report rendering for the plugin config validation CLI
//!
//! Renders the aggregated report in a human-readable table format with
//! severity-based coloring, or as JSON/YAML for machine processing.

use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::report::ValidationReport;
use crate::validation::Diagnostic;

/// Output format options for the validation report
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable report with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format for machine processing
    Yaml,
}

/// Serializable view of the aggregated report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    /// Overall status: zero errors
    pub passed: bool,
    /// Number of errors found
    pub error_count: usize,
    /// Number of warnings found
    pub warning_count: usize,
    /// Summary message
    pub summary: String,
    /// All diagnostics, in report order
    pub diagnostics: Vec<DiagnosticOutput>,
}

/// Individual diagnostic output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticOutput {
    pub severity: String,
    pub code: String,
    pub message: String,
    pub location: String,
}

impl DiagnosticOutput {
    fn from_diagnostic(diagnostic: &Diagnostic) -> Self {
        Self {
            severity: diagnostic.severity.to_string(),
            code: diagnostic.code.clone(),
            message: diagnostic.message.clone(),
            location: diagnostic.location.clone(),
        }
    }
}

impl ReportOutput {
    /// Create output from an aggregated report
    pub fn from_report(report: &ValidationReport) -> Self {
        Self {
            passed: report.passed(),
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            summary: report.summary(),
            diagnostics: report
                .diagnostics
                .iter()
                .map(DiagnosticOutput::from_diagnostic)
                .collect(),
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<(), ValidationError> {
        match format {
            OutputFormat::Json => self.render_json(),
            OutputFormat::Yaml => self.render_yaml(),
            OutputFormat::Table => self.render_table(),
        }
    }

    fn render_json(&self) -> Result<(), ValidationError> {
        let json = serde_json::to_string_pretty(self)?;
        println!("{}", json);
        Ok(())
    }

    fn render_yaml(&self) -> Result<(), ValidationError> {
        let yaml = serde_yaml::to_string(self)?;
        println!("{}", yaml);
        Ok(())
    }

    /// Render the human-readable report: a distinct ERRORS section, a
    /// WARNINGS section, or an explicit confirmation for a clean run.
    fn render_table(&self) -> Result<(), ValidationError> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();

        if self.error_count > 0 {
            writeln!(stdout).ok();
            writeln!(
                stdout,
                "{}",
                format!("ERRORS ({}):", self.error_count).red().bold()
            )
            .ok();
            for diagnostic in self.diagnostics.iter().filter(|d| d.severity == "error") {
                writeln!(
                    stdout,
                    "  {} {}: {}",
                    "[x]".red(),
                    diagnostic.location.cyan(),
                    diagnostic.message
                )
                .ok();
            }
        }

        if self.warning_count > 0 {
            writeln!(stdout).ok();
            writeln!(
                stdout,
                "{}",
                format!("WARNINGS ({}):", self.warning_count).yellow().bold()
            )
            .ok();
            for diagnostic in self.diagnostics.iter().filter(|d| d.severity == "warning") {
                writeln!(
                    stdout,
                    "  {} {}: {}",
                    "[!]".yellow(),
                    diagnostic.location.cyan(),
                    diagnostic.message
                )
                .ok();
            }
        }

        if self.error_count == 0 && self.warning_count == 0 {
            writeln!(stdout).ok();
            writeln!(stdout, "  {}", "All checks passed!".green().bold()).ok();
        }

        writeln!(stdout).ok();
        stdout.flush().ok();
        Ok(())
    }
}

/// Print the per-document header line for the table format
pub fn print_document_header(label: &str, path: &Path) {
    println!();
    println!(
        "{}",
        format!("--- {}: {} ---", label, path.display()).cyan()
    );
}
