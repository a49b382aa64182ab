//! CLI module for the plugin config validation tool
//!
//! Provides the command-line surface: argument definitions, report
//! rendering, and the exit-code contract.

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::{OutputFormat, ReportOutput};

use crate::error::ValidationError;
use crate::report::ValidationReport;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Zero errors; warnings allowed
    Success = 0,
    /// One or more errors, or the required argument is missing
    Failure = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine the exit code from an aggregated report
    pub fn from_report(report: &ValidationReport) -> Self {
        if report.passed() {
            ExitCode::Success
        } else {
            ExitCode::Failure
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: Cli) -> Result<ExitCode, ValidationError> {
    commands::execute(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{codes, Diagnostic, ValidationResult};

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Failure), 1);
    }

    #[test]
    fn test_exit_code_from_report() {
        let mut report = ValidationReport::new();
        assert_eq!(ExitCode::from_report(&report), ExitCode::Success);

        let mut warnings_only = ValidationResult::new();
        warnings_only.add(Diagnostic::warning(codes::ROUTE_CONFLICT, "w", "a"));
        report.append(warnings_only);
        assert_eq!(ExitCode::from_report(&report), ExitCode::Success);

        let mut with_error = ValidationResult::new();
        with_error.add(Diagnostic::error(codes::MISSING_FIELD, "e", "b"));
        report.append(with_error);
        assert_eq!(ExitCode::from_report(&report), ExitCode::Failure);
    }
}
