//! Aggregated validation report
//!
//! Merges the per-document results in invocation order and derives the
//! overall pass/fail status: any error fails the run, warnings alone never
//! do. The status is the sole input to the exit-code contract.

use serde::{Deserialize, Serialize};

use crate::validation::{Diagnostic, Severity, ValidationResult};

/// Diagnostics from every requested document pass, in invocation order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one document pass. Call order is report order.
    pub fn append(&mut self, result: ValidationResult) {
        self.diagnostics.extend(result.diagnostics);
    }

    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect()
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors().len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().len()
    }

    /// Whether the run passed: zero errors, any number of warnings
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    /// One-line human summary of the report
    pub fn summary(&self) -> String {
        let errors = self.error_count();
        let warnings = self.warning_count();
        if errors == 0 && warnings == 0 {
            "Configuration is valid".to_string()
        } else if errors == 0 {
            format!("Configuration is valid with {} warning(s)", warnings)
        } else {
            format!(
                "Configuration has {} error(s) and {} warning(s)",
                errors, warnings
            )
        }
    }
}
