//! Diagnostic model shared by all validators
//!
//! A validation pass walks one document and accumulates [`Diagnostic`]s in
//! traversal order. Diagnostics are append-only: once emitted they are never
//! mutated, and identical input always produces the identical ordered list.

use serde::{Deserialize, Serialize};

use crate::document::ConfigNode;

/// Severity levels for validation diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be fixed; fails the run
    Error,
    /// Should be addressed; never fails the run
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Stable diagnostic codes, grouped by failure class.
pub mod codes {
    // Structural: terminal for the document they occur in.
    pub const FILE_NOT_FOUND: &str = "FileNotFound";
    pub const READ_ERROR: &str = "ReadError";
    pub const PARSE_ERROR: &str = "ParseError";
    pub const EMPTY_CONFIG: &str = "EmptyConfig";

    // Field: collected, scanning continues.
    pub const MISSING_FIELD: &str = "MissingField";
    pub const ROUTE_PATH_FORMAT: &str = "RoutePathFormat";
    pub const INVALID_HEX_COLOR: &str = "InvalidHexColor";

    // Advisory: informational only.
    pub const NO_FRONTEND_PLUGINS: &str = "NoFrontendPlugins";
    pub const UNKNOWN_WIRING_KEY: &str = "UnknownWiringKey";
    pub const UNKNOWN_ICON: &str = "UnknownIcon";
    pub const ROUTE_CONFLICT: &str = "RouteConflict";
    pub const LOGO_PATH: &str = "LogoPath";
    pub const NO_BRANDING: &str = "NoBranding";
}

/// A single validation diagnostic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity of the diagnostic
    pub severity: Severity,
    /// Stable code identifying the diagnostic class
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Dotted location tag, e.g. `my-plugin.dynamicRoutes[0]`
    pub location: String,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(
        code: impl Into<String>,
        message: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            location: location.into(),
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(
        code: impl Into<String>,
        message: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            location: location.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} at '{}': {}",
            self.severity, self.code, self.location, self.message
        )
    }
}

/// Ordered diagnostics from one document pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Diagnostics in document traversal order
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// All error diagnostics, in traversal order
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect()
    }

    /// All warning diagnostics, in traversal order
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

    /// Whether the pass produced no errors (warnings allowed)
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }
}

impl From<Diagnostic> for ValidationResult {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

/// A validator for one document kind.
///
/// Implementations are total: they never abort mid-scan and always return the
/// complete diagnostic set for the tree they were given.
pub trait DocumentValidator {
    /// Short name of the validator, for logging
    fn name(&self) -> &'static str;

    /// Walk the document tree and collect diagnostics
    fn validate(&self, doc: &ConfigNode) -> ValidationResult;
}
