//! Plugin Config Validation
//!
//! A rule-based validation engine for the developer portal's dynamic plugin
//! wiring and branding configuration. Given the declarative configuration
//! documents, it checks structural correctness, cross-reference consistency,
//! and cosmetic conventions, and emits a complete, categorized diagnostic
//! report instead of failing on the first problem. The engine only reports;
//! it never mutates or auto-fixes configuration.
//!
//! ## Architecture
//!
//! 1. **Document loader** (`document`): reads a file, parses one YAML
//!    document into a generic node tree, classifies terminal load failures.
//!
//! 2. **Wiring validator** (`wiring`): walks plugin entries under
//!    `dynamicPlugins.frontend`, applying field-presence, format, and
//!    document-wide route-uniqueness rules.
//!
//! 3. **Branding validator** (`branding`): walks `app.branding`, applying
//!    logo path conventions and light-theme hex-color rules.
//!
//! 4. **Report aggregator** (`report`): merges both validators' diagnostics
//!    in invocation order and derives the pass/fail status.
//!
//! The two documents are loaded and validated independently: a structural
//! failure in one never prevents the other from being checked.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Validate the wiring document alone
//! plugin-config-validate dynamic-plugins-config.yaml
//!
//! # Validate wiring and branding together, machine-readable output
//! plugin-config-validate dynamic-plugins-config.yaml app-config.yaml --format json
//! ```
//!
//! Exit code 0 means zero errors (warnings allowed); 1 means one or more
//! errors or a missing required argument.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use plugin_config_validation::{validate_branding_file, validate_wiring_file, ValidationReport};
//!
//! let mut report = ValidationReport::new();
//! report.append(validate_wiring_file(Path::new("dynamic-plugins-config.yaml")));
//! report.append(validate_branding_file(Path::new("app-config.yaml")));
//!
//! println!("{}", report.summary());
//! for diagnostic in &report.diagnostics {
//!     println!("{}", diagnostic);
//! }
//! ```

// Core modules
pub mod branding;
pub mod cli;
pub mod document;
pub mod error;
pub mod report;
pub mod validation;
pub mod wiring;

use std::path::Path;

// Re-export commonly used types
pub use branding::BrandingValidator;
pub use cli::{Cli, ExitCode, OutputFormat, ReportOutput};
pub use document::{load_document, ConfigNode};
pub use error::{LoadError, ValidationError};
pub use report::ValidationReport;
pub use validation::{codes, Diagnostic, DocumentValidator, Severity, ValidationResult};
pub use wiring::{WiringValidator, KNOWN_ICONS, KNOWN_MOUNT_POINTS, KNOWN_WIRING_KEYS};

/// Tool version (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool identifier
pub const TOOL_ID: &str = "plugin-config-validate";

/// Load a document and hand the tree to the given validator.
///
/// A terminal load failure becomes the document's sole error diagnostic;
/// otherwise the validator's complete diagnostic set is returned.
pub fn validate_document<V: DocumentValidator>(path: &Path, validator: &V) -> ValidationResult {
    match document::load_document(path) {
        Ok(doc) => validator.validate(&doc),
        Err(err) => err.to_diagnostic().into(),
    }
}

/// Validate a dynamic plugins wiring document on disk
pub fn validate_wiring_file(path: &Path) -> ValidationResult {
    validate_document(path, &WiringValidator::new())
}

/// Validate an app configuration's branding section on disk
pub fn validate_branding_file(path: &Path) -> ValidationResult {
    validate_document(path, &BrandingValidator::new())
}

/// Run the CLI application
///
/// This is the main entry point for the CLI binary.
pub fn run_cli(cli: Cli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::Failure
        }
    }
}
