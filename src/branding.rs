//! Branding validation
//!
//! Walks the `app.branding` section of the app configuration: logo path
//! conventions and light-theme color values. Branding is optional; its
//! absence is a warning, never an error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::document::ConfigNode;
use crate::validation::{codes, Diagnostic, DocumentValidator, ValidationResult};

/// Logo keys checked for the absolute-path-or-URL convention
pub const LOGO_KEYS: &[&str] = &["fullLogo", "iconLogo"];

// A malformed color breaks rendering outright, so the shape check is strict:
// exactly '#' plus six hex digits, case-insensitive.
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// Validator for the app branding document
#[derive(Debug, Default)]
pub struct BrandingValidator;

impl BrandingValidator {
    pub fn new() -> Self {
        Self
    }

    /// Relative logo paths are suspect, not rejected
    fn check_logos(&self, branding: &ConfigNode, result: &mut ValidationResult) {
        for &key in LOGO_KEYS {
            let Some(logo) = branding.get(key).and_then(ConfigNode::as_str) else {
                continue;
            };
            if logo.is_empty() || logo.starts_with('/') || logo.starts_with("http") {
                continue;
            }
            result.add(Diagnostic::warning(
                codes::LOGO_PATH,
                format!("branding.{key} should be an absolute path or URL: {logo}"),
                format!("app.branding.{key}"),
            ));
        }
    }

    /// Only string values starting with '#' are treated as colors; anything
    /// else may be a non-color theming token and is skipped.
    fn check_light_theme(&self, branding: &ConfigNode, result: &mut ValidationResult) {
        let entries = branding
            .get("theme")
            .and_then(|theme| theme.get("light"))
            .and_then(ConfigNode::as_mapping)
            .unwrap_or(&[]);

        for (key, value) in entries {
            let Some(color) = value.as_str() else { continue };
            if !color.starts_with('#') {
                continue;
            }
            if !HEX_COLOR.is_match(color) {
                result.add(Diagnostic::error(
                    codes::INVALID_HEX_COLOR,
                    format!("Invalid hex color for theme.light.{key}: {color}"),
                    format!("app.branding.theme.light.{key}"),
                ));
            }
        }
    }
}

impl DocumentValidator for BrandingValidator {
    fn name(&self) -> &'static str {
        "branding"
    }

    fn validate(&self, doc: &ConfigNode) -> ValidationResult {
        let mut result = ValidationResult::new();

        let branding = doc
            .get("app")
            .and_then(|app| app.get("branding"))
            .filter(|branding| !branding.is_empty());

        let Some(branding) = branding else {
            result.add(Diagnostic::warning(
                codes::NO_BRANDING,
                "No branding section found",
                "app.branding",
            ));
            return result;
        };

        self.check_logos(branding, &mut result);
        self.check_light_theme(branding, &mut result);

        debug!(
            diagnostics = result.diagnostics.len(),
            "branding validation complete"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(yaml: &str) -> ValidationResult {
        let doc = ConfigNode::from(serde_yaml::from_str::<serde_yaml::Value>(yaml).unwrap());
        BrandingValidator::new().validate(&doc)
    }

    #[test]
    fn test_missing_branding_section_warns() {
        let result = validate("app:\n  title: My Portal");
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.warnings()[0].code, codes::NO_BRANDING);
    }

    #[test]
    fn test_empty_branding_section_warns() {
        let result = validate("app:\n  branding: {}");
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.warnings()[0].code, codes::NO_BRANDING);
    }

    #[test]
    fn test_absolute_and_url_logos_are_silent() {
        let result = validate(
            r#"
app:
  branding:
    fullLogo: /logo.svg
    iconLogo: https://example.com/logo.svg
"#,
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_relative_logo_warns() {
        let result = validate(
            r#"
app:
  branding:
    fullLogo: assets/logo.svg
"#,
        );
        assert_eq!(result.error_count(), 0);
        let warnings = result.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, codes::LOGO_PATH);
        assert!(warnings[0].message.contains("assets/logo.svg"));
        assert_eq!(warnings[0].location, "app.branding.fullLogo");
    }

    #[test]
    fn test_non_string_logo_is_skipped() {
        let result = validate(
            r#"
app:
  branding:
    fullLogo: 42
"#,
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_valid_hex_colors_pass() {
        let result = validate(
            r##"
app:
  branding:
    theme:
      light:
        primaryColor: "#1A2B3C"
        headerColor: "#ffffff"
"##,
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_malformed_hex_colors_each_yield_one_error() {
        let result = validate(
            r##"
app:
  branding:
    theme:
      light:
        bad-digit: "#12G456"
        too-short: "#1234"
"##,
        );
        let errors = result.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("#12G456"));
        assert!(errors[1].message.contains("#1234"));
        assert_eq!(errors[0].location, "app.branding.theme.light.bad-digit");
    }

    #[test]
    fn test_non_hash_string_is_skipped() {
        // No leading '#': may be a non-color theming token.
        let result = validate(
            r#"
app:
  branding:
    theme:
      light:
        primaryColor: 1A2B3C
"#,
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_non_string_theme_value_is_skipped() {
        let result = validate(
            r#"
app:
  branding:
    theme:
      light:
        spacing: 42
"#,
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_mixed_branding_document() {
        let result = validate(
            r##"
app:
  branding:
    fullLogo: assets/logo.svg
    iconLogo: /icon.svg
    theme:
      light:
        primaryColor: "#00FF00"
        headerColor: "#nothex"
"##,
        );
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.errors()[0].code, codes::INVALID_HEX_COLOR);
        assert_eq!(result.warnings()[0].code, codes::LOGO_PATH);
    }
}
