//! Error types for configuration validation
//!
//! Provides structured error types for document loading and CLI operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::validation::{codes, Diagnostic};

/// Terminal failure while loading a configuration document.
///
/// A load error halts further checking of the document it occurred in, but
/// never affects the sibling document. Each variant converts to exactly one
/// error diagnostic.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The configuration file does not exist
    #[error("File not found")]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be read
    #[error("Failed to read file: {message}")]
    Read { path: PathBuf, message: String },

    /// The file is not well-formed YAML
    #[error("YAML parse error: {message}")]
    Parse { path: PathBuf, message: String },

    /// The file parsed to an empty or null document
    #[error("Empty configuration file")]
    EmptyConfig { path: PathBuf },
}

impl LoadError {
    /// Path of the document the failure occurred in
    pub fn path(&self) -> &Path {
        match self {
            LoadError::FileNotFound { path }
            | LoadError::Read { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::EmptyConfig { path } => path,
        }
    }

    /// Stable diagnostic code for this failure class
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::FileNotFound { .. } => codes::FILE_NOT_FOUND,
            LoadError::Read { .. } => codes::READ_ERROR,
            LoadError::Parse { .. } => codes::PARSE_ERROR,
            LoadError::EmptyConfig { .. } => codes::EMPTY_CONFIG,
        }
    }

    /// Convert into the single error diagnostic reported for the document
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string(), self.path().display().to_string())
    }
}

/// Main error type for CLI operations
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ValidationError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ValidationError::InvalidInput(msg.into())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(self, ValidationError::InvalidInput(_))
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for ValidationError {
    fn from(err: serde_yaml::Error) -> Self {
        ValidationError::Serialization(format!("YAML error: {}", err))
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, ValidationError>;
