//! Error types for metabind operations.
//!
//! This module defines [`MetabindError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Declaration errors (`DeclarationSyntax` through `MissingBindTarget`) are
//!   caught at the render boundary and turned into an inline placeholder
//! - `UnknownTemplate` is non-fatal and usually travels as a warning
//! - `BindTargetResolution` is reported, but the synchronizer treats it as
//!   "value absent"
//! - `Internal` marks a broken invariant and is never swallowed

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for metabind operations.
#[derive(Debug, Error)]
pub enum MetabindError {
    /// Declaration text is malformed.
    #[error("{}", syntax_message(.message, .position, .snippet))]
    DeclarationSyntax {
        message: String,
        position: Option<usize>,
        snippet: Option<String>,
    },

    /// The input field type is not one of the known kinds.
    #[error("Unknown input field type '{name}'")]
    UnknownType { name: String },

    /// The argument is not allowed for this input field type.
    #[error("Unknown argument '{argument}' for input field type '{field_type}'")]
    UnknownArgument {
        argument: String,
        field_type: String,
    },

    /// The argument value failed validation.
    #[error("Invalid value for argument '{argument}': expected {expected}")]
    ArgumentValue { argument: String, expected: String },

    /// Referenced template does not exist.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// A template definition in the settings failed to parse.
    #[error("Invalid template '{name}': {message}")]
    InvalidTemplate { name: String, message: String },

    /// The declaration claims to be bound but carries no bind target.
    #[error("Input field is bound but has no bind target")]
    MissingBindTarget,

    /// The bind target's file could not be identified uniquely.
    #[error("Cannot resolve bind target '{target}': {message}")]
    BindTargetResolution {
        target: String,
        message: String,
        candidates: Vec<String>,
    },

    /// Settings file not found at expected location.
    #[error("Settings not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// Failed to parse settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    /// An internal invariant was violated.
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn syntax_message(message: &str, position: &Option<usize>, snippet: &Option<String>) -> String {
    let mut out = format!("Syntax error: {}", message);
    if let Some(pos) = position {
        out.push_str(&format!(" at position {}", pos));
    }
    if let Some(snippet) = snippet {
        out.push_str(&format!(" near '{}'", snippet));
    }
    out
}

impl MetabindError {
    /// Build a syntax error without location information.
    pub fn syntax(message: impl Into<String>) -> Self {
        MetabindError::DeclarationSyntax {
            message: message.into(),
            position: None,
            snippet: None,
        }
    }

    /// Build a syntax error pointing at a character offset.
    pub fn syntax_at(message: impl Into<String>, position: usize, snippet: impl Into<String>) -> Self {
        let snippet = snippet.into();
        MetabindError::DeclarationSyntax {
            message: message.into(),
            position: Some(position),
            snippet: if snippet.is_empty() {
                None
            } else {
                Some(snippet)
            },
        }
    }

    /// Build an internal invariant error and log it loudly.
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!("internal invariant violated: {}", message);
        MetabindError::Internal { message }
    }

    /// Whether a declaration carrying this error can still be rendered.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MetabindError::UnknownTemplate { .. })
    }
}

/// Result type alias for metabind operations.
pub type Result<T> = std::result::Result<T, MetabindError>;
