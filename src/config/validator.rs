//! Settings validation rules.
//!
//! - The date format must be a valid chrono format string
//! - Template names must be non-empty and unique
//!
//! Template declarations themselves are checked when the parser loads them.

use chrono::format::{Item, StrftimeItems};

use crate::config::schema::Settings;
use crate::error::{MetabindError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate settings and return all errors.
pub fn validate_settings(settings: &Settings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !is_valid_date_format(&settings.date_format) {
        errors.push(ValidationError {
            rule: "invalid-date-format".to_string(),
            message: format!("Invalid date format '{}'", settings.date_format),
        });
    }

    let mut seen = HashSet::new();
    for template in &settings.input_templates {
        let name = template.name.trim();
        if name.is_empty() {
            errors.push(ValidationError {
                rule: "empty-template-name".to_string(),
                message: format!(
                    "Template with declaration '{}' has an empty name",
                    template.declaration
                ),
            });
        } else if !seen.insert(name) {
            errors.push(ValidationError {
                rule: "duplicate-template".to_string(),
                message: format!("Template '{}' is defined more than once", name),
            });
        }
    }

    errors
}

/// Validate settings, failing on the first batch of errors.
pub fn validate(settings: &Settings) -> Result<()> {
    let errors = validate_settings(settings);
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(MetabindError::SettingsParse {
        path: "settings".into(),
        message,
    })
}

/// Whether chrono accepts `format` as a date format.
pub fn is_valid_date_format(format: &str) -> bool {
    !format.trim().is_empty() && StrftimeItems::new(format).all(|item| item != Item::Error)
}
