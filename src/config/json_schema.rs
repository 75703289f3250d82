//! JSON Schema generation for the metabind settings file.
//!
//! Produces a Draft-07 schema for `.metabind/settings.yml`, for editor
//! autocomplete and validation.

use serde_json::{json, Value};

use crate::parser::{ArgumentKind, InputFieldType};

/// Generates JSON Schema for the settings file.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for settings.yml.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "metabind settings",
            "description": "Settings for inline input field declarations",
            "type": "object",
            "properties": {
                "date_format": {
                    "type": "string",
                    "default": "%Y-%m-%d",
                    "description": "chrono strftime format for date arguments and date controls"
                },
                "dev_mode": {
                    "type": "boolean",
                    "default": false,
                    "description": "Enable developer diagnostics"
                },
                "input_templates": self.templates_schema()
            },
            "additionalProperties": false
        })
    }

    /// Generate schema for the template list.
    fn templates_schema(&self) -> Value {
        let types: Vec<&str> = InputFieldType::ALL.iter().map(|t| t.name()).collect();
        let arguments: Vec<&str> = ArgumentKind::ALL.iter().map(|k| k.name()).collect();
        json!({
            "type": "array",
            "description": format!(
                "Named declaration templates. Types: {}. Arguments: {}.",
                types.join(", "),
                arguments.join(", ")
            ),
            "items": {
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Name used in INPUT[name][...]"
                    },
                    "declaration": {
                        "type": "string",
                        "pattern": "^\\s*INPUT\\[",
                        "description": "Declaration text the template expands to"
                    }
                },
                "required": ["name", "declaration"],
                "additionalProperties": false
            }
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
