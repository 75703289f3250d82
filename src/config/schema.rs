//! Settings schema definitions for metabind.
//!
//! These structs map to the YAML settings file
//! (`.metabind/settings.yml` under the vault root).

use serde::{Deserialize, Serialize};

/// Root settings structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// chrono `strftime` format used for date arguments and date controls
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Developer diagnostics: verbose logging of parse and sync activity
    #[serde(default, skip_serializing_if = "is_false")]
    pub dev_mode: bool,

    /// Named declaration templates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_templates: Vec<TemplateConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            dev_mode: false,
            input_templates: Vec::new(),
        }
    }
}

/// Default date format.
pub fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn is_false(v: &bool) -> bool {
    !v
}

/// A template definition as written in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Name used in `INPUT[name][...]`
    pub name: String,

    /// Declaration text, e.g. `INPUT[slider(minValue(1), maxValue(5))]`
    pub declaration: String,
}

impl TemplateConfig {
    pub fn new(name: impl Into<String>, declaration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaration: declaration.into(),
        }
    }
}
