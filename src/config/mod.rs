//! Settings loading, parsing, and validation for metabind.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - JSON Schema output in [`json_schema`]
//!
//! Settings are never read from ambient global state. They are loaded once
//! and handed to the parser and renderer through explicit reconfiguration
//! calls.
//!
//! # Example
//!
//! ```
//! use metabind::config::{load_vault_settings, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".metabind");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("settings.yml"), "dev_mode: true").unwrap();
//!
//! let settings = load_vault_settings(temp.path()).unwrap();
//! validate(&settings).unwrap();
//! assert!(settings.dev_mode);
//! ```

pub mod json_schema;
pub mod loader;
pub mod schema;
pub mod validator;

pub use json_schema::SchemaGenerator;
pub use loader::{
    load, load_settings, load_vault_settings, parse_settings, SettingsPaths, SETTINGS_DIR,
    SETTINGS_FILE,
};
pub use schema::{default_date_format, Settings, TemplateConfig};
pub use validator::{is_valid_date_format, validate, validate_settings, ValidationError};
