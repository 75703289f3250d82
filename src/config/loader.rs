//! Settings file discovery and loading.

use crate::config::schema::Settings;
use crate::error::{MetabindError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the vault root holding metabind files.
pub const SETTINGS_DIR: &str = ".metabind";

/// Settings file name inside [`SETTINGS_DIR`].
pub const SETTINGS_FILE: &str = "settings.yml";

/// Location of the settings file for a vault.
#[derive(Debug, Clone)]
pub struct SettingsPaths {
    /// Vault settings: .metabind/settings.yml
    pub vault: Option<PathBuf>,
}

impl SettingsPaths {
    /// Discover the settings file for the given vault root.
    pub fn discover(vault_root: &Path) -> Self {
        let path = Self::default_path(vault_root);
        Self {
            vault: if path.exists() { Some(path) } else { None },
        }
    }

    /// Where the settings file lives, whether or not it exists.
    pub fn default_path(vault_root: &Path) -> PathBuf {
        vault_root.join(SETTINGS_DIR).join(SETTINGS_FILE)
    }

    /// Check if a settings file exists.
    pub fn has_settings(&self) -> bool {
        self.vault.is_some()
    }
}

/// Load a single settings file.
///
/// # Errors
///
/// Returns `SettingsNotFound` if the file doesn't exist.
/// Returns `SettingsParse` if the YAML is invalid.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MetabindError::SettingsNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MetabindError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Parse YAML content into Settings.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| MetabindError::SettingsParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings for a vault, falling back to defaults when the vault has
/// no settings file.
pub fn load_vault_settings(vault_root: &Path) -> Result<Settings> {
    let paths = SettingsPaths::discover(vault_root);
    match &paths.vault {
        Some(path) => {
            tracing::debug!("Loading settings from {}", path.display());
            load_settings(path)
        }
        None => {
            tracing::debug!("No settings file in {}, using defaults", vault_root.display());
            Ok(Settings::default())
        }
    }
}

/// Load settings with optional path override.
///
/// If `settings_override` is provided, that file must exist.
pub fn load(vault_root: &Path, settings_override: Option<&Path>) -> Result<Settings> {
    match settings_override {
        Some(path) => load_settings(path),
        None => load_vault_settings(vault_root),
    }
}
