//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the vault root and settings override
//! - [`CommandDispatcher`] for routing CLI subcommands

use anyhow::anyhow;
use std::path::{Path, PathBuf};

use crate::bind::FileRef;
use crate::cli::args::{Cli, Commands};
use crate::config::{self, Settings};
use crate::error::Result;
use crate::ui::UserInterface;
use crate::vault::Vault;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where commands find the vault and its settings.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub vault_root: PathBuf,
    pub settings_override: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(vault_root: PathBuf, settings_override: Option<PathBuf>) -> Self {
        Self {
            vault_root,
            settings_override,
        }
    }

    /// Load and validate the settings.
    pub fn settings(&self) -> Result<Settings> {
        let settings = config::load(&self.vault_root, self.settings_override.as_deref())?;
        config::validate(&settings)?;
        Ok(settings)
    }

    pub fn vault(&self) -> Result<Vault> {
        Vault::open(&self.vault_root)
    }

    /// Map a user-supplied path onto a document of `vault`.
    ///
    /// Accepts paths relative to the vault root, with or without the `.md`
    /// extension, and absolute paths inside the vault.
    pub fn document(&self, vault: &Vault, path: &Path) -> Result<FileRef> {
        let relative = path.strip_prefix(&self.vault_root).unwrap_or(path);
        let index = vault.index();
        index
            .match_path(&relative.to_string_lossy())
            .cloned()
            .ok_or_else(|| {
                anyhow!(
                    "'{}' is not a document in {}",
                    path.display(),
                    self.vault_root.display()
                )
                .into()
            })
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Route the CLI subcommand to its implementation and run it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Parse(args) => {
                super::parse::ParseCommand::new(&self.context, args.clone()).execute(ui)
            }
            Commands::Scan(args) => {
                super::scan::ScanCommand::new(&self.context, args.clone()).execute(ui)
            }
            Commands::Resolve(args) => {
                super::resolve::ResolveCommand::new(&self.context, args.clone()).execute(ui)
            }
            Commands::Templates(args) => {
                super::templates::TemplatesCommand::new(&self.context, args.clone()).execute(ui)
            }
            Commands::Set(args) => {
                super::set::SetCommand::new(&self.context, args.clone()).execute(ui)
            }
            Commands::Schema => super::schema::SchemaCommand::new().execute(ui),
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn document_accepts_relative_absolute_and_bare_paths() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("notes")).unwrap();
        fs::write(temp.path().join("notes/a.md"), "").unwrap();
        let context = CommandContext::new(temp.path().to_path_buf(), None);
        let vault = context.vault().unwrap();

        let expected = FileRef::new("notes/a.md");
        assert_eq!(context.document(&vault, Path::new("notes/a.md")).unwrap(), expected);
        assert_eq!(context.document(&vault, Path::new("notes/a")).unwrap(), expected);
        assert_eq!(
            context
                .document(&vault, &temp.path().join("notes/a.md"))
                .unwrap(),
            expected
        );
        assert!(context.document(&vault, Path::new("missing.md")).is_err());
    }

    #[test]
    fn settings_default_when_absent() {
        let temp = TempDir::new().unwrap();
        let context = CommandContext::new(temp.path().to_path_buf(), None);
        assert_eq!(context.settings().unwrap(), Settings::default());
    }
}
