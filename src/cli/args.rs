//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// metabind - Inline input fields bound to markdown front matter.
#[derive(Debug, Parser)]
#[command(name = "metabind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault root (defaults to the current directory)
    #[arg(long, global = true, env = "METABIND_VAULT")]
    pub vault: Option<PathBuf>,

    /// Settings file (overrides <vault>/.metabind/settings.yml)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a declaration and show its structure
    Parse(ParseArgs),

    /// Find and render every declaration in a document
    Scan(ScanArgs),

    /// Resolve a bind target from a document
    Resolve(ResolveArgs),

    /// List the templates defined in the settings
    Templates(TemplatesArgs),

    /// Set a front-matter value, as a bound input field would
    Set(SetArgs),

    /// Print the JSON schema of the settings file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `parse` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ParseArgs {
    /// Declaration text, e.g. 'INPUT[toggle:done]'
    pub declaration: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScanArgs {
    /// Document, relative to the vault root
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Bind target, e.g. 'other#meta.author'
    pub bind: String,

    /// Document the bind target appears in
    #[arg(long, value_name = "FILE")]
    pub from: PathBuf,

    /// Take the first match by path when a bare name is ambiguous
    #[arg(long)]
    pub first: bool,
}

/// Arguments for the `templates` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TemplatesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetArgs {
    /// Document, relative to the vault root
    pub file: PathBuf,

    /// Dotted field path, e.g. 'meta.author'
    pub field_path: String,

    /// New value, read as a YAML scalar
    pub value: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
