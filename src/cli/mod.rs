//! Command-line interface for metabind.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ParseArgs, ResolveArgs, ScanArgs, SetArgs, TemplatesArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
