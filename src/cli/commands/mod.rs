//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Commands that need the vault load it, and the
//! settings, from the dispatcher's [`CommandContext`].

pub mod completions;
pub mod dispatcher;
pub mod parse;
pub mod resolve;
pub mod scan;
pub mod schema;
pub mod set;
pub mod templates;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
