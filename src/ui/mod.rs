//! Terminal output for the CLI.
//!
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] writes styled lines to stdout
//! - [`MockUI`] captures everything for assertions
//!
//! # Example
//!
//! ```
//! use metabind::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Wrote note.md");
//! assert_eq!(ui.successes(), &["Wrote note.md".to_string()]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, MetabindTheme};

/// Output sink for commands.
pub trait UserInterface {
    /// Plain line.
    fn message(&mut self, msg: &str);

    fn success(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    fn error(&mut self, msg: &str);

    /// Section header.
    fn show_header(&mut self, title: &str);

    /// `key: value` line.
    fn key_value(&mut self, key: &str, value: &str);
}
