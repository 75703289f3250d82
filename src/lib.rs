//! metabind - Inline input fields bound to markdown front matter.
//!
//! Documents embed declarations such as `INPUT[toggle(title(Done)):done]`.
//! metabind parses them, resolves what each one is bound to, and keeps the
//! live controls and the front-matter metadata in step in both directions.
//!
//! # Modules
//!
//! - [`parser`] - Declaration parsing, argument validation and templates
//! - [`bind`] - Bind target resolution against a set of documents
//! - [`metadata`] - Front matter, value traversal and the metadata store
//! - [`fields`] - Concrete input controls
//! - [`registry`] - Registry of live render children
//! - [`sync`] - Binding synchronizer and per-field mailboxes
//! - [`render`] - Render boundary with inline error placeholders
//! - [`scan`] - Finding declarations in markdown
//! - [`vault`] - Markdown documents on disk
//! - [`config`] - Settings loading, validation and JSON schema
//! - [`cli`] - Command-line interface
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use metabind::bind::{FileIndex, FileRef};
//! use metabind::config::Settings;
//! use metabind::metadata::{InMemoryStore, Value};
//! use metabind::render::Renderer;
//!
//! let note = FileRef::new("note.md");
//! let mut store = InMemoryStore::new();
//! store.insert(note.clone(), serde_yaml::from_str("done: false").unwrap());
//!
//! let mut renderer = Renderer::from_settings(&Settings::default(), FileIndex::new([note.clone()]));
//! let mut field = renderer
//!     .render("INPUT[toggle:done]", &note, &store)
//!     .into_live()
//!     .unwrap();
//!
//! store.replace(&note, serde_yaml::from_str("done: true").unwrap());
//! renderer.deliver(&mut store);
//! renderer.flush(&mut field).unwrap();
//! assert_eq!(field.value().unwrap(), Value::Bool(true));
//! ```

pub mod bind;
pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod metadata;
pub mod parser;
pub mod registry;
pub mod render;
pub mod scan;
pub mod sync;
pub mod ui;
pub mod vault;

pub use error::{MetabindError, Result};
