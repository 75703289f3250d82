//! Bind target resolution.
//!
//! - [`path`] - field paths into front-matter metadata
//! - [`files`] - document references and the document index
//! - [`resolver`] - turning `[file#]field.path` into a [`BindTarget`]
//!
//! # Example
//!
//! ```
//! use metabind::bind::{resolve, FileIndex, FileRef};
//!
//! let index = FileIndex::new(vec![FileRef::new("noteA.md"), FileRef::new("noteB.md")]);
//! let target = resolve("noteB#meta.author", &FileRef::new("noteA.md"), &index).unwrap();
//! assert_eq!(target.file.as_str(), "noteB.md");
//! assert_eq!(target.field_path.segments(), ["meta", "author"]);
//! ```

pub mod files;
pub mod path;
pub mod resolver;

pub use files::{is_explicit_path, FileIndex, FileRef};
pub use path::{FieldPath, PATH_DELIMITER};
pub use resolver::{
    resolve, resolve_candidates, resolve_with_policy, split_bind_target, AmbiguityPolicy,
    BindTarget, Candidates, FILE_DELIMITER,
};
