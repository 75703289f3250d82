//! Document metadata: values, traversal, front matter and the store.
//!
//! Metadata values are `serde_yaml::Value`, since front matter is YAML.

pub mod frontmatter;
pub mod store;
pub mod value;

pub use serde_yaml::Value;
pub use store::{InMemoryStore, MetadataChange, MetadataStore};
pub use value::{display_value, traverse, write_path};
