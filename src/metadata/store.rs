//! Metadata store abstraction and an in-memory implementation.
//!
//! The store is the source of truth for front-matter values. Writes are
//! synchronous, but change notifications are queued and delivered only
//! when the host drains them, the same way an editor reports a metadata
//! change some time after the edit that caused it.

use serde_yaml::Value;
use std::collections::{HashMap, VecDeque};

use super::value::{traverse, write_path};
use crate::bind::{FieldPath, FileRef};
use crate::error::Result;

/// "Metadata changed for this file; here is the new snapshot."
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataChange {
    pub file: FileRef,
    pub snapshot: Value,
}

/// Source of structured metadata per document.
pub trait MetadataStore {
    /// Current metadata for `file`, if the store knows the file.
    fn snapshot(&self, file: &FileRef) -> Option<Value>;

    /// Write `value` at `path` in `file`'s metadata and queue a change
    /// notification.
    fn write(&mut self, file: &FileRef, path: &FieldPath, value: Value) -> Result<()>;

    /// Take every queued change notification, oldest first.
    fn drain_changes(&mut self) -> Vec<MetadataChange>;

    /// Read a single field. Misses are `None`.
    fn read(&self, file: &FileRef, path: &FieldPath) -> Option<Value> {
        self.snapshot(file)
            .and_then(|root| traverse(&root, path).cloned())
    }
}

/// Store holding every document's metadata in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: HashMap<FileRef, Value>,
    pending: VecDeque<MetadataChange>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document's metadata without notifying anyone.
    pub fn insert(&mut self, file: FileRef, metadata: Value) {
        self.documents.insert(file, metadata);
    }

    /// Replace a document's metadata as an external edit would, queueing a
    /// change notification.
    pub fn replace(&mut self, file: &FileRef, metadata: Value) {
        self.documents.insert(file.clone(), metadata.clone());
        self.pending.push_back(MetadataChange {
            file: file.clone(),
            snapshot: metadata,
        });
    }

    pub fn contains(&self, file: &FileRef) -> bool {
        self.documents.contains_key(file)
    }

    /// Number of undelivered change notifications.
    pub fn pending_changes(&self) -> usize {
        self.pending.len()
    }

    pub fn files(&self) -> impl Iterator<Item = &FileRef> {
        self.documents.keys()
    }
}

impl MetadataStore for InMemoryStore {
    fn snapshot(&self, file: &FileRef) -> Option<Value> {
        self.documents.get(file).cloned()
    }

    fn write(&mut self, file: &FileRef, path: &FieldPath, value: Value) -> Result<()> {
        let root = self.documents.entry(file.clone()).or_insert(Value::Null);
        write_path(root, path, value)?;
        let snapshot = root.clone();
        tracing::debug!("Wrote {}#{}", file, path);
        self.pending.push_back(MetadataChange {
            file: file.clone(),
            snapshot,
        });
        Ok(())
    }

    fn drain_changes(&mut self) -> Vec<MetadataChange> {
        self.pending.drain(..).collect()
    }
}
