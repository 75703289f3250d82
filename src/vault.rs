//! A directory of markdown documents on disk.
//!
//! [`Vault::open`] reads every `.md` file below the root, skipping
//! dot-directories such as `.metabind` and `.git`. Front matter seeds an
//! [`InMemoryStore`]; [`Vault::persist`] writes a document's metadata back
//! to its file, leaving the body untouched.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use serde_yaml::Value;

use crate::bind::{FileIndex, FileRef};
use crate::error::Result;
use crate::metadata::{frontmatter, InMemoryStore, MetadataStore};

/// Markdown documents keyed by vault-relative path.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    documents: BTreeMap<FileRef, String>,
}

impl Vault {
    /// Load every markdown document below `root`.
    pub fn open(root: &Path) -> Result<Self> {
        let mut documents = BTreeMap::new();
        Self::load_recursive(root, root, &mut documents)?;
        tracing::debug!("Loaded {} document(s) from {}", documents.len(), root.display());
        Ok(Self {
            root: root.to_path_buf(),
            documents,
        })
    }

    fn load_recursive(
        root: &Path,
        dir: &Path,
        documents: &mut BTreeMap<FileRef, String>,
    ) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let hidden = entry.file_name().to_string_lossy().starts_with('.');

            if path.is_dir() {
                if !hidden {
                    Self::load_recursive(root, &path, documents)?;
                }
            } else if path.extension().map(|e| e == "md").unwrap_or(false) {
                let relative = path.strip_prefix(root).unwrap_or(&path);
                let content = fs::read_to_string(&path)?;
                documents.insert(FileRef::new(relative.to_string_lossy()), content);
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &FileRef> {
        self.documents.keys()
    }

    pub fn index(&self) -> FileIndex {
        FileIndex::new(self.documents.keys().cloned())
    }

    pub fn document(&self, file: &FileRef) -> Option<&str> {
        self.documents.get(file).map(String::as_str)
    }

    /// Absolute path of a document.
    pub fn path_of(&self, file: &FileRef) -> PathBuf {
        self.root.join(file.as_str())
    }

    /// Build a store seeded with every document's front matter.
    ///
    /// Documents with malformed front matter are logged and seeded empty.
    pub fn store(&self) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for (file, content) in &self.documents {
            let metadata = match frontmatter::split(content) {
                Ok((Some(metadata), _)) => metadata,
                Ok((None, _)) => Value::Mapping(Default::default()),
                Err(e) => {
                    tracing::warn!("{}: {}", file, e);
                    Value::Mapping(Default::default())
                }
            };
            store.insert(file.clone(), metadata);
        }
        store
    }

    /// Write `file`'s metadata from `store` back to disk.
    ///
    /// Fails without touching the file when its current front matter is
    /// malformed.
    pub fn persist(&mut self, store: &dyn MetadataStore, file: &FileRef) -> Result<()> {
        let metadata = store
            .snapshot(file)
            .ok_or_else(|| anyhow!("no metadata for '{}'", file))?;
        let current = self.documents.get(file).map(String::as_str).unwrap_or("");
        let (_, body) = frontmatter::split(current)
            .map_err(|e| anyhow!("refusing to rewrite '{}': {}", file, e))?;
        let updated = frontmatter::render(&metadata, body)?;

        let path = self.path_of(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &updated)?;
        tracing::info!("Updated {}", path.display());
        self.documents.insert(file.clone(), updated);
        Ok(())
    }
}
