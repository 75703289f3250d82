//! Document references and the document collection they are matched in.

use serde::Serialize;
use std::fmt;

/// Markdown extension, ignored when comparing paths.
const MARKDOWN_EXTENSION: &str = ".md";

/// A vault-relative document path with `/` separators.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FileRef(String);

impl FileRef {
    /// Normalize separators and strip a leading `./` or `/`.
    pub fn new(path: impl AsRef<str>) -> Self {
        let normalized = path.as_ref().trim().replace('\\', "/");
        let trimmed = normalized
            .trim_start_matches("./")
            .trim_start_matches('/')
            .to_string();
        Self(trimmed)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path with a trailing `.md` removed.
    pub fn without_extension(&self) -> &str {
        strip_markdown_extension(&self.0)
    }

    /// File name without directories or `.md`.
    pub fn base_name(&self) -> &str {
        let stem = self.without_extension();
        stem.rsplit('/').next().unwrap_or(stem)
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileRef {
    fn from(value: &str) -> Self {
        FileRef::new(value)
    }
}

fn strip_markdown_extension(path: &str) -> &str {
    path.strip_suffix(MARKDOWN_EXTENSION).unwrap_or(path)
}

/// Whether a file reference is written as a path rather than a bare name.
pub fn is_explicit_path(reference: &str) -> bool {
    reference.contains('/') || reference.ends_with(MARKDOWN_EXTENSION)
}

/// The set of documents bind targets can point at.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    files: Vec<FileRef>,
}

impl FileIndex {
    /// Build an index; files are kept sorted and deduplicated.
    pub fn new(files: impl IntoIterator<Item = FileRef>) -> Self {
        let mut files: Vec<FileRef> = files.into_iter().collect();
        files.sort();
        files.dedup();
        Self { files }
    }

    pub fn insert(&mut self, file: FileRef) {
        if let Err(pos) = self.files.binary_search(&file) {
            self.files.insert(pos, file);
        }
    }

    pub fn remove(&mut self, file: &FileRef) {
        self.files.retain(|f| f != file);
    }

    pub fn contains(&self, file: &FileRef) -> bool {
        self.files.binary_search(file).is_ok()
    }

    pub fn files(&self) -> &[FileRef] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Exact, extension-insensitive path match.
    pub fn match_path(&self, path: &str) -> Option<&FileRef> {
        let wanted = FileRef::new(path);
        let wanted = wanted.without_extension();
        self.files.iter().find(|f| f.without_extension() == wanted)
    }

    /// Every document whose base name equals `name`, in path order.
    pub fn match_name(&self, name: &str) -> Vec<&FileRef> {
        let name = strip_markdown_extension(name.trim());
        self.files.iter().filter(|f| f.base_name() == name).collect()
    }
}
