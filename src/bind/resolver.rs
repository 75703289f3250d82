//! Resolution of raw bind strings into concrete targets.
//!
//! Raw bind strings have the shape `[fileRef#]fieldPath`. Without a file
//! segment the declaration's own file is the target. File references are
//! matched in two modes:
//!
//! 1. Explicit path (exact, extension-insensitive). Takes precedence.
//! 2. Bare name. Every document with that base name is a candidate.
//!
//! The resolver never picks among several candidates on its own. Callers
//! either ask for the full candidate set or state an [`AmbiguityPolicy`].

use serde::Serialize;
use std::fmt;

use super::files::{is_explicit_path, FileIndex, FileRef};
use super::path::FieldPath;
use crate::error::{MetabindError, Result};

/// Separator between the file reference and the field path.
pub const FILE_DELIMITER: char = '#';

/// A concrete binding: one document and a path inside its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BindTarget {
    pub file: FileRef,
    pub field_path: FieldPath,
}

impl fmt::Display for BindTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.file, FILE_DELIMITER, self.field_path)
    }
}

/// Every document a raw bind string could refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidates {
    pub files: Vec<FileRef>,
    pub field_path: FieldPath,
}

/// What to do when a bare name matches several documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmbiguityPolicy {
    /// Fail with `BindTargetResolution`, listing the candidates.
    #[default]
    Reject,
    /// Take the candidate that sorts first by path.
    FirstInPathOrder,
}

/// Split a raw bind string into its optional file segment and field path.
pub fn split_bind_target(raw: &str) -> Result<(Option<&str>, FieldPath)> {
    let raw = raw.trim();
    match raw.split_once(FILE_DELIMITER) {
        Some((file, path)) => {
            let file = file.trim();
            if file.is_empty() {
                return Err(MetabindError::BindTargetResolution {
                    target: raw.to_string(),
                    message: format!("empty file reference before '{}'", FILE_DELIMITER),
                    candidates: Vec::new(),
                });
            }
            Ok((Some(file), FieldPath::parse(path)?))
        }
        None => Ok((None, FieldPath::parse(raw)?)),
    }
}

/// Return every candidate document for `raw`.
///
/// Fails only when the field path is malformed. An empty candidate list
/// means no document matched.
pub fn resolve_candidates(raw: &str, context_file: &FileRef, index: &FileIndex) -> Result<Candidates> {
    let (file, field_path) = split_bind_target(raw)?;

    let files = match file {
        None => vec![context_file.clone()],
        Some(reference) => {
            if let Some(found) = index.match_path(reference) {
                vec![found.clone()]
            } else if is_explicit_path(reference) {
                Vec::new()
            } else {
                index.match_name(reference).into_iter().cloned().collect()
            }
        }
    };

    Ok(Candidates { files, field_path })
}

/// Resolve `raw` to exactly one target.
///
/// # Errors
///
/// `BindTargetResolution` if no document or more than one document matches.
pub fn resolve(raw: &str, context_file: &FileRef, index: &FileIndex) -> Result<BindTarget> {
    resolve_with_policy(raw, context_file, index, AmbiguityPolicy::Reject)
}

/// Resolve `raw`, applying `policy` when a bare name is ambiguous.
pub fn resolve_with_policy(
    raw: &str,
    context_file: &FileRef,
    index: &FileIndex,
    policy: AmbiguityPolicy,
) -> Result<BindTarget> {
    let Candidates {
        mut files,
        field_path,
    } = resolve_candidates(raw, context_file, index)?;

    match (files.len(), policy) {
        (0, _) => Err(MetabindError::BindTargetResolution {
            target: raw.to_string(),
            message: "no matching document".to_string(),
            candidates: Vec::new(),
        }),
        (1, _) | (_, AmbiguityPolicy::FirstInPathOrder) => {
            if files.len() > 1 {
                tracing::debug!(
                    "Bind target '{}' matches {} documents, taking '{}'",
                    raw,
                    files.len(),
                    files[0]
                );
            }
            Ok(BindTarget {
                file: files.swap_remove(0),
                field_path,
            })
        }
        (n, AmbiguityPolicy::Reject) => Err(MetabindError::BindTargetResolution {
            target: raw.to_string(),
            message: format!("{} documents match", n),
            candidates: files.iter().map(|f| f.to_string()).collect(),
        }),
    }
}
