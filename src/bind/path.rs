//! Field paths into front-matter metadata.

use serde::Serialize;
use std::fmt;

use crate::error::{MetabindError, Result};

/// Separator between path segments.
pub const PATH_DELIMITER: char = '.';

/// An ordered sequence of keys (or, for sequences, decimal indices).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Split `raw` on [`PATH_DELIMITER`]. Empty segments are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let segments: Vec<String> = raw
            .split(PATH_DELIMITER)
            .map(|s| s.trim().to_string())
            .collect();
        if segments.iter().any(String::is_empty) {
            return Err(MetabindError::BindTargetResolution {
                target: raw.to_string(),
                message: "field path contains an empty segment".to_string(),
                candidates: Vec::new(),
            });
        }
        Ok(Self(segments))
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(&PATH_DELIMITER.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_dots() {
        let path = FieldPath::parse("meta.author").unwrap();
        assert_eq!(path.segments(), ["meta", "author"]);
        assert_eq!(path.to_string(), "meta.author");
    }

    #[test]
    fn single_segment() {
        let path = FieldPath::parse("done").unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn trims_segments() {
        let path = FieldPath::parse(" meta . tags . 0 ").unwrap();
        assert_eq!(path.segments(), ["meta", "tags", "0"]);
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(FieldPath::parse("").is_err());
        assert!(FieldPath::parse("a..b").is_err());
        assert!(FieldPath::parse("a.").is_err());
    }
}
