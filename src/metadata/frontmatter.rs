//! Reading and writing the YAML front-matter block of a markdown document.

use anyhow::anyhow;
use serde_yaml::Value;

use crate::error::Result;

const FENCE: &str = "---";

/// Split a document into its front matter and body.
///
/// Returns `None` for the metadata when the document has no front-matter
/// block. An empty block yields an empty mapping.
pub fn split(document: &str) -> Result<(Option<Value>, &str)> {
    let Some(after_open) = strip_fence_line(document) else {
        return Ok((None, document));
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let yaml = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            let value = if yaml.trim().is_empty() {
                Value::Mapping(Default::default())
            } else {
                serde_yaml::from_str(yaml).map_err(|e| anyhow!("invalid front matter: {}", e))?
            };
            return Ok((Some(value), body));
        }
        offset += line.len();
    }

    // Unterminated block: treat the whole thing as body.
    Ok((None, document))
}

fn strip_fence_line(document: &str) -> Option<&str> {
    let rest = document.strip_prefix(FENCE)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Rebuild a document from metadata and body.
pub fn render(metadata: &Value, body: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(metadata).map_err(|e| anyhow!("cannot serialize front matter: {}", e))?;
    Ok(format!("{FENCE}\n{yaml}{FENCE}\n{body}"))
}

/// Line number (1-based) on which the body starts.
pub fn body_start_line(document: &str) -> usize {
    match split(document) {
        Ok((Some(_), body)) => {
            let consumed = document.len() - body.len();
            document[..consumed].matches('\n').count() + 1
        }
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "---\ndone: false\ntitle: Test\n---\n# Heading\n\nBody text\n";

    #[test]
    fn splits_front_matter() {
        let (meta, body) = split(DOC).unwrap();
        let meta = meta.unwrap();
        assert_eq!(meta["done"], false);
        assert_eq!(meta["title"], "Test");
        assert_eq!(body, "# Heading\n\nBody text\n");
    }

    #[test]
    fn document_without_front_matter() {
        let (meta, body) = split("# Just a heading\n").unwrap();
        assert!(meta.is_none());
        assert_eq!(body, "# Just a heading\n");
    }

    #[test]
    fn empty_block_is_empty_mapping() {
        let (meta, body) = split("---\n---\nbody").unwrap();
        assert_eq!(meta, Some(Value::Mapping(Default::default())));
        assert_eq!(body, "body");
    }

    #[test]
    fn unterminated_block_is_body() {
        let (meta, body) = split("---\ndone: true\n").unwrap();
        assert!(meta.is_none());
        assert_eq!(body, "---\ndone: true\n");
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(split("---\ndone: [\n---\n").is_err());
    }

    #[test]
    fn render_then_split_keeps_values_and_body() {
        let (meta, body) = split(DOC).unwrap();
        let rebuilt = render(&meta.unwrap(), body).unwrap();
        let (meta2, body2) = split(&rebuilt).unwrap();
        assert_eq!(meta2.unwrap()["title"], "Test");
        assert_eq!(body2, body);
    }

    #[test]
    fn body_start_line_counts_front_matter() {
        assert_eq!(body_start_line(DOC), 5);
        assert_eq!(body_start_line("no front matter"), 1);
    }

    #[test]
    fn handles_crlf() {
        let (meta, body) = split("---\r\ndone: true\r\n---\r\nbody").unwrap();
        assert_eq!(meta.unwrap()["done"], true);
        assert_eq!(body, "body");
    }
}
