//! Locating declarations inside a markdown document.
//!
//! Two embeddings are recognized and both yield the raw declaration text:
//!
//! - inline code spans: `` `INPUT[toggle:done]` ``
//! - fenced code blocks with the `meta-bind` info string
//!
//! Front matter is skipped. Other fenced blocks are skipped whole.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::metadata::frontmatter;

/// Info string marking a fenced block as a declaration.
pub const CODE_BLOCK_LANGUAGE: &str = "meta-bind";

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span regex must compile"));

/// How a declaration was embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteKind {
    Inline,
    CodeBlock,
}

/// A declaration candidate found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationSite {
    pub text: String,
    pub kind: SiteKind,
    /// 1-based line of the declaration text.
    pub line: usize,
}

fn is_candidate(text: &str) -> bool {
    text.starts_with("INPUT[") && text.ends_with(']')
}

struct Fence {
    marker: &'static str,
    is_declaration: bool,
    start_line: usize,
    content: String,
}

/// Find every declaration candidate in `document`, in document order.
pub fn scan_document(document: &str) -> Vec<DeclarationSite> {
    let first_line = frontmatter::body_start_line(document);
    let mut sites = Vec::new();
    let mut fence: Option<Fence> = None;

    for (offset, line) in document.lines().skip(first_line - 1).enumerate() {
        let number = first_line + offset;
        let trimmed = line.trim_start();

        if let Some(open) = &mut fence {
            if trimmed.starts_with(open.marker) && trimmed.trim_end() == open.marker {
                let content = open.content.trim();
                if open.is_declaration && is_candidate(content) {
                    sites.push(DeclarationSite {
                        text: content.to_string(),
                        kind: SiteKind::CodeBlock,
                        line: open.start_line,
                    });
                }
                fence = None;
            } else if open.is_declaration {
                open.content.push_str(line);
                open.content.push('\n');
            }
            continue;
        }

        if let Some(marker) = ["```", "~~~"].into_iter().find(|m| trimmed.starts_with(m)) {
            let info = &trimmed[marker.len()..];
            fence = Some(Fence {
                marker,
                is_declaration: info.trim() == CODE_BLOCK_LANGUAGE,
                start_line: number + 1,
                content: String::new(),
            });
            continue;
        }

        for caps in CODE_SPAN.captures_iter(line) {
            let text = caps[1].trim();
            if is_candidate(text) {
                sites.push(DeclarationSite {
                    text: text.to_string(),
                    kind: SiteKind::Inline,
                    line: number,
                });
            }
        }
    }

    if let Some(open) = fence {
        tracing::debug!("unterminated code block starting on line {}", open.start_line - 1);
    }
    sites
}
