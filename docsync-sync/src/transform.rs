//! Markdown link rewriting and provenance headers.
//!
//! Rewrites are textual and only touch the target of inline links
//! (`](...)`); no markdown parsing happens here.

use std::sync::LazyLock;

use regex::Regex;

/// `](./X.md)` and `](../X.md)`
static RELATIVE_MD_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(\.{1,2}/([^)]+)\.md\)").unwrap());

/// `](/docs/X)`
static DOCS_ROOTED_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(/docs/([^)]+)\)").unwrap());

/// Output of [`Transformer::transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    /// Header line, blank line, rewritten body.
    pub content: String,
    /// The header line alone, without the trailing newline.
    pub provenance_header: String,
}

/// Rewrites upstream markdown for the site and stamps its origin.
#[derive(Debug, Clone)]
pub struct Transformer {
    browse_url: String,
}

impl Transformer {
    /// `browse_url` is the upstream "blob" URL that source paths are appended to.
    pub fn new(browse_url: impl Into<String>) -> Self {
        let mut browse_url = browse_url.into();
        while browse_url.ends_with('/') {
            browse_url.pop();
        }
        Self { browse_url }
    }

    /// The header line for `source_path` (relative to the upstream repo root).
    pub fn provenance_header(&self, source_path: &str) -> String {
        format!(
            "<!-- Source: {}/{} -->",
            self.browse_url,
            source_path.trim_start_matches('/')
        )
    }

    /// Rewrite links in `raw` and prepend the provenance header.
    ///
    /// Line endings in `raw` are preserved as-is.
    pub fn transform(&self, raw: &str, source_path: &str) -> TransformResult {
        let body = rewrite_links(raw);
        let provenance_header = self.provenance_header(source_path);
        let mut content = String::with_capacity(provenance_header.len() + 2 + body.len());
        content.push_str(&provenance_header);
        content.push_str("\n\n");
        content.push_str(&body);
        TransformResult {
            content,
            provenance_header,
        }
    }
}

/// Apply both link rewrites, relative links first.
pub fn rewrite_links(raw: &str) -> String {
    let relative = RELATIVE_MD_LINK.replace_all(raw, "](/${1})");
    DOCS_ROOTED_LINK.replace_all(&relative, "](${1})").into_owned()
}
