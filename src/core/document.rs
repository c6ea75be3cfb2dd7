//! Fetching and preparing a content file for display.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::error::ViewerError;
use crate::core::repository::Fetcher;
use crate::utils::markdown::markdown_to_html;

/// Markdown image or link: `![alt](target "title")` / `[text](target)`.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<head>!?\[[^\]]*\]\()(?P<target>[^)\s]+)(?P<tail>[^)]*\))"#)
        .expect("link regex is valid")
});

/// `scheme:` prefix per RFC 3986.
static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:")
        .expect("scheme regex is valid")
});

/// A loaded content file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub path: String,
    pub name: String,
    /// Markdown after relative references were rewritten
    pub markdown: String,
    pub html: String,
}

/// Fetch `path`, rewrite its relative references and render it.
pub async fn load_document<F: Fetcher>(fetcher: &F, path: &str) -> Result<Document, ViewerError> {
    let raw = fetcher
        .fetch_text(path)
        .await
        .map_err(|e| ViewerError::network(path, e))?;

    let markdown = rewrite_relative_links(&raw, base_dir(path));
    let html = markdown_to_html(&markdown);

    Ok(Document {
        path: path.to_string(),
        name: display_name(path).to_string(),
        markdown,
        html,
    })
}

/// Directory part of a path, including the trailing `/`.
///
/// `"src/guides/intro.md"` gives `"src/guides/"`; a bare name gives `""`.
pub fn base_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "",
    }
}

/// Last path segment, used as the file's display name.
pub fn display_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether a reference target is relative to the containing file.
pub fn is_relative_target(target: &str) -> bool {
    !(target.is_empty()
        || target.starts_with("http")
        || target.starts_with('/')
        || target.starts_with('#')
        || SCHEME_RE.is_match(target))
}

/// Prefix every relative image and link target with `base`.
pub fn rewrite_relative_links(markdown: &str, base: &str) -> String {
    if base.is_empty() {
        return markdown.to_string();
    }

    LINK_RE
        .replace_all(markdown, |caps: &Captures| {
            let target = &caps["target"];
            if is_relative_target(target) {
                format!("{}{base}{target}{}", &caps["head"], &caps["tail"])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Viewer path for an in-content link, if it points at another markdown file.
///
/// Expects the `href` as rendered, i.e. already rewritten against the file's
/// directory. Query and fragment are dropped.
pub fn internal_link_target(href: &str) -> Option<String> {
    if !is_relative_target(href) {
        return None;
    }
    let path = href.split(['#', '?']).next().unwrap_or_default();
    let is_markdown = path
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("md"));
    is_markdown.then(|| normalize_path(path))
}

/// Resolve `.` and `..` segments.
fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FetchError;
    use crate::core::fixtures::MockFetcher;

    #[test]
    fn test_base_dir_and_display_name() {
        assert_eq!(base_dir("src/guides/intro.md"), "src/guides/");
        assert_eq!(base_dir("intro.md"), "");
        assert_eq!(display_name("src/guides/intro.md"), "intro.md");
        assert_eq!(display_name("intro.md"), "intro.md");
    }

    #[test]
    fn test_rewrites_relative_image() {
        let out = rewrite_relative_links("![d](img/x.png)", "src/a/");
        assert_eq!(out, "![d](src/a/img/x.png)");
    }

    #[test]
    fn test_rewrites_relative_link_with_title() {
        let out = rewrite_relative_links(r#"see [next](next.md "Next page")"#, "src/a/");
        assert_eq!(out, r#"see [next](src/a/next.md "Next page")"#);
    }

    #[test]
    fn test_leaves_absolute_targets_untouched() {
        let input = "![a](https://x/y.png) ![b](/abs.png) [c](#top) [d](mailto:a@b.c) [e](http://h)";
        assert_eq!(rewrite_relative_links(input, "src/a/"), input);
    }

    #[test]
    fn test_no_base_means_no_rewrite() {
        assert_eq!(rewrite_relative_links("![d](x.png)", ""), "![d](x.png)");
    }

    #[test]
    fn test_internal_link_target() {
        assert_eq!(
            internal_link_target("src/a/next.md#section"),
            Some("src/a/next.md".to_string())
        );
        assert_eq!(
            internal_link_target("src/a/../b/other.MD"),
            Some("src/b/other.MD".to_string())
        );
        assert_eq!(internal_link_target("src/a/img.png"), None);
        assert_eq!(internal_link_target("https://x/y.md"), None);
        assert_eq!(internal_link_target("#top"), None);
    }

    #[tokio::test]
    async fn test_load_document_rewrites_and_renders() {
        let fetcher = MockFetcher::default().with("src/a/doc.md", "# Title\n\n![d](img/x.png)\n");
        let doc = load_document(&fetcher, "src/a/doc.md").await.unwrap();

        assert_eq!(doc.name, "doc.md");
        assert!(doc.markdown.contains("![d](src/a/img/x.png)"));
        assert!(doc.html.contains("<h1>Title</h1>"));
        assert!(doc.html.contains(r#"src="src/a/img/x.png""#));
    }

    #[tokio::test]
    async fn test_load_document_reports_network_failure() {
        let err = load_document(&MockFetcher::default(), "src/missing.md")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ViewerError::network("src/missing.md", FetchError::HttpError(404))
        );
    }
}
