//! Shared manifest fixtures for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::FileTree;
use crate::core::error::FetchError;
use crate::core::repository::Fetcher;
use crate::models::FileNode;

/// ```text
/// src/
///   guides/
///     intro.md
///     deep/
///       dive.md
///   empty/
///   README.md
/// ```
pub fn sample_tree() -> FileTree {
    FileTree::new(sample_root())
}

pub fn sample_root() -> FileNode {
    FileNode::directory(
        "src",
        "src",
        vec![
            FileNode::directory(
                "guides",
                "src/guides",
                vec![
                    FileNode::file("intro.md", "src/guides/intro.md"),
                    FileNode::directory(
                        "deep",
                        "src/guides/deep",
                        vec![FileNode::file("dive.md", "src/guides/deep/dive.md")],
                    ),
                ],
            ),
            FileNode::directory("empty", "src/empty", vec![]),
            FileNode::file("README.md", "src/README.md"),
        ],
    )
}

/// In-memory [`Fetcher`] keyed by URL.
///
/// Exact keys win over prefix keys. Unknown URLs answer 404. Every requested
/// URL is recorded.
#[derive(Default)]
pub struct MockFetcher {
    exact: RefCell<HashMap<String, String>>,
    prefixed: RefCell<Vec<(String, String)>>,
    requests: RefCell<Vec<String>>,
}

impl MockFetcher {
    pub fn with(self, url: &str, body: &str) -> Self {
        self.exact
            .borrow_mut()
            .insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_prefix(self, prefix: &str, body: &str) -> Self {
        self.set_prefix(prefix, body);
        self
    }

    pub fn set_prefix(&self, prefix: &str, body: &str) {
        let mut prefixed = self.prefixed.borrow_mut();
        prefixed.retain(|(p, _)| p != prefix);
        prefixed.push((prefix.to_string(), body.to_string()));
    }

    /// Make every URL answer 404 from now on.
    pub fn clear(&self) {
        self.exact.borrow_mut().clear();
        self.prefixed.borrow_mut().clear();
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        if let Some(body) = self.exact.borrow().get(url) {
            return Ok(body.clone());
        }
        self.prefixed
            .borrow()
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, body)| body.clone())
            .ok_or(FetchError::HttpError(404))
    }
}
