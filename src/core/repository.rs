//! Manifest loading and change polling.

use std::cell::{Cell, RefCell};

use crate::config::STRUCTURE_URL;
use crate::core::error::{FetchError, ViewerError};
use crate::core::hash::ChangeDetector;
use crate::models::FileNode;
use crate::utils::log;

/// Source of text resources.
///
/// The browser implementation is [`crate::utils::fetch::HttpFetcher`]; tests
/// substitute an in-memory one.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// GET `url` and return the body. Non-success statuses are errors.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Loads `structure.json` and detects structural changes between polls.
pub struct StructureRepository<F> {
    fetcher: F,
    url: String,
    detector: RefCell<ChangeDetector>,
    last_cache_bust: Cell<u64>,
}

impl<F: Fetcher> StructureRepository<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_url(fetcher, STRUCTURE_URL)
    }

    pub fn with_url(fetcher: F, url: &str) -> Self {
        Self {
            fetcher,
            url: url.to_string(),
            detector: RefCell::new(ChangeDetector::default()),
            last_cache_bust: Cell::new(0),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch and parse the manifest.
    ///
    /// Never fails: any network or parse error is logged and the fallback
    /// structure is returned instead.
    pub async fn fetch_structure(&self) -> FileNode {
        match self.load(&self.url).await {
            Ok(root) => root,
            Err(e) => {
                log::warn(&format!("Using fallback structure: {e}"));
                FileNode::fallback()
            }
        }
    }

    /// Re-fetch the manifest bypassing caches and compare structure.
    ///
    /// The first successful call only seeds the stored hash. Later calls
    /// invoke `on_change` with the new tree and return `true` exactly when
    /// the structure differs from the last one seen. A failed fetch is
    /// logged, returns `false` and leaves the stored hash alone.
    pub async fn check_for_changes(&self, on_change: impl FnOnce(FileNode)) -> bool {
        match self.try_check_for_changes(on_change).await {
            Ok(changed) => changed,
            Err(e) => {
                log::warn(&format!("Structure check failed: {e}"));
                false
            }
        }
    }

    /// Same as [`Self::check_for_changes`], but a failed fetch or parse is
    /// returned instead of being folded into "unchanged".
    pub async fn try_check_for_changes(
        &self,
        on_change: impl FnOnce(FileNode),
    ) -> Result<bool, ViewerError> {
        let url = format!("{}?{}", self.url, self.next_cache_bust(now_ms()));
        let root = self.load(&url).await?;

        let changed = self.detector.borrow_mut().observe(&root);
        if changed {
            log::info("File structure changed");
            on_change(root);
        }
        Ok(changed)
    }

    pub fn is_seeded(&self) -> bool {
        self.detector.borrow().is_seeded()
    }

    async fn load(&self, url: &str) -> Result<FileNode, ViewerError> {
        let text = self
            .fetcher
            .fetch_text(url)
            .await
            .map_err(|e| ViewerError::network(url, e))?;
        serde_json::from_str(&text).map_err(|e| ViewerError::Parse(e.to_string()))
    }

    /// Strictly increasing query value for cache busting.
    fn next_cache_bust(&self, now: u64) -> u64 {
        let next = now.max(self.last_cache_bust.get() + 1);
        self.last_cache_bust.set(next);
        next
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{MockFetcher, sample_root};

    fn manifest_json(root: &FileNode) -> String {
        serde_json::to_string(root).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_structure_parses_manifest() {
        let fetcher = MockFetcher::default().with("structure.json", &manifest_json(&sample_root()));
        let repo = StructureRepository::new(fetcher);
        assert_eq!(repo.fetch_structure().await, sample_root());
    }

    #[tokio::test]
    async fn test_fetch_structure_falls_back_on_http_error() {
        let repo = StructureRepository::new(MockFetcher::default());
        assert_eq!(repo.fetch_structure().await, FileNode::fallback());
    }

    #[tokio::test]
    async fn test_fetch_structure_falls_back_on_bad_json() {
        let fetcher = MockFetcher::default().with("structure.json", "{ not json");
        let repo = StructureRepository::new(fetcher);
        assert_eq!(repo.fetch_structure().await, FileNode::fallback());
    }

    #[tokio::test]
    async fn test_first_check_seeds_without_notifying() {
        let fetcher = MockFetcher::default().with_prefix("structure.json?", &manifest_json(&sample_root()));
        let repo = StructureRepository::new(fetcher);

        let mut notified = false;
        assert!(!repo.check_for_changes(|_| notified = true).await);
        assert!(!notified);
        assert!(repo.is_seeded());

        assert!(!repo.check_for_changes(|_| notified = true).await);
        assert!(!notified);
    }

    #[tokio::test]
    async fn test_check_reports_structural_change_once() {
        let fetcher = MockFetcher::default().with_prefix("structure.json?", &manifest_json(&sample_root()));
        let repo = StructureRepository::new(fetcher);
        assert!(!repo.check_for_changes(|_| {}).await);

        let mut edited = sample_root();
        edited
            .children
            .as_mut()
            .unwrap()
            .push(FileNode::file("new.md", "src/new.md"));
        repo.fetcher()
            .set_prefix("structure.json?", &manifest_json(&edited));

        let mut received = None;
        assert!(repo.check_for_changes(|root| received = Some(root)).await);
        assert_eq!(received, Some(edited));
        assert!(!repo.check_for_changes(|_| panic!("no second notification")).await);
    }

    #[tokio::test]
    async fn test_failed_check_keeps_stored_hash() {
        let fetcher = MockFetcher::default().with_prefix("structure.json?", &manifest_json(&sample_root()));
        let repo = StructureRepository::new(fetcher);
        assert!(!repo.check_for_changes(|_| {}).await);

        repo.fetcher().clear();
        assert!(!repo.check_for_changes(|_| {}).await);
        assert!(repo.is_seeded());

        repo.fetcher()
            .set_prefix("structure.json?", &manifest_json(&sample_root()));
        assert!(!repo.check_for_changes(|_| panic!("unchanged")).await);
    }

    #[tokio::test]
    async fn test_try_check_separates_failure_from_unchanged() {
        let fetcher = MockFetcher::default().with_prefix("structure.json?", &manifest_json(&sample_root()));
        let repo = StructureRepository::new(fetcher);
        assert!(matches!(repo.try_check_for_changes(|_| {}).await, Ok(false)));

        repo.fetcher().clear();
        let err = repo.try_check_for_changes(|_| {}).await.unwrap_err();
        assert!(matches!(err, ViewerError::Network { .. }));

        repo.fetcher().set_prefix("structure.json?", "{ not json");
        let err = repo.try_check_for_changes(|_| {}).await.unwrap_err();
        assert!(matches!(err, ViewerError::Parse(_)));
        assert!(repo.is_seeded());
    }

    #[tokio::test]
    async fn test_cache_bust_strictly_increases() {
        let fetcher = MockFetcher::default().with_prefix("structure.json?", &manifest_json(&sample_root()));
        let repo = StructureRepository::new(fetcher);
        repo.check_for_changes(|_| {}).await;
        repo.check_for_changes(|_| {}).await;
        repo.check_for_changes(|_| {}).await;

        let busts: Vec<u64> = repo
            .fetcher()
            .requests()
            .iter()
            .map(|url| url.split_once('?').unwrap().1.parse().unwrap())
            .collect();
        assert_eq!(busts.len(), 3);
        assert!(busts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_next_cache_bust_with_stalled_clock() {
        let repo = StructureRepository::new(MockFetcher::default());
        assert_eq!(repo.next_cache_bust(100), 100);
        assert_eq!(repo.next_cache_bust(100), 101);
        assert_eq!(repo.next_cache_bust(50), 102);
        assert_eq!(repo.next_cache_bust(500), 500);
    }
}
