//! Name/path search over the manifest tree.
//!
//! Search is a fresh depth-first traversal per query; manifests are small
//! enough that no index is kept.

use crate::models::FileNode;

/// How a blank query is treated.
///
/// The tree filter and the search box disagree on purpose: an empty filter
/// shows everything, an empty search box shows nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Inline tree filter: blank term returns every leaf.
    Filter,
    /// Search box: blank term returns no results.
    SearchBox,
}

/// Find leaves whose name or path contains `term`, ignoring case.
///
/// Directories are always recursed into and never returned. Results keep
/// depth-first manifest order.
pub fn search<'a>(term: &str, root: &'a FileNode, mode: SearchMode) -> Vec<&'a FileNode> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() && mode == SearchMode::SearchBox {
        return Vec::new();
    }

    let mut results = Vec::new();
    collect_matches(&needle, root, &mut results);
    results
}

fn collect_matches<'a>(needle: &str, node: &'a FileNode, results: &mut Vec<&'a FileNode>) {
    for child in node.children() {
        if child.is_directory {
            collect_matches(needle, child, results);
        } else if matches(needle, child) {
            results.push(child);
        }
    }
}

fn matches(needle: &str, node: &FileNode) -> bool {
    needle.is_empty()
        || node.name.to_lowercase().contains(needle)
        || node.path.to_lowercase().contains(needle)
}

// =============================================================================
// Query Gate
// =============================================================================

/// Suppresses re-dispatching the query that was dispatched last.
///
/// The search input has two triggers (debounce timer and Enter key); both go
/// through the gate so the same query never renders twice in a row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryGate {
    last: Option<String>,
}

impl QueryGate {
    /// Returns `true` if `query` differs from the last admitted one and
    /// records it.
    pub fn admit(&mut self, query: &str) -> bool {
        let query = query.trim();
        if self.last.as_deref() == Some(query) {
            return false;
        }
        self.last = Some(query.to_string());
        true
    }

    /// Forget the last query (after clearing the search box).
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::sample_root;

    fn paths(results: &[&FileNode]) -> Vec<String> {
        results.iter().map(|n| n.path.clone()).collect()
    }

    #[test]
    fn test_blank_filter_returns_all_leaves_in_order() {
        let root = sample_root();
        let results = search("", &root, SearchMode::Filter);
        assert_eq!(
            paths(&results),
            vec![
                "src/guides/intro.md",
                "src/guides/deep/dive.md",
                "src/README.md"
            ]
        );
        assert_eq!(search("   ", &root, SearchMode::Filter).len(), 3);
    }

    #[test]
    fn test_blank_search_box_returns_nothing() {
        let root = sample_root();
        assert!(search("", &root, SearchMode::SearchBox).is_empty());
        assert!(search(" \t", &root, SearchMode::SearchBox).is_empty());
    }

    #[test]
    fn test_matching_ignores_case() {
        let root = sample_root();
        for term in ["intro", "INTRO", "InTr", "ntro.M"] {
            let results = search(term, &root, SearchMode::SearchBox);
            assert_eq!(paths(&results), vec!["src/guides/intro.md"], "term {term:?}");
        }
    }

    #[test]
    fn test_path_match_includes_leaves_below_matching_directory() {
        let root = sample_root();
        let results = search("guides", &root, SearchMode::SearchBox);
        assert_eq!(
            paths(&results),
            vec!["src/guides/intro.md", "src/guides/deep/dive.md"]
        );
    }

    #[test]
    fn test_directories_never_returned() {
        let root = sample_root();
        let results = search("empty", &root, SearchMode::Filter);
        assert!(results.is_empty());
    }

    #[test]
    fn test_no_match() {
        let root = sample_root();
        assert!(search("zzz", &root, SearchMode::SearchBox).is_empty());
    }

    #[test]
    fn test_query_gate_suppresses_duplicates() {
        let mut gate = QueryGate::default();
        assert!(gate.admit("rust"));
        assert!(!gate.admit("rust"));
        assert!(!gate.admit(" rust "));
        assert!(gate.admit("rusty"));
        assert!(gate.admit("rust"));
    }

    #[test]
    fn test_query_gate_reset() {
        let mut gate = QueryGate::default();
        assert!(gate.admit("intro"));
        gate.reset();
        assert!(gate.admit("intro"));
    }
}
