use std::collections::HashSet;

use crate::models::FileNode;

/// In-memory manifest tree.
///
/// Holds the root [`FileNode`] and exposes read-only traversal. The only way
/// to change structure is to replace the whole tree.
///
/// # Path Convention
///
/// Paths are the manifest's `path` strings, `/`-separated, e.g.
/// `"src/guides/intro.md"`. Parents are derived by trimming the last segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTree {
    root: FileNode,
}

impl FileTree {
    pub fn new(root: FileNode) -> Self {
        Self { root }
    }

    /// Tree used until the manifest arrives, and when it cannot be loaded.
    pub fn fallback() -> Self {
        Self::new(FileNode::fallback())
    }

    pub fn root(&self) -> &FileNode {
        &self.root
    }

    /// Path prefix shared by every node (the root's own path, e.g. `"src"`).
    pub fn root_path(&self) -> &str {
        &self.root.path
    }

    /// All leaves in depth-first, manifest order.
    pub fn leaves(&self) -> Vec<&FileNode> {
        let mut out = Vec::new();
        collect_leaves(&self.root, &mut out);
        out
    }

    /// Total number of nodes, root included.
    pub fn count(&self) -> usize {
        count_nodes(&self.root)
    }

    /// Find a node by its manifest path.
    pub fn find(&self, path: &str) -> Option<&FileNode> {
        find_node(&self.root, path)
    }

    /// Whether the path names a leaf of this tree.
    pub fn contains_file(&self, path: &str) -> bool {
        self.find(path).is_some_and(FileNode::is_leaf)
    }
}

impl Default for FileTree {
    fn default() -> Self {
        Self::fallback()
    }
}

fn collect_leaves<'a>(node: &'a FileNode, out: &mut Vec<&'a FileNode>) {
    for child in node.children() {
        if child.is_directory {
            collect_leaves(child, out);
        } else {
            out.push(child);
        }
    }
}

fn count_nodes(node: &FileNode) -> usize {
    1 + node.children().iter().map(count_nodes).sum::<usize>()
}

fn find_node<'a>(node: &'a FileNode, path: &str) -> Option<&'a FileNode> {
    if node.path == path {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|child| find_node(child, path))
}

/// Get the parent of a path. Returns empty string for single-segment paths.
pub fn parent_path(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((parent, _)) => parent,
        None => "",
    }
}

/// Every proper ancestor of a path, outermost first.
///
/// `"src/a/b.md"` yields `["src", "src/a"]`.
pub fn ancestor_paths(path: &str) -> Vec<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    (1..segments.len())
        .map(|end| segments[..end].join("/"))
        .collect()
}

// =============================================================================
// Expansion State
// =============================================================================

/// Which directories of the rendered tree are expanded.
///
/// Keyed by directory path; toggling one path never affects another, so a
/// directory's own child container is the only thing that changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Flip a directory, returning its new state.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.to_string());
            true
        }
    }

    /// Expand a directory and all of its ancestors.
    pub fn expand_to(&mut self, path: &str) {
        for ancestor in ancestor_paths(path) {
            self.expanded.insert(ancestor);
        }
        if !path.is_empty() {
            self.expanded.insert(path.to_string());
        }
    }

    /// Collapse everything (used when the tree is replaced).
    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::sample_tree;

    #[test]
    fn test_leaves_depth_first_manifest_order() {
        let tree = sample_tree();
        let paths: Vec<_> = tree.leaves().iter().map(|n| n.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "src/guides/intro.md",
                "src/guides/deep/dive.md",
                "src/README.md"
            ]
        );
    }

    #[test]
    fn test_empty_directory_is_not_a_leaf() {
        let tree = sample_tree();
        let empty = tree.find("src/empty").expect("empty dir should exist");
        assert!(empty.is_directory);
        assert!(empty.children().is_empty());
        assert!(!tree.leaves().iter().any(|n| n.path == "src/empty"));
    }

    #[test]
    fn test_count_and_find() {
        let tree = sample_tree();
        assert_eq!(tree.count(), 7);
        assert_eq!(tree.find("src/guides/deep/dive.md").unwrap().name, "dive.md");
        assert!(tree.find("src/missing.md").is_none());
        assert!(tree.contains_file("src/README.md"));
        assert!(!tree.contains_file("src/guides"));
    }

    #[test]
    fn test_parent_and_ancestor_paths() {
        assert_eq!(parent_path("src/guides/intro.md"), "src/guides");
        assert_eq!(parent_path("intro.md"), "");
        assert_eq!(
            ancestor_paths("src/guides/deep/dive.md"),
            vec!["src", "src/guides", "src/guides/deep"]
        );
        assert!(ancestor_paths("intro.md").is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut state = ExpansionState::default();
        assert!(!state.is_expanded("src/guides"));
        assert!(state.toggle("src/guides"));
        assert!(!state.toggle("src/guides"));
        assert_eq!(state, ExpansionState::default());
    }

    #[test]
    fn test_toggle_affects_only_that_directory() {
        let mut state = ExpansionState::default();
        state.toggle("src/guides/deep");
        state.toggle("src/guides");
        state.toggle("src/guides");
        assert!(state.is_expanded("src/guides/deep"));
        assert!(!state.is_expanded("src/guides"));
    }

    #[test]
    fn test_expand_to_opens_ancestors() {
        let mut state = ExpansionState::default();
        state.expand_to("src/guides/deep");
        assert!(state.is_expanded("src"));
        assert!(state.is_expanded("src/guides"));
        assert!(state.is_expanded("src/guides/deep"));
        state.clear();
        assert!(state.is_empty());
    }
}
