//! Structural hashing of the manifest for change detection.

use sha2::{Digest, Sha256};

use crate::models::FileNode;

/// SHA-256 (hex) over a canonical rendering of the tree.
///
/// Only `name`, `path` and `isDirectory` take part. Children are ordered by
/// `path` before hashing, so reordering siblings in the manifest does not
/// count as a change while renaming, adding or removing any node does.
pub fn structure_hash(root: &FileNode) -> String {
    let mut canonical = String::new();
    write_canonical(root, &mut canonical);
    hex::encode(Sha256::digest(canonical.as_bytes()))
}

fn write_canonical(node: &FileNode, out: &mut String) {
    // Length-prefix strings so no name can forge a separator.
    out.push_str(&format!(
        "{}:{}|{}:{}|{}",
        node.name.len(),
        node.name,
        node.path.len(),
        node.path,
        if node.is_directory { 'd' } else { 'f' }
    ));

    let mut children: Vec<&FileNode> = node.children().iter().collect();
    // Stable sort: equal paths keep manifest order.
    children.sort_by(|a, b| a.path.cmp(&b.path));

    out.push('[');
    for child in children {
        write_canonical(child, out);
        out.push(',');
    }
    out.push(']');
}

// =============================================================================
// Change Detector
// =============================================================================

/// Remembers the last observed structural hash.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeDetector {
    last_hash: Option<String>,
}

impl ChangeDetector {
    /// Record a freshly fetched tree.
    ///
    /// The first observation only seeds the detector and returns `false`.
    /// Afterwards returns `true` exactly when the hash differs from the stored
    /// one, replacing it.
    pub fn observe(&mut self, root: &FileNode) -> bool {
        let hash = structure_hash(root);
        match &self.last_hash {
            None => {
                self.last_hash = Some(hash);
                false
            }
            Some(last) if *last == hash => false,
            Some(_) => {
                self.last_hash = Some(hash);
                true
            }
        }
    }

    pub fn last_hash(&self) -> Option<&str> {
        self.last_hash.as_deref()
    }

    pub fn is_seeded(&self) -> bool {
        self.last_hash.is_some()
    }
}
