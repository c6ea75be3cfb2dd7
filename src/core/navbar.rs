//! Navbar projection of the manifest.
//!
//! The navbar shows only two levels: top-level files become links and
//! top-level directories become dropdowns. Anything deeper cannot be shown.

use crate::core::error::ViewerError;
use crate::models::FileNode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link { name: String, path: String },
    Menu { name: String, entries: Vec<MenuEntry> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    File { name: String, path: String },
    /// A directory nested inside a dropdown.
    Unsupported { name: String },
}

impl MenuEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Unsupported { name } => name,
        }
    }

    /// Path to load when the entry is activated.
    pub fn target(&self) -> Result<&str, ViewerError> {
        match self {
            Self::File { path, .. } => Ok(path),
            Self::Unsupported { name } => Err(ViewerError::Unsupported(format!(
                "Nested folder \"{name}\" cannot be opened from the navigation bar"
            ))),
        }
    }
}

/// Project the root's children into navbar items, in manifest order.
pub fn nav_items(root: &FileNode) -> Vec<NavItem> {
    root.children()
        .iter()
        .map(|node| {
            if node.is_directory {
                NavItem::Menu {
                    name: node.name.clone(),
                    entries: node.children().iter().map(menu_entry).collect(),
                }
            } else {
                NavItem::Link {
                    name: node.name.clone(),
                    path: node.path.clone(),
                }
            }
        })
        .collect()
}

fn menu_entry(node: &FileNode) -> MenuEntry {
    if node.is_directory {
        MenuEntry::Unsupported {
            name: node.name.clone(),
        }
    } else {
        MenuEntry::File {
            name: node.name.clone(),
            path: node.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::sample_root;

    #[test]
    fn test_top_level_projection() {
        let items = nav_items(&sample_root());
        assert_eq!(items.len(), 3);
        assert!(matches!(&items[0], NavItem::Menu { name, .. } if name == "guides"));
        assert!(matches!(&items[1], NavItem::Menu { entries, .. } if entries.is_empty()));
        assert_eq!(
            items[2],
            NavItem::Link {
                name: "README.md".to_string(),
                path: "src/README.md".to_string()
            }
        );
    }

    #[test]
    fn test_nested_directory_is_flagged_not_dropped() {
        let items = nav_items(&sample_root());
        let NavItem::Menu { entries, .. } = &items[0] else {
            panic!("guides should be a menu");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].target().unwrap(), "src/guides/intro.md");
        assert_eq!(entries[1].name(), "deep");

        let err = entries[1].target().unwrap_err();
        assert!(matches!(err, ViewerError::Unsupported(_)));
        assert!(err.to_string().contains("deep"));
    }

    #[test]
    fn test_fallback_projects_to_single_link() {
        let items = nav_items(&FileNode::fallback());
        assert_eq!(
            items,
            vec![NavItem::Link {
                name: "Welcome".to_string(),
                path: "#".to_string()
            }]
        );
    }
}
