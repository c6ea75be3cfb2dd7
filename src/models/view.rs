//! View-related state types for the viewer UI.

/// Which main region is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Tree and search visible, content hidden (default)
    #[default]
    Home,
    /// A file is open, tree and search hidden
    Content,
}

/// Presentation of the file tree panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TreeViewType {
    /// Hierarchical tree (default)
    #[default]
    Tree,
    /// Flat list of leaves
    List,
}

impl TreeViewType {
    pub fn toggled(self) -> Self {
        match self {
            Self::Tree => Self::List,
            Self::List => Self::Tree,
        }
    }
}

/// Color theme, persisted in localStorage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored theme value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The file currently shown in the content region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentFile {
    /// Path as listed in the manifest
    pub path: String,
    /// Last path segment
    pub name: String,
    /// Markdown after relative reference rewriting
    pub markdown: String,
}

/// Content region state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContentState {
    /// Nothing loaded yet (welcome message)
    #[default]
    Empty,
    /// Rendered HTML of the current file
    Ready(String),
    /// Load failed; message shown in an inline panel
    Failed(String),
}
