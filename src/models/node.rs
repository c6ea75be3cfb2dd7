use serde::{Deserialize, Serialize};

// =============================================================================
// Manifest Node
// =============================================================================

/// One entry of `structure.json`: a file or a directory.
///
/// The manifest is a single rooted tree. Nodes carry no parent pointer;
/// moving upward is done on the `path` string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    /// Display label
    pub name: String,
    /// Resource path used for fetching and navigation
    #[serde(default)]
    pub path: String,
    /// Directory or file tag
    #[serde(default)]
    pub is_directory: bool,
    /// Children in manifest order (directories only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileNode>>,
}

impl FileNode {
    /// Create a file (leaf) node.
    pub fn file(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            is_directory: false,
            children: None,
        }
    }

    /// Create a directory node.
    pub fn directory(name: &str, path: &str, children: Vec<FileNode>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            is_directory: true,
            children: Some(children),
        }
    }

    /// Structure used when the manifest cannot be fetched or parsed.
    pub fn fallback() -> Self {
        Self {
            name: "root".to_string(),
            path: String::new(),
            is_directory: true,
            children: Some(vec![Self::file("Welcome", "#")]),
        }
    }

    /// Children of a directory. Files and childless directories yield an empty slice.
    pub fn children(&self) -> &[FileNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_directory
    }
}

// =============================================================================
// File Type
// =============================================================================

/// Coarse content type, used for icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    Markdown,
    Text,
    Html,
    Json,
    Unknown,
}

impl FileType {
    /// Detect file type from path extension
    pub fn from_path(path: &str) -> Self {
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "md" | "markdown" => Self::Markdown,
            "txt" => Self::Text,
            "html" | "htm" => Self::Html,
            "json" => Self::Json,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_manifest() {
        let json = r#"{
            "name": "src",
            "path": "src",
            "isDirectory": true,
            "children": [
                { "name": "a.md", "path": "src/a.md", "isDirectory": false },
                { "name": "empty", "path": "src/empty", "isDirectory": true, "children": [] }
            ]
        }"#;
        let root: FileNode = serde_json::from_str(json).unwrap();

        assert!(root.is_directory);
        assert_eq!(root.children().len(), 2);
        assert!(root.children()[0].is_leaf());
        assert!(root.children()[1].is_directory);
        assert!(root.children()[1].children().is_empty());
    }

    #[test]
    fn test_directory_without_children_field() {
        let root: FileNode =
            serde_json::from_str(r#"{ "name": "d", "isDirectory": true }"#).unwrap();
        assert!(root.is_directory);
        assert!(root.children().is_empty());
        assert_eq!(root.path, "");
    }

    #[test]
    fn test_fallback_shape() {
        let fallback = FileNode::fallback();
        assert_eq!(fallback.name, "root");
        assert!(fallback.is_directory);
        assert_eq!(fallback.children(), &[FileNode::file("Welcome", "#")]);
    }

    #[test]
    fn test_file_type_detection() {
        assert_eq!(FileType::from_path("src/guide.md"), FileType::Markdown);
        assert_eq!(FileType::from_path("src/NOTES.TXT"), FileType::Text);
        assert_eq!(FileType::from_path("src/page.html"), FileType::Html);
        assert_eq!(FileType::from_path("src/data.json"), FileType::Json);
        assert_eq!(FileType::from_path("src/Makefile"), FileType::Unknown);
    }
}
