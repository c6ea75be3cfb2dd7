//! Breadcrumb trail for the loaded file.

/// One breadcrumb entry after the fixed "Home" crumb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Directory to reveal when activated. `None` marks the current page.
    pub target: Option<String>,
}

impl Crumb {
    pub fn is_current(&self) -> bool {
        self.target.is_none()
    }
}

/// Crumbs for `path`, with the manifest root's own prefix removed.
///
/// Every segment but the last links to its directory (full manifest path);
/// the last is the current page. No file loaded means an empty trail.
pub fn trail(path: Option<&str>, root_path: &str) -> Vec<Crumb> {
    let Some(path) = path else {
        return Vec::new();
    };

    let (prefix, relative) = match path.strip_prefix(root_path) {
        Some(rest) if !root_path.is_empty() && rest.starts_with('/') => (root_path, &rest[1..]),
        _ => ("", path),
    };

    let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
    let last = segments.len().saturating_sub(1);

    let mut dir = prefix.to_string();
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if !dir.is_empty() {
                dir.push('/');
            }
            dir.push_str(segment);
            Crumb {
                label: (*segment).to_string(),
                target: (i < last).then(|| dir.clone()),
            }
        })
        .collect()
}
