//! Hash-based routing so the viewer works from any static file server.

/// Application routes for hash-based navigation.
/// URL format: `#/path/to/file.md` (e.g., `#/src/guides/intro.md`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Home view: `#/` or empty hash
    Home,
    /// Reading content: `#/path/to/file.md`
    Read {
        /// Manifest path of the file
        path: String,
    },
}

impl Route {
    /// Parse URL hash into Route
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');

        if path.is_empty() {
            return Self::Home;
        }

        Self::Read {
            path: decode_hash_path(path),
        }
    }

    /// Route for activating a manifest leaf.
    ///
    /// The fallback manifest uses `#` as a placeholder path, which maps home.
    pub fn for_path(path: &str) -> Self {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "#" {
            Self::Home
        } else {
            Self::Read {
                path: trimmed.to_string(),
            }
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Read { path } => format!("#/{}", encode_hash_path(path)),
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Update the URL hash (adds to browser history and fires `hashchange`).
    pub fn push(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }
}

/// Spaces are the only character manifest paths commonly carry that
/// browsers rewrite inside a hash.
fn encode_hash_path(path: &str) -> String {
    path.replace(' ', "%20")
}

fn decode_hash_path(path: &str) -> String {
    path.replace("%20", " ")
}
