//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand label shown in the navbar.
pub const APP_NAME: &str = "docshelf";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Network Configuration
// =============================================================================

/// Manifest location, relative to the page.
pub const STRUCTURE_URL: &str = "structure.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Structure Watching
// =============================================================================

/// Poll interval for manifest change detection.
pub const POLL_INTERVAL_MS: u32 = 30_000;

/// Start watching as soon as the first manifest is loaded.
pub const AUTO_WATCH: bool = true;

// =============================================================================
// UI Timing
// =============================================================================

/// Timing constants (milliseconds).
pub mod timing {
    /// Delay between the last keystroke and search dispatch.
    pub const SEARCH_DEBOUNCE_MS: u32 = 300;
    /// Toast lifetime.
    pub const TOAST_DURATION_MS: u32 = 5000;
    /// How long the copy button shows its success state.
    pub const COPY_FEEDBACK_MS: u32 = 2000;
    /// Screen-reader announcements are cleared after this.
    pub const ANNOUNCE_CLEAR_MS: u32 = 1000;
}

// =============================================================================
// Layout
// =============================================================================

/// Layout constants.
pub mod layout {
    /// `max-height` of a collapsed code block.
    pub const COLLAPSED_CODE_HEIGHT: &str = "120px";
    /// Scroll offset (px) after which the scroll-to-top button appears.
    pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
}

// =============================================================================
// Theme Configuration
// =============================================================================

/// Theme persistence and highlighter stylesheets.
pub mod theme {
    /// localStorage key for the theme preference.
    pub const STORAGE_KEY: &str = "theme";
    /// `<link>` element whose href is swapped with the theme.
    pub const HIGHLIGHT_LINK_ID: &str = "highlight-theme";
    pub const HIGHLIGHT_LIGHT_CSS: &str =
        "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.7.0/styles/github.min.css";
    pub const HIGHLIGHT_DARK_CSS: &str =
        "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.7.0/styles/github-dark.min.css";
}

// =============================================================================
// Error Reporting
// =============================================================================

/// Substrings of global errors that are logged but not toasted.
///
/// These come from browser extensions and third-party scripts.
pub const IGNORED_ERROR_PATTERNS: &[&str] = &[
    "Script error",
    "ResizeObserver loop",
    "extension://",
    "Non-Error promise rejection",
    "message channel closed",
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
