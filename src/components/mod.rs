//! UI components built with Leptos.
//!
//! - [`Shell`] - Page layout and page-wide services
//! - [`router`] - Hash routing and file loading
//! - [`navbar`] - Brand, manifest dropdowns, theme and refresh controls
//! - [`tree_view`] - Expandable tree with inline filter
//! - [`search`] - Debounced search box
//! - [`content`] - Rendered document and code-block toolbars
//! - [`breadcrumb`] - Trail for the open file
//! - [`toast`] - Notifications
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod breadcrumb;
pub mod content;
pub mod icons;
pub mod navbar;
pub mod router;
pub mod search;
pub mod shell;
pub mod toast;
pub mod tree_view;

pub use shell::Shell;
