//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileNode`], [`FileType`] - Manifest tree representation
//! - [`Route`] - Hash-based navigation
//! - [`ViewMode`], [`TreeViewType`], [`Theme`] - View management
//! - [`CurrentFile`], [`ContentState`] - Loaded content
//! - [`Toast`], [`ToastKind`] - Notifications

mod node;
mod route;
mod toast;
mod view;

pub use node::{FileNode, FileType};
pub use route::Route;
pub use toast::{Toast, ToastKind};
pub use view::{ContentState, CurrentFile, Theme, TreeViewType, ViewMode};
