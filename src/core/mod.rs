//! Core viewer logic, independent of rendering.
//!
//! This module provides:
//! - [`FileTree`] traversal and [`ExpansionState`]
//! - [`search`] in its two [`SearchMode`]s, plus the [`QueryGate`]
//! - [`StructureRepository`] manifest loading with structural change detection
//! - [`StructureWatcher`] polling
//! - [`load_document`] content preparation
//! - Breadcrumb, navbar and code-block projections used by the components

pub mod breadcrumb;
pub mod code_block;
pub mod document;
pub mod error;
mod hash;
pub mod navbar;
mod repository;
mod search;
mod tree;
mod watch;

#[cfg(test)]
pub(crate) mod fixtures;

pub use document::{Document, load_document};
pub use hash::{ChangeDetector, structure_hash};
pub use repository::{Fetcher, StructureRepository};
pub use search::{QueryGate, SearchMode, search};
pub use tree::{ExpansionState, FileTree, ancestor_paths, parent_path};
pub use watch::{StructureWatcher, WatchHandle};
