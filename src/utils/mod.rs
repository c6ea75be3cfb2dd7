//! Browser-facing helpers.
//!
//! Provides:
//! - [`fetch::HttpFetcher`] - Fetch API with timeout
//! - [`markdown_to_html`] - Markdown rendering
//! - [`dom`], [`clipboard`], [`download`], [`highlight`], [`theme`] - DOM services
//! - [`log`] - Console logging

pub mod clipboard;
pub mod dom;
pub mod download;
pub mod fetch;
pub mod highlight;
pub mod log;
pub mod markdown;
pub mod theme;

pub use fetch::{HttpFetcher, race_with_timeout};
pub use markdown::markdown_to_html;
