//! Static documentation viewer.
//!
//! Loads a `structure.json` manifest, renders it as a navigable tree and
//! navbar, and shows markdown files client-side. The `gen-structure` binary
//! produces the manifest from a content directory.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
#[cfg(not(target_arch = "wasm32"))]
pub mod scan;
pub mod utils;

pub use app::App;
