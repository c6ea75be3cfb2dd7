//! Console logging.
//!
//! Thin wrappers over `web_sys::console`. On native targets (unit tests and
//! the `gen-structure` binary's shared code) messages are dropped.

#[cfg(target_arch = "wasm32")]
pub fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_message: &str) {}
