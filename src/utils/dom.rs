//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// The `<html>` element.
pub fn root_element() -> Option<Element> {
    document()?.document_element()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(document) = document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Vertical scroll offset of the page.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly scroll the page to the top.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Whether an event target is a text field, where page shortcuts must not fire.
pub fn is_editable(target: Option<EventTarget>) -> bool {
    let Some(element) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    let tag = element.tag_name().to_ascii_uppercase();
    tag == "INPUT"
        || tag == "TEXTAREA"
        || tag == "SELECT"
        || element
            .dyn_ref::<HtmlElement>()
            .is_some_and(|el| el.is_content_editable())
}

/// Whether `target` lies inside the element matching `selector`.
pub fn is_inside(target: Option<EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
