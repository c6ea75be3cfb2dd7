//! Optional syntax highlighting via a page-provided `window.hljs`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::utils::log;

/// Highlight every `pre code` under `container`.
///
/// Does nothing when the highlighter script is not loaded.
pub fn highlight_within(container: &Element) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(hljs) = js_sys::Reflect::get(&window, &JsValue::from_str("hljs")) else {
        return;
    };
    if hljs.is_undefined() || hljs.is_null() {
        return;
    }
    let Ok(highlight) = js_sys::Reflect::get(&hljs, &JsValue::from_str("highlightElement"))
        .and_then(|f| f.dyn_into::<js_sys::Function>().map_err(JsValue::from))
    else {
        log::warn("hljs.highlightElement is not callable");
        return;
    };

    let Ok(blocks) = container.query_selector_all("pre code") else {
        return;
    };
    for i in 0..blocks.length() {
        if let Some(block) = blocks.item(i)
            && let Err(e) = highlight.call1(&hljs, &block)
        {
            log::warn(&format!("Highlighting failed: {e:?}"));
        }
    }
}
