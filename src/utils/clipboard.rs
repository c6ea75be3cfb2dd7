//! Clipboard access with a legacy fallback.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::utils::dom;
use crate::utils::fetch::js_error_message;

/// Copy `text` to the clipboard.
///
/// Uses the async Clipboard API in secure contexts and falls back to a hidden
/// textarea with `execCommand("copy")` elsewhere.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = dom::window().ok_or("Browser window not available")?;

    if window.is_secure_context() && has_clipboard_api(&window) {
        let clipboard = window.navigator().clipboard();
        return JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| js_error_message(&e));
    }

    copy_with_selection(text)
}

/// `navigator.clipboard` is absent in some embedded browsers.
fn has_clipboard_api(window: &web_sys::Window) -> bool {
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .is_ok_and(|value| !value.is_undefined() && !value.is_null())
}

fn copy_with_selection(text: &str) -> Result<(), String> {
    let document = dom::document().ok_or("Document not available")?;
    let body = document.body().ok_or("Document has no body")?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|e| js_error_message(&e))?
        .unchecked_into();
    textarea.set_value(text);
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("opacity", "0");

    body.append_child(&textarea).map_err(|e| js_error_message(&e))?;
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .map(|doc| doc.exec_command("copy"))
        .unwrap_or(Ok(false));
    textarea.remove();

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err("Copy command was rejected".to_string()),
        Err(e) => Err(js_error_message(&e)),
    }
}
