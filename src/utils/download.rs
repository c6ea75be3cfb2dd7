//! Blob-backed downloads and raw views.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::utils::dom;
use crate::utils::fetch::js_error_message;

fn blob_url(content: &str, mime: &str) -> Result<String, String> {
    let parts = js_sys::Array::of1(&content.into());
    let props = BlobPropertyBag::new();
    props.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)
        .map_err(|e| js_error_message(&e))?;
    Url::create_object_url_with_blob(&blob).map_err(|e| js_error_message(&e))
}

/// Save `content` as a file named `filename`.
pub fn download_text(filename: &str, content: &str) -> Result<(), String> {
    let document = dom::document().ok_or("Document not available")?;
    let body = document.body().ok_or("Document has no body")?;
    let url = blob_url(content, "text/plain;charset=utf-8")?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error_message(&e))?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);

    let appended = body.append_child(&anchor).map_err(|e| js_error_message(&e));
    if appended.is_ok() {
        anchor.click();
        anchor.remove();
    }
    let _ = Url::revoke_object_url(&url);
    appended.map(|_| ())
}

/// Open `content` in a new tab, as HTML or as plain text.
///
/// The object URL is kept alive; the new tab may load it after this returns.
pub fn open_in_new_window(content: &str, mime: &str) -> Result<(), String> {
    let window = dom::window().ok_or("Browser window not available")?;
    let url = blob_url(content, mime)?;
    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("Popup was blocked".to_string()),
        Err(e) => Err(js_error_message(&e)),
    }
}
