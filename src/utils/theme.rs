//! Theme persistence and application to the document.

use wasm_bindgen::JsCast;
use web_sys::HtmlLinkElement;

use crate::config::theme::{HIGHLIGHT_DARK_CSS, HIGHLIGHT_LIGHT_CSS, HIGHLIGHT_LINK_ID, STORAGE_KEY};
use crate::models::Theme;
use crate::utils::dom;

/// Theme saved by a previous visit, if any.
pub fn stored_theme() -> Option<Theme> {
    dom::local_storage()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|value| Theme::parse(&value))
}

pub fn persist_theme(theme: Theme) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Set `data-theme` on `<html>` and swap the highlighter stylesheet.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = dom::root_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }

    let link = dom::document()
        .and_then(|doc| doc.get_element_by_id(HIGHLIGHT_LINK_ID))
        .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok());
    if let Some(link) = link {
        link.set_href(highlight_stylesheet(theme));
    }
}

pub fn highlight_stylesheet(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => HIGHLIGHT_LIGHT_CSS,
        Theme::Dark => HIGHLIGHT_DARK_CSS,
    }
}
