//! Page layout and page-wide services.
//!
//! Hosts the navbar, the home/content regions, toasts, the screen-reader
//! live region, the skip link, the scroll-to-top button and the global
//! keyboard shortcuts.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::content::{CONTENT_ID, ContentView};
use crate::components::icons as ic;
use crate::components::navbar::Navbar;
use crate::components::search::{SEARCH_INPUT_ID, SearchPanel};
use crate::components::toast::Toasts;
use crate::components::tree_view::TreeView;
use crate::config::layout::SCROLL_TOP_THRESHOLD;
use crate::models::ViewMode;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Region holding search and the tree.
pub const HOME_REGION_ID: &str = "home-region";

/// Region holding the open document.
pub const DOCUMENT_REGION_ID: &str = "document-region";

/// Shortcut a key press maps to, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    FocusSearch,
    CloseResults,
    ScrollTop,
}

/// Resolve a key press. `Home` is ignored while typing in a field.
pub fn shortcut_for(key: &str, ctrl_or_meta: bool, in_field: bool) -> Option<Shortcut> {
    match key {
        "k" | "K" if ctrl_or_meta => Some(Shortcut::FocusSearch),
        "Escape" => Some(Shortcut::CloseResults),
        "Home" if !in_field => Some(Shortcut::ScrollTop),
        _ => None,
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let _ = window_event_listener(ev::keydown, move |ev| {
        let in_field = dom::is_editable(ev.target());
        match shortcut_for(&ev.key(), ev.ctrl_key() || ev.meta_key(), in_field) {
            Some(Shortcut::FocusSearch) => {
                ev.prevent_default();
                if ctx.view.get_untracked() != ViewMode::Home {
                    ctx.show_home();
                }
                request_animation_frame(|| {
                    dom::focus_element(&format!("#{SEARCH_INPUT_ID}"));
                });
            }
            Some(Shortcut::CloseResults) => ctx.search.close_results(),
            Some(Shortcut::ScrollTop) => {
                ev.prevent_default();
                dom::scroll_to_top();
            }
            None => {}
        }
    });

    let is_home = move || ctx.view.get() == ViewMode::Home;

    view! {
        <a class=css::skipLink href=format!("#{CONTENT_ID}") on:click=move |ev: ev::MouseEvent| {
            // Plain fragment navigation would be taken as a route
            ev.prevent_default();
            dom::focus_element(&format!("#{CONTENT_ID}"));
        }>
            "Skip to main content"
        </a>

        <Navbar />
        <LoadingIndicator />

        <main class=css::main>
            <div id=HOME_REGION_ID class=css::home hidden=move || !is_home()>
                <SearchPanel />
                <TreeView />
            </div>
            <div id=DOCUMENT_REGION_ID class=css::document hidden=is_home>
                <ContentView />
            </div>
        </main>

        <Toasts />
        <Announcer />
        <ScrollToTop />
    }
}

#[component]
fn LoadingIndicator() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <Show when=move || ctx.is_loading()>
            <div class=css::loading role="progressbar" aria-label="Loading">
                <div class=css::spinner></div>
            </div>
        </Show>
    }
}

/// Polite live region for screen readers.
#[component]
fn Announcer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::srOnly aria-live="polite" aria-atomic="true">
            {move || ctx.announcement.get()}
        </div>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    let _ = window_event_listener(ev::scroll, move |_| {
        let past = dom::scroll_y() > SCROLL_TOP_THRESHOLD;
        if visible.get_untracked() != past {
            visible.set(past);
        }
    });

    view! {
        <Show when=move || visible.get()>
            <button
                class=css::scrollTop
                title="Scroll to top"
                aria-label="Scroll to top"
                on:click=move |_| dom::scroll_to_top()
            >
                <Icon icon=ic::ARROW_UP />
            </button>
        </Show>
    }
}
