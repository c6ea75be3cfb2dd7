//! Hash routing and file loading.
//!
//! Uses native hashchange events instead of leptos_router so the viewer works
//! from any static file server.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: `#/` is home, `#/<path>` a file
//! - **Every activation goes through [`navigate`]**: it pushes the hash, and
//!   the hashchange listener applies it. Re-activating the current route
//!   applies it directly since the hash does not change.
//! - **Back/forward** fire hashchange and re-apply the route.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ErrorEvent, PromiseRejectionEvent};

use crate::app::{AppContext, is_ignored_error};
use crate::core::document::display_name;
use crate::core::load_document;
use crate::models::{ContentState, CurrentFile, Route, ToastKind, ViewMode};
use crate::utils::fetch::js_error_message;
use crate::utils::{HttpFetcher, dom, log};

pub fn current_route() -> Route {
    Route::current()
}

/// Go to `route`, recording it in browser history.
pub fn navigate(ctx: AppContext, route: Route) {
    if route == current_route() {
        apply_route(ctx, route);
    } else {
        route.push();
    }
}

/// Open a manifest leaf. The fallback `#` placeholder leads home.
pub fn open_path(ctx: AppContext, path: &str) {
    navigate(ctx, Route::for_path(path));
}

pub fn go_home(ctx: AppContext) {
    navigate(ctx, Route::Home);
}

/// Make the UI reflect `route`.
pub fn apply_route(ctx: AppContext, route: Route) {
    match route {
        Route::Home => ctx.show_home(),
        Route::Read { path } => load_file(ctx, path),
    }
}

/// Fetch, render and show a content file.
///
/// Loading is flagged for the whole operation. A failed fetch replaces the
/// content with an inline error panel and raises an error toast.
pub fn load_file(ctx: AppContext, path: String) {
    spawn_local(async move {
        let _guard = ctx.begin_loading();

        match load_document(&HttpFetcher, &path).await {
            Ok(doc) => {
                ctx.content.set(ContentState::Ready(doc.html));
                ctx.current_file.set(Some(CurrentFile {
                    path: doc.path,
                    name: doc.name.clone(),
                    markdown: doc.markdown,
                }));
                ctx.view.set(ViewMode::Content);
                dom::scroll_to_top();
                ctx.announce(&format!("Loaded {}", doc.name));
            }
            Err(e) => {
                log::error(&e.to_string());
                let name = display_name(&path).to_string();
                ctx.content.set(ContentState::Failed(e.to_string()));
                ctx.current_file.set(Some(CurrentFile {
                    path: path.clone(),
                    name: name.clone(),
                    markdown: String::new(),
                }));
                ctx.view.set(ViewMode::Content);
                ctx.toast(ToastKind::Error, &format!("Failed to load {name}"));
            }
        }
    });
}

// ============================================================================
// Global Listeners
// ============================================================================

/// Re-apply the route on every hash change (links, back, forward).
pub fn install_hash_listener(ctx: AppContext) {
    let _ = window_event_listener(ev::hashchange, move |_| {
        apply_route(ctx, current_route());
    });
}

/// Log uncaught errors and rejections; toast the ones that are ours.
pub fn install_error_listeners(ctx: AppContext) {
    let _ = window_event_listener_untyped("error", move |event| {
        let message = event
            .dyn_ref::<ErrorEvent>()
            .map(|e| e.message())
            .unwrap_or_else(|| "Unknown error".to_string());
        report_global_error(ctx, &message);
    });

    let _ = window_event_listener_untyped("unhandledrejection", move |event| {
        let message = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map(|e| js_error_message(&e.reason()))
            .unwrap_or_else(|| "Unhandled promise rejection".to_string());
        report_global_error(ctx, &message);
    });
}

fn report_global_error(ctx: AppContext, message: &str) {
    log::error(&format!("Global error: {message}"));
    if !is_ignored_error(message) {
        ctx.toast(ToastKind::Error, "An unexpected error occurred");
    }
}
