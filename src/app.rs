//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] definition and
//! application-level setup following Leptos conventions.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::components::Shell;
use crate::components::router;
use crate::config::timing::{ANNOUNCE_CLEAR_MS, TOAST_DURATION_MS};
use crate::config::{APP_NAME, APP_VERSION, AUTO_WATCH, IGNORED_ERROR_PATTERNS};
use crate::core::{
    ExpansionState, FileTree, QueryGate, SearchMode, StructureRepository, StructureWatcher, search,
};
use crate::models::{
    ContentState, CurrentFile, FileNode, Theme, Toast, ToastKind, TreeViewType, ViewMode,
};
use crate::utils::{HttpFetcher, log, theme};

/// Watcher over the browser fetcher.
pub type AppWatcher = StructureWatcher<HttpFetcher>;

// ============================================================================
// SearchState
// ============================================================================

/// Search box state.
///
/// `results` is `None` while the results region is closed.
#[derive(Clone, Copy)]
pub struct SearchState {
    pub query: RwSignal<String>,
    pub results: RwSignal<Option<Vec<FileNode>>>,
    /// Last dispatched query
    pub gate: StoredValue<QueryGate>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
            results: RwSignal::new(None),
            gate: StoredValue::new(QueryGate::default()),
        }
    }

    /// Render results for `query` unless it was the last one dispatched.
    pub fn dispatch(&self, query: &str, tree: &FileTree) {
        let admitted = self.gate.try_update_value(|gate| gate.admit(query)).unwrap_or(false);
        if !admitted {
            return;
        }
        let results = search(query, tree.root(), SearchMode::SearchBox)
            .into_iter()
            .cloned()
            .collect();
        self.results.set(Some(results));
    }

    /// Close the results region without touching the input.
    pub fn close_results(&self) {
        self.results.set(None);
        self.gate.update_value(QueryGate::reset);
    }

    /// Reset input, results and the duplicate gate.
    pub fn clear(&self) {
        self.query.set(String::new());
        self.close_results();
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap handles into the reactive arena.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Manifest tree; replaced whole on structure change.
    pub tree: RwSignal<FileTree>,
    /// Expanded directories of the rendered tree.
    pub expanded: RwSignal<ExpansionState>,
    pub view: RwSignal<ViewMode>,
    pub current_file: RwSignal<Option<CurrentFile>>,
    pub content: RwSignal<ContentState>,
    /// Number of operations in flight.
    pub loading: RwSignal<u32>,
    pub search: SearchState,
    /// Inline tree filter term.
    pub filter: RwSignal<String>,
    pub tree_view: RwSignal<TreeViewType>,
    pub theme: RwSignal<Theme>,
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u64>,
    /// Polite screen-reader announcement.
    pub announcement: RwSignal<String>,
    /// Mirrors the watcher so the navbar toggle can render.
    pub watching: RwSignal<bool>,
    watcher: StoredValue<Option<AppWatcher>, LocalStorage>,
}

impl AppContext {
    pub fn new(initial_theme: Theme) -> Self {
        Self {
            tree: RwSignal::new(FileTree::fallback()),
            expanded: RwSignal::new(ExpansionState::default()),
            view: RwSignal::new(ViewMode::Home),
            current_file: RwSignal::new(None),
            content: RwSignal::new(ContentState::Empty),
            loading: RwSignal::new(0),
            search: SearchState::new(),
            filter: RwSignal::new(String::new()),
            tree_view: RwSignal::new(TreeViewType::Tree),
            theme: RwSignal::new(initial_theme),
            toasts: RwSignal::new(Vec::new()),
            next_toast_id: StoredValue::new(0),
            announcement: RwSignal::new(String::new()),
            watching: RwSignal::new(false),
            watcher: StoredValue::new_local(None),
        }
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    /// Tree and search visible, content hidden, empty breadcrumb trail.
    pub fn show_home(&self) {
        self.view.set(ViewMode::Home);
    }

    /// Home view with `dir` and its ancestors expanded in the tree.
    pub fn reveal_directory(&self, dir: &str) {
        self.filter.set(String::new());
        self.tree_view.set(TreeViewType::Tree);
        self.expanded.update(|state| state.expand_to(dir));
        self.show_home();
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get() > 0
    }

    /// Mark an operation in flight until the guard drops.
    pub fn begin_loading(&self) -> LoadingGuard {
        self.loading.update(|n| *n += 1);
        LoadingGuard {
            loading: self.loading,
        }
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Swap in a new manifest. The open document is left as is.
    pub fn replace_structure(&self, root: FileNode) {
        let tree = FileTree::new(root);
        let open_query = self
            .search
            .results
            .with_untracked(Option::is_some)
            .then(|| self.search.query.get_untracked());

        self.expanded.set(ExpansionState::default());
        if let Some(query) = open_query {
            self.search.gate.update_value(QueryGate::reset);
            self.search.dispatch(&query, &tree);
        }
        self.tree.set(tree);
    }

    fn on_structure_changed(&self, root: FileNode) {
        self.replace_structure(root);
        self.toast(ToastKind::Info, "File structure updated!");
    }

    pub fn watcher(&self) -> Option<AppWatcher> {
        self.watcher.get_value()
    }

    pub fn start_watching(&self) {
        if let Some(watcher) = self.watcher() {
            watcher.start_watching();
            self.watching.set(watcher.is_watching());
        }
    }

    pub fn stop_watching(&self) {
        if let Some(watcher) = self.watcher() {
            watcher.stop_watching();
            self.watching.set(watcher.is_watching());
        }
    }

    /// Check the manifest now and report the outcome.
    pub fn refresh_structure(&self) {
        let Some(watcher) = self.watcher() else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let _guard = ctx.begin_loading();
            match watcher.try_force_check().await {
                Ok(true) => {}
                Ok(false) => ctx.toast(ToastKind::Info, "No changes"),
                Err(e) => {
                    log::warn(&format!("Refresh failed: {e}"));
                    ctx.toast(ToastKind::Error, "Could not check for new files");
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    pub fn set_theme(&self, next: Theme) {
        self.theme.set(next);
        theme::apply_theme(next);
        theme::persist_theme(next);
        self.announce(&format!("Switched to {} theme", next.as_str()));
        self.toast(
            ToastKind::Info,
            &format!("Switched to {} theme", next.as_str()),
        );
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// Show a toast that dismisses itself after [`TOAST_DURATION_MS`].
    pub fn toast(&self, kind: ToastKind, message: &str) {
        let id = self
            .next_toast_id
            .try_update_value(|id| {
                *id += 1;
                *id
            })
            .unwrap_or_default();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            ctx.dismiss_toast(id);
        });
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Say `message` through the live region, then clear it.
    pub fn announce(&self, message: &str) {
        let message = message.to_string();
        self.announcement.set(message.clone());

        let announcement = self.announcement;
        spawn_local(async move {
            TimeoutFuture::new(ANNOUNCE_CLEAR_MS).await;
            if announcement.get_untracked() == message {
                announcement.set(String::new());
            }
        });
    }
}

/// Decrements the loading counter on drop, on every exit path.
pub struct LoadingGuard {
    loading: RwSignal<u32>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.loading.update(|n| *n = n.saturating_sub(1));
    }
}

// ============================================================================
// Boot
// ============================================================================

/// Whether a global error should be logged only.
pub fn is_ignored_error(message: &str) -> bool {
    IGNORED_ERROR_PATTERNS
        .iter()
        .any(|pattern| message.contains(pattern))
}

/// Load the manifest, then start watching and apply the current route.
fn boot(ctx: AppContext) {
    let repository = Rc::new(StructureRepository::new(HttpFetcher));
    let watcher = StructureWatcher::new(Rc::clone(&repository), move |root| {
        ctx.on_structure_changed(root)
    });
    ctx.watcher.set_value(Some(watcher));

    spawn_local(async move {
        {
            let _guard = ctx.begin_loading();
            let root = repository.fetch_structure().await;
            ctx.replace_structure(root);
        }

        if AUTO_WATCH {
            ctx.start_watching();
        }
        router::apply_route(ctx, router::current_route());
        log::info(&format!("{APP_NAME} v{APP_VERSION} loaded"));
        ctx.toast(ToastKind::Success, "Application loaded");
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Picks the initial theme (stored, then system preference)
/// - Creates and provides the global AppContext
/// - Boots the manifest, watcher, hash routing and error listeners
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let prefers_dark = use_media_query("(prefers-color-scheme: dark)");
    let initial_theme = theme::stored_theme().unwrap_or(if prefers_dark.get_untracked() {
        Theme::Dark
    } else {
        Theme::Light
    });
    theme::apply_theme(initial_theme);

    let ctx = AppContext::new(initial_theme);
    provide_context(ctx);

    router::install_hash_listener(ctx);
    router::install_error_listeners(ctx);
    boot(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="app-error" role="alert">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <details>
                        <summary>"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_errors() {
        assert!(is_ignored_error("Script error."));
        assert!(is_ignored_error(
            "chrome-extension://abc/content.js: ResizeObserver loop limit exceeded"
        ));
        assert!(!is_ignored_error("TypeError: x is undefined"));
    }
}
