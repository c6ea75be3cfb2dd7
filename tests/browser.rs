//! Browser checks, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use docshelf::app::AppContext;
use docshelf::components::Shell;
use docshelf::components::router;
use docshelf::components::shell::{DOCUMENT_REGION_ID, HOME_REGION_ID};
use docshelf::core::document::{base_dir, internal_link_target, rewrite_relative_links};
use docshelf::models::{FileNode, Route, Theme, ViewMode};
use docshelf::utils::markdown_to_html;
use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Harness
// ============================================================================

fn sample_root() -> FileNode {
    FileNode::directory(
        "content",
        "content",
        vec![
            FileNode::directory(
                "guides",
                "content/guides",
                vec![FileNode::file("intro.md", "content/guides/intro.md")],
            ),
            FileNode::file("README.md", "content/README.md"),
        ],
    )
}

/// A `Shell` mounted into its own container, removed from the page on drop.
///
/// The reactive owner is kept alive so window listeners registered by the
/// components never touch disposed signals in later tests.
struct Mounted {
    ctx: AppContext,
    container: HtmlElement,
}

impl Mounted {
    fn new(root: FileNode) -> Self {
        Route::Home.push();

        let ctx = AppContext::new(Theme::Light);
        ctx.replace_structure(root);
        router::install_hash_listener(ctx);

        let document = web_sys::window().unwrap().document().unwrap();
        let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&container).unwrap();

        let handle = mount_to(container.clone(), move || {
            provide_context(ctx);
            view! { <Shell /> }
        });
        std::mem::forget(handle);

        Self { ctx, container }
    }

    fn find(&self, selector: &str) -> Element {
        self.container
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element for {selector}"))
    }

    fn all(&self, selector: &str) -> Vec<Element> {
        let nodes = self.container.query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<Element>().ok())
            .collect()
    }

    /// Button of the tree row labelled `label`.
    fn tree_button(&self, label: &str) -> HtmlElement {
        self.all("[role=treeitem] > button")
            .into_iter()
            .find(|b| b.text_content().unwrap_or_default().trim() == label)
            .unwrap_or_else(|| panic!("no tree row {label}"))
            .unchecked_into()
    }

    fn is_hidden(&self, id: &str) -> bool {
        self.find(&format!("#{id}")).has_attribute("hidden")
    }

    fn crumbs(&self) -> Vec<String> {
        self.all("nav[aria-label=Breadcrumb] li")
            .iter()
            .map(|li| li.text_content().unwrap_or_default().trim().to_string())
            .collect()
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.container.remove();
    }
}

/// Poll `cond` until it holds, for up to three seconds.
async fn wait_for(mut cond: impl FnMut() -> bool) -> bool {
    for _ in 0..150 {
        if cond() {
            return true;
        }
        TimeoutFuture::new(20).await;
    }
    cond()
}

async fn settle() {
    TimeoutFuture::new(30).await;
}

fn click(el: &Element) {
    el.unchecked_ref::<HtmlElement>().click();
}

fn type_into(input: &HtmlInputElement, value: &str) {
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

fn press(target: &Element, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

// ============================================================================
// Rendering helpers
// ============================================================================

#[wasm_bindgen_test]
fn relative_links_render_against_file_directory() {
    let path = "content/guides/getting-started.md";
    let markdown = "See [next](advanced.md) and ![logo](img/logo.png).";
    let html = markdown_to_html(&rewrite_relative_links(markdown, base_dir(path)));

    assert!(html.contains(r#"href="content/guides/advanced.md""#));
    assert!(html.contains(r#"src="content/guides/img/logo.png""#));
    assert_eq!(
        internal_link_target("content/guides/advanced.md#setup").as_deref(),
        Some("content/guides/advanced.md")
    );
}

#[wasm_bindgen_test]
fn pushed_route_is_current() {
    let route = Route::for_path("content/guides/getting started.md");
    route.push();
    assert_eq!(Route::current(), route);

    Route::Home.push();
    assert_eq!(Route::current(), Route::Home);
}

// ============================================================================
// Mounted shell
// ============================================================================

#[wasm_bindgen_test]
async fn leaf_opens_document_and_home_crumb_returns() {
    let app = Mounted::new(sample_root());
    settle().await;

    assert!(!app.is_hidden(HOME_REGION_ID));
    assert!(app.is_hidden(DOCUMENT_REGION_ID));
    assert!(app.find("#search-input").is_connected());

    click(&app.tree_button("README.md"));
    assert!(wait_for(|| !app.is_hidden(DOCUMENT_REGION_ID)).await);
    assert!(app.is_hidden(HOME_REGION_ID));
    assert!(wait_for(|| app.crumbs() == ["Home", "README.md"]).await);

    let home_crumb = app.find("nav[aria-label=Breadcrumb] li button");
    click(&home_crumb);
    assert!(wait_for(|| !app.is_hidden(HOME_REGION_ID)).await);
    assert!(app.is_hidden(DOCUMENT_REGION_ID));
    assert_eq!(app.ctx.view.get_untracked(), ViewMode::Home);
    assert!(wait_for(|| app.crumbs() == ["Home"]).await);
}

#[wasm_bindgen_test]
async fn file_click_leaves_parent_expanded() {
    let app = Mounted::new(sample_root());
    settle().await;

    click(&app.tree_button("guides"));
    assert!(app.ctx.expanded.with_untracked(|s| s.is_expanded("content/guides")));
    settle().await;

    click(&app.tree_button("intro.md"));
    assert!(app.ctx.expanded.with_untracked(|s| s.is_expanded("content/guides")));
    assert!(wait_for(|| app.ctx.view.get_untracked() == ViewMode::Content).await);
    assert!(app.ctx.expanded.with_untracked(|s| s.is_expanded("content/guides")));
}

#[wasm_bindgen_test]
async fn enter_then_debounce_dispatches_once() {
    let app = Mounted::new(sample_root());
    settle().await;

    let input: HtmlInputElement = app.find("#search-input").unchecked_into();
    type_into(&input, "intro");
    press(&input, "Enter");

    let names = app.ctx.search.results.with_untracked(|r| {
        r.as_ref()
            .map(|nodes| nodes.iter().map(|n| n.name.clone()).collect::<Vec<_>>())
    });
    assert_eq!(names, Some(vec!["intro.md".to_string()]));

    // Anything the pending debounce renders would overwrite this marker
    app.ctx.search.results.set(Some(Vec::new()));
    TimeoutFuture::new(600).await;
    assert_eq!(app.ctx.search.results.get_untracked(), Some(Vec::new()));
}

#[wasm_bindgen_test]
async fn outside_click_closes_results() {
    let app = Mounted::new(sample_root());
    settle().await;

    let input: HtmlInputElement = app.find("#search-input").unchecked_into();
    type_into(&input, "readme");
    press(&input, "Enter");
    assert!(app.ctx.search.results.with_untracked(Option::is_some));

    // Clicks inside the search area keep results open
    click(&input);
    assert!(app.ctx.search.results.with_untracked(Option::is_some));

    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    body.click();
    assert!(app.ctx.search.results.with_untracked(Option::is_none));
    assert_eq!(app.ctx.search.query.get_untracked(), "readme");
}

#[wasm_bindgen_test]
async fn dropdown_toggle_closes_its_own_menu() {
    let app = Mounted::new(sample_root());
    settle().await;

    let toggle = app.find("[data-nav-menu] > button[aria-haspopup]");
    click(&toggle);
    assert!(wait_for(|| toggle.get_attribute("aria-expanded").as_deref() == Some("true")).await);

    click(&toggle);
    assert!(wait_for(|| toggle.get_attribute("aria-expanded").as_deref() == Some("false")).await);

    click(&toggle);
    assert!(wait_for(|| toggle.get_attribute("aria-expanded").as_deref() == Some("true")).await);
    web_sys::window().unwrap().document().unwrap().body().unwrap().click();
    assert!(wait_for(|| toggle.get_attribute("aria-expanded").as_deref() == Some("false")).await);
}
