//! Content region: rendered markdown, code-block toolbars and file actions.

use std::any::Any;

use gloo_timers::future::TimeoutFuture;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use crate::app::AppContext;
use crate::components::breadcrumb::Breadcrumbs;
use crate::components::icons as ic;
use crate::components::router;
use crate::config::layout::COLLAPSED_CODE_HEIGHT;
use crate::config::timing::COPY_FEEDBACK_MS;
use crate::core::code_block::{block_title, download_filename, language_from_class, raw_page};
use crate::core::document::internal_link_target;
use crate::core::error::ViewerError;
use crate::models::{ContentState, ToastKind};
use crate::utils::{clipboard, download, highlight, log};

stylance::import_crate_style!(css, "src/components/content.module.css");

/// Element id targeted by the skip link.
pub const CONTENT_ID: &str = "main-content";

/// Mounted toolbars of the current document, unmounted on the next render.
type ToolbarHandles = StoredValue<Vec<Box<dyn Any>>, LocalStorage>;

#[component]
pub fn ContentView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let container_ref = NodeRef::<leptos::html::Article>::new();
    let toolbars: ToolbarHandles = StoredValue::new_local(Vec::new());

    let html = Memo::new(move |_| match ctx.content.get() {
        ContentState::Ready(html) => Some(html),
        _ => None,
    });

    // Enhance once the new markup is in the DOM
    Effect::new(move |_| {
        let Some(_) = html.get() else {
            return;
        };
        request_animation_frame(move || {
            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            let container: &Element = &container;
            toolbars.set_value(Vec::new());
            match enhance_code_blocks(ctx, container) {
                Ok(handles) => toolbars.set_value(handles),
                Err(e) => log::warn(&e.to_string()),
            }
            highlight::highlight_within(container);
        });
    });

    // Relative markdown links open inside the viewer
    let on_content_click = move |ev: ev::MouseEvent| {
        let anchor = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href]").ok().flatten());
        let Some(href) = anchor.and_then(|a| a.get_attribute("href")) else {
            return;
        };
        if let Some(path) = internal_link_target(&href) {
            ev.prevent_default();
            router::open_path(ctx, &path);
        }
    };

    view! {
        <section class=css::content aria-label="Document">
            <div class=css::topbar>
                <Breadcrumbs />
                <FileActions />
            </div>

            {move || match ctx.content.get() {
                ContentState::Failed(message) => Some(view! {
                    <div class=css::errorPanel role="alert">
                        <Icon icon=ic::WARNING />
                        <div>
                            <strong>"Error loading file"</strong>
                            <p>{message}</p>
                        </div>
                    </div>
                }),
                _ => None,
            }}

            <article
                id=CONTENT_ID
                class=css::markdown
                tabindex="-1"
                node_ref=container_ref
                inner_html=move || html.get().unwrap_or_default()
                on:click=on_content_click
            ></article>
        </section>
    }
}

/// "View Raw" and "Download" for the whole current file.
#[component]
fn FileActions() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let has_file = Memo::new(move |_| {
        ctx.current_file
            .with(|file| file.as_ref().is_some_and(|f| !f.markdown.is_empty()))
    });

    let on_view_raw = move |_| {
        let Some(file) = ctx.current_file.get_untracked() else {
            return;
        };
        if let Err(e) = download::open_in_new_window(&file.markdown, "text/plain;charset=utf-8") {
            log::error(&e);
            ctx.toast(ToastKind::Error, "Could not open raw view");
        }
    };

    let on_download = move |_| {
        let Some(file) = ctx.current_file.get_untracked() else {
            return;
        };
        match download::download_text(&file.name, &file.markdown) {
            Ok(()) => ctx.toast(ToastKind::Success, &format!("Downloaded {}", file.name)),
            Err(e) => {
                log::error(&e);
                ctx.toast(ToastKind::Error, "Download failed");
            }
        }
    };

    view! {
        <Show when=move || has_file.get()>
            <div class=css::actions>
                <button class=css::action on:click=on_view_raw title="View raw markdown">
                    <Icon icon=ic::EXTERNAL_LINK />
                    <span>"View Raw"</span>
                </button>
                <button class=css::action on:click=on_download title="Download file">
                    <Icon icon=ic::DOWNLOAD />
                    <span>"Download"</span>
                </button>
            </div>
        </Show>
    }
}

// ============================================================================
// Code Blocks
// ============================================================================

/// Wrap every `<pre>` under `container` with a toolbar.
///
/// Returns the toolbars' mount handles; dropping them unmounts the toolbars.
fn enhance_code_blocks(ctx: AppContext, container: &Element) -> Result<Vec<Box<dyn Any>>, ViewerError> {
    let render_err = |what: &str| ViewerError::Render(format!("code block {what}"));
    let document = container.owner_document().ok_or_else(|| render_err("has no document"))?;
    let blocks = container
        .query_selector_all("pre")
        .map_err(|_| render_err("query failed"))?;

    let mut handles: Vec<Box<dyn Any>> = Vec::new();
    for i in 0..blocks.length() {
        let Some(pre) = blocks.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let index = i as usize + 1;
        let language = pre
            .query_selector("code")
            .ok()
            .flatten()
            .map(|code| language_from_class(&code.class_name()))
            .unwrap_or_else(|| "text".to_string());

        let wrapper = document
            .create_element("div")
            .map_err(|_| render_err("wrapper creation failed"))?;
        wrapper.set_class_name(css::codeBlock);
        let header: HtmlElement = document
            .create_element("div")
            .map_err(|_| render_err("header creation failed"))?
            .unchecked_into();

        let parent = pre.parent_node().ok_or_else(|| render_err("is detached"))?;
        parent
            .insert_before(&wrapper, Some(pre.as_ref()))
            .and_then(|_| wrapper.append_child(&header))
            .and_then(|_| wrapper.append_child(&pre))
            .map_err(|_| render_err("wrapping failed"))?;

        let handle = mount_to(header, move || {
            view! { <CodeBlockHeader ctx=ctx index=index language=language pre=pre /> }
        });
        handles.push(Box::new(handle));
    }
    Ok(handles)
}

#[component]
fn CodeBlockHeader(ctx: AppContext, index: usize, language: String, pre: HtmlElement) -> impl IntoView {
    let copied = RwSignal::new(false);
    let collapsed = RwSignal::new(false);
    let title = block_title(index);

    let code_text = {
        let pre = pre.clone();
        move || pre.text_content().unwrap_or_default()
    };

    let on_copy = {
        let code_text = code_text.clone();
        move |_| {
            let text = code_text();
            spawn_local(async move {
                match clipboard::copy_text(&text).await {
                    Ok(()) => {
                        copied.set(true);
                        ctx.toast(ToastKind::Success, "Code copied to clipboard!");
                        TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                        copied.set(false);
                    }
                    Err(e) => {
                        log::error(&format!("Failed to copy: {e}"));
                        ctx.toast(ToastKind::Error, "Failed to copy code");
                    }
                }
            });
        }
    };

    let on_download = {
        let code_text = code_text.clone();
        let language = language.clone();
        move |_| match download::download_text(&download_filename(index, &language), &code_text()) {
            Ok(()) => ctx.toast(ToastKind::Success, "Code downloaded successfully!"),
            Err(e) => {
                log::error(&e);
                ctx.toast(ToastKind::Error, "Download failed");
            }
        }
    };

    let on_view_raw = {
        let title = title.clone();
        let language = language.clone();
        move |_| {
            let page = raw_page(&title, &language, &code_text());
            if let Err(e) = download::open_in_new_window(&page, "text/html;charset=utf-8") {
                log::error(&e);
                ctx.toast(ToastKind::Error, "Could not open raw view");
            }
        }
    };

    let on_collapse = move |_| {
        let next = !collapsed.get_untracked();
        collapsed.set(next);
        let style = pre.style();
        let (max_height, overflow) = if next {
            (COLLAPSED_CODE_HEIGHT, "hidden")
        } else {
            ("none", "auto")
        };
        let _ = style.set_property("max-height", max_height);
        let _ = style.set_property("overflow", overflow);
    };

    view! {
        <div class=css::codeHeader>
            <div class=css::codeTitle>
                <Icon icon=ic::CODE />
                <span>{title}</span>
                <span class=css::badge>{language.to_uppercase()}</span>
            </div>
            <div class=css::codeActions>
                <button
                    class=move || {
                        if copied.get() {
                            format!("{} {}", css::codeAction, css::copied)
                        } else {
                            css::codeAction.to_string()
                        }
                    }
                    title="Copy to clipboard"
                    aria-label="Copy code to clipboard"
                    on:click=on_copy
                >
                    {move || if copied.get() {
                        view! { <Icon icon=ic::CHECK /> }
                    } else {
                        view! { <Icon icon=ic::COPY /> }
                    }}
                </button>
                <button
                    class=css::codeAction
                    title="Download as file"
                    aria-label="Download code as file"
                    on:click=on_download
                >
                    <Icon icon=ic::DOWNLOAD />
                </button>
                <button
                    class=css::codeAction
                    title="View in new window"
                    aria-label="View code in new window"
                    on:click=on_view_raw
                >
                    <Icon icon=ic::EXTERNAL_LINK />
                </button>
                <button
                    class=css::codeAction
                    title=move || if collapsed.get() { "Expand" } else { "Collapse" }
                    aria-label="Toggle code visibility"
                    aria-expanded=move || (!collapsed.get()).to_string()
                    on:click=on_collapse
                >
                    {move || if collapsed.get() {
                        view! { <Icon icon=ic::EXPAND /> }
                    } else {
                        view! { <Icon icon=ic::COLLAPSE /> }
                    }}
                </button>
            </div>
        </div>
    }
}
