//! Search box with debounced dispatch and a results dropdown.

use gloo_timers::callback::Timeout;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router;
use crate::config::timing::SEARCH_DEBOUNCE_MS;
use crate::core::parent_path;
use crate::models::FileType;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/search.module.css");

/// Selector of the area inside which clicks keep results open.
const SEARCH_AREA: &str = "[data-search-area]";

/// Element id used by the Ctrl/Cmd+K shortcut.
pub const SEARCH_INPUT_ID: &str = "search-input";

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let search = ctx.search;

    // Pending debounce; dropping a Timeout cancels it.
    let pending = StoredValue::new_local(None::<Timeout>);
    let cancel_pending = move || pending.set_value(None);

    let dispatch = move |query: String| {
        ctx.tree.with_untracked(|tree| search.dispatch(&query, tree));
    };

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        search.query.set(value.clone());
        cancel_pending();

        if value.trim().is_empty() {
            search.close_results();
            return;
        }
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || dispatch(value));
        pending.set_value(Some(timeout));
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            cancel_pending();
            let query = search.query.get_untracked();
            if !query.trim().is_empty() {
                dispatch(query);
            }
        }
    };

    let on_clear = move |_| {
        cancel_pending();
        search.clear();
        dom::focus_element(&format!("#{SEARCH_INPUT_ID}"));
    };

    let _ = window_event_listener(ev::click, move |ev| {
        if search.results.with_untracked(Option::is_some) && !dom::is_inside(ev.target(), SEARCH_AREA) {
            search.close_results();
        }
    });

    view! {
        <div class=css::searchArea data-search-area="" role="search">
            <div class=css::field>
                <span class=css::icon><Icon icon=ic::SEARCH /></span>
                <input
                    id=SEARCH_INPUT_ID
                    class=css::input
                    type="search"
                    placeholder="Search files... (Ctrl+K)"
                    aria-label="Search files"
                    autocomplete="off"
                    prop:value=move || search.query.get()
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <Show when=move || !search.query.with(String::is_empty)>
                    <button class=css::clear title="Clear search" aria-label="Clear search" on:click=on_clear>
                        <Icon icon=ic::CLOSE />
                    </button>
                </Show>
            </div>

            {move || search.results.get().map(|results| view! { <SearchResults results=results /> })}
        </div>
    }
}

#[component]
fn SearchResults(results: Vec<crate::models::FileNode>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    if results.is_empty() {
        return view! {
            <div class=css::results role="status">
                <p class=css::empty>"No files found"</p>
            </div>
        }
            .into_any();
    }

    let count = results.len();
    view! {
        <div class=css::results>
            <p class=css::count role="status">
                {format!("{count} result{}", if count == 1 { "" } else { "s" })}
            </p>
            <ul class=css::list>
                {results
                    .into_iter()
                    .map(|node| {
                        let icon = ic::file_icon(FileType::from_path(&node.path));
                        let dir = parent_path(&node.path).to_string();
                        let path = node.path.clone();
                        let on_click = move |_| {
                            ctx.search.clear();
                            router::open_path(ctx, &path);
                        };
                        view! {
                            <li>
                                <button class=css::result on:click=on_click>
                                    <Icon icon=icon />
                                    <span class=css::name>{node.name.clone()}</span>
                                    <span class=css::path>{dir}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
        .into_any()
}
