//! Top navigation bar.
//!
//! Brand, a two-level projection of the manifest, and the theme and
//! structure-watching controls.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router;
use crate::config::APP_NAME;
use crate::core::navbar::{MenuEntry, NavItem, nav_items};
use crate::models::{Theme, ToastKind};
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/components/navbar.module.css");

/// Selector of a dropdown, toggle and entries included.
const NAV_MENU: &str = "[data-nav-menu]";

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let items = Memo::new(move |_| ctx.tree.with(|tree| nav_items(tree.root())));
    // Name of the open dropdown
    let open_menu = RwSignal::new(None::<String>);

    // Clicks inside a dropdown are handled by its own toggle
    let _ = window_event_listener(ev::click, move |ev| {
        if open_menu.get_untracked().is_some() && !dom::is_inside(ev.target(), NAV_MENU) {
            open_menu.set(None);
        }
    });

    let on_brand = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ctx.search.clear();
        router::go_home(ctx);
    };

    view! {
        <nav class=css::navbar aria-label="Main navigation">
            <a class=css::brand href="#/" on:click=on_brand>
                <Icon icon=ic::HOME />
                <span>{APP_NAME}</span>
            </a>

            <ul class=css::items>
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| match item {
                            NavItem::Link { name, path } => {
                                view! { <NavLink name=name path=path /> }.into_any()
                            }
                            NavItem::Menu { name, entries } => {
                                view! { <NavMenu name=name entries=entries open_menu=open_menu /> }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
            </ul>

            <div class=css::controls>
                <RefreshButton />
                <WatchToggle />
                <ThemeToggle />
            </div>
        </nav>
    }
}

#[component]
fn NavLink(name: String, path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <li class=css::item>
            <button class=css::link on:click=move |_| router::open_path(ctx, &path)>
                {name}
            </button>
        </li>
    }
}

/// One-level dropdown for a top-level directory.
#[component]
fn NavMenu(name: String, entries: Vec<MenuEntry>, open_menu: RwSignal<Option<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let menu_name = name.clone();
    let is_open = Memo::new(move |_| open_menu.get().as_deref() == Some(menu_name.as_str()));

    let toggle_name = name.clone();
    let on_toggle = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        let next = if is_open.get_untracked() {
            None
        } else {
            Some(toggle_name.clone())
        };
        open_menu.set(next);
    };

    let entry_views = entries
        .into_iter()
        .map(|entry| {
            let unsupported = matches!(entry, MenuEntry::Unsupported { .. });
            let label = entry.name().to_string();
            let entry_class = if unsupported {
                format!("{} {}", css::menuEntry, css::unsupported)
            } else {
                css::menuEntry.to_string()
            };
            let on_select = move |_| {
                open_menu.set(None);
                match entry.target() {
                    Ok(path) => router::open_path(ctx, path),
                    Err(e) => {
                        log::warn(&e.to_string());
                        ctx.toast(ToastKind::Warning, &e.to_string());
                    }
                }
            };
            view! {
                <li>
                    <button
                        class=entry_class
                        role="menuitem"
                        on:click=on_select
                    >
                        {if unsupported {
                            view! {
                                <Icon icon=ic::WARNING />
                                <span>{label}</span>
                                <span class=css::badge>"not supported"</span>
                            }
                                .into_any()
                        } else {
                            view! { <span>{label}</span> }.into_any()
                        }}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <li class=css::item data-nav-menu="">
            <button
                class=css::link
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
                on:click=on_toggle
            >
                {name}
                <Icon icon=ic::CHEVRON_DOWN />
            </button>
            <ul class=css::menu role="menu" hidden=move || !is_open.get()>
                {entry_views}
            </ul>
        </li>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=css::control
            title="Toggle theme"
            aria-label="Toggle theme"
            on:click=move |_| ctx.toggle_theme()
        >
            {move || match ctx.theme.get() {
                Theme::Light => view! { <Icon icon=ic::MOON /> },
                Theme::Dark => view! { <Icon icon=ic::SUN /> },
            }}
        </button>
    }
}

/// Starts or stops periodic structure checks.
#[component]
fn WatchToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_click = move |_| {
        if ctx.watching.get_untracked() {
            ctx.stop_watching();
            ctx.toast(ToastKind::Info, "Auto-refresh disabled");
        } else {
            ctx.start_watching();
            ctx.toast(ToastKind::Info, "Auto-refresh enabled");
        }
    };

    view! {
        <button
            class=move || {
                if ctx.watching.get() {
                    format!("{} {}", css::control, css::active)
                } else {
                    css::control.to_string()
                }
            }
            title=move || if ctx.watching.get() { "Stop auto-refresh" } else { "Start auto-refresh" }
            aria-pressed=move || ctx.watching.get().to_string()
            on:click=on_click
        >
            {move || if ctx.watching.get() {
                view! { <Icon icon=ic::WATCHING /> }
            } else {
                view! { <Icon icon=ic::NOT_WATCHING /> }
            }}
        </button>
    }
}

#[component]
fn RefreshButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=css::control
            title="Check for new files"
            aria-label="Check for new files"
            on:click=move |_| ctx.refresh_structure()
        >
            <Icon icon=ic::REFRESH />
        </button>
    }
}
