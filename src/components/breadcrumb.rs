//! Breadcrumb trail for the open file.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router;
use crate::core::breadcrumb::{Crumb, trail};
use crate::models::ViewMode;

stylance::import_crate_style!(css, "src/components/breadcrumb.module.css");

/// "Home" followed by the path segments of the current file.
///
/// In the home view the trail is empty and only "Home" shows.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let crumbs = Memo::new(move |_| {
        if ctx.view.get() == ViewMode::Home {
            return Vec::new();
        }
        let root_path = ctx.tree.with(|tree| tree.root_path().to_string());
        ctx.current_file
            .with(|file| trail(file.as_ref().map(|f| f.path.as_str()), &root_path))
    });

    let on_home = move |_| {
        ctx.search.clear();
        router::go_home(ctx);
    };

    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            <ol>
                <li class=css::crumb>
                    <button class=css::link on:click=on_home>
                        <Icon icon=ic::HOME />
                        <span>"Home"</span>
                    </button>
                </li>
                {move || {
                    crumbs
                        .get()
                        .into_iter()
                        .map(|crumb| view! { <CrumbItem crumb=crumb /> })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}

#[component]
fn CrumbItem(crumb: Crumb) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let body = match crumb.target {
        Some(dir) => {
            let on_click = move |_| {
                router::go_home(ctx);
                ctx.reveal_directory(&dir);
            };
            view! {
                <button class=css::link on:click=on_click>{crumb.label}</button>
            }
                .into_any()
        }
        None => view! {
            <span class=css::current aria-current="page">{crumb.label}</span>
        }
            .into_any(),
    };

    view! {
        <li class=css::crumb>
            <span class=css::separator aria-hidden="true"><Icon icon=ic::CHEVRON_RIGHT /></span>
            {body}
        </li>
    }
}
