//! Toast stack.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Toast, ToastKind};

stylance::import_crate_style!(css, "src/components/toast.module.css");

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => css::info,
        ToastKind::Success => css::success,
        ToastKind::Warning => css::warning,
        ToastKind::Error => css::error,
    }
}

#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::stack aria-live="assertive">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = toast.id;

    view! {
        <div class=format!("{} {}", css::toast, kind_class(toast.kind)) role="alert">
            <span class=css::icon><Icon icon=ic::toast_icon(toast.kind) /></span>
            <p class=css::message>
                <strong>{toast.kind.heading()}</strong>
                " "
                {toast.message}
            </p>
            <button
                class=css::close
                aria-label="Dismiss notification"
                on:click=move |_| ctx.dismiss_toast(id)
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
