//! Expandable file tree with an inline filter.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router;
use crate::core::{SearchMode, parent_path, search};
use crate::models::{FileNode, FileType, TreeViewType};

stylance::import_crate_style!(css, "src/components/tree_view.module.css");

/// Tree panel shown in the home view.
///
/// A non-blank filter or the list view type switches to a flat list of
/// matching leaves; otherwise the full hierarchy is rendered.
#[component]
pub fn TreeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let flat = Memo::new(move |_| {
        let term = ctx.filter.get();
        if term.trim().is_empty() && ctx.tree_view.get() == TreeViewType::Tree {
            return None;
        }
        Some(ctx.tree.with(|tree| {
            search(&term, tree.root(), SearchMode::Filter)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        }))
    });

    view! {
        <section class=css::panel aria-label="Files">
            <TreeToolbar />
            {move || match flat.get() {
                Some(nodes) => view! { <FlatList nodes=nodes /> }.into_any(),
                None => {
                    // Full re-render whenever the manifest is replaced
                    let root = ctx.tree.with(|tree| tree.root().clone());
                    view! {
                        <ul class=css::tree role="tree" aria-label="File tree">
                            {root
                                .children()
                                .iter()
                                .map(|child| view! { <TreeNode node=child.clone() /> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn TreeToolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_input = move |ev: ev::Event| ctx.filter.set(event_target_value(&ev));

    view! {
        <div class=css::toolbar>
            <input
                class=css::filter
                type="search"
                placeholder="Filter files..."
                aria-label="Filter files"
                prop:value=move || ctx.filter.get()
                on:input=on_input
            />
            <button
                class=css::viewToggle
                title=move || match ctx.tree_view.get() {
                    TreeViewType::Tree => "Show as list",
                    TreeViewType::List => "Show as tree",
                }
                on:click=move |_| ctx.tree_view.update(|t| *t = t.toggled())
            >
                {move || match ctx.tree_view.get() {
                    TreeViewType::Tree => view! { <Icon icon=ic::LIST /> },
                    TreeViewType::List => view! { <Icon icon=ic::TREE /> },
                }}
            </button>
        </div>
    }
}

/// One node of the hierarchy; directories recurse.
#[component]
fn TreeNode(node: FileNode) -> impl IntoView {
    if node.is_directory {
        view! { <DirectoryNode node=node /> }.into_any()
    } else {
        view! { <FileItem node=node /> }.into_any()
    }
}

#[component]
fn DirectoryNode(node: FileNode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let path = node.path.clone();
    let has_children = !node.children().is_empty();
    let expanded = Memo::new(move |_| ctx.expanded.with(|state| state.is_expanded(&path)));

    let toggle_path = node.path.clone();
    let on_toggle = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.expanded.update(|state| {
            state.toggle(&toggle_path);
        });
    };

    let children = node
        .children()
        .iter()
        .map(|child| view! { <TreeNode node=child.clone() /> }.into_any())
        .collect_view();

    view! {
        <li
            class=css::directory
            role="treeitem"
            aria-expanded=move || has_children.then(|| expanded.get().to_string())
        >
            <button class=css::row on:click=on_toggle>
                <span class=css::chevron>
                    {move || match (has_children, expanded.get()) {
                        (false, _) => None,
                        (true, true) => Some(view! { <Icon icon=ic::CHEVRON_DOWN /> }),
                        (true, false) => Some(view! { <Icon icon=ic::CHEVRON_RIGHT /> }),
                    }}
                </span>
                {move || if expanded.get() && has_children {
                    view! { <Icon icon=ic::FOLDER_OPEN /> }
                } else {
                    view! { <Icon icon=ic::FOLDER /> }
                }}
                <span class=css::name>{node.name.clone()}</span>
            </button>
            <ul class=css::children role="group" hidden=move || !expanded.get()>
                {children}
            </ul>
        </li>
    }
}

#[component]
fn FileItem(node: FileNode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::file_icon(FileType::from_path(&node.path));
    let active_path = node.path.clone();
    let is_active = Memo::new(move |_| {
        ctx.current_file
            .with(|file| file.as_ref().is_some_and(|f| f.path == active_path))
    });

    let path = node.path.clone();
    let on_click = move |ev: ev::MouseEvent| {
        // Must not reach the parent directory's toggle
        ev.stop_propagation();
        router::open_path(ctx, &path);
    };

    view! {
        <li class=css::file role="treeitem">
            <button
                class=move || {
                    if is_active.get() {
                        format!("{} {}", css::row, css::active)
                    } else {
                        css::row.to_string()
                    }
                }
                aria-current=move || is_active.get().then_some("page")
                on:click=on_click
            >
                <span class=css::chevron></span>
                <Icon icon=icon />
                <span class=css::name>{node.name.clone()}</span>
            </button>
        </li>
    }
}

/// Flat list of leaves with their containing directory.
#[component]
fn FlatList(nodes: Vec<FileNode>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    if nodes.is_empty() {
        return view! { <p class=css::empty>"No matching files"</p> }.into_any();
    }

    view! {
        <ul class=css::list>
            {nodes
                .into_iter()
                .map(|node| {
                    let icon = ic::file_icon(FileType::from_path(&node.path));
                    let dir = parent_path(&node.path).to_string();
                    let path = node.path.clone();
                    view! {
                        <li>
                            <button class=css::row on:click=move |_| router::open_path(ctx, &path)>
                                <Icon icon=icon />
                                <span class=css::name>{node.name.clone()}</span>
                                <span class=css::location>{dir}</span>
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
        .into_any()
}
