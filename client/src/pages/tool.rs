//! Tool route: the dispatcher's rendering side.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/tools/:id` hands the route id to the session `Dispatcher` provided by
//! `App`. A known id renders its widget; anything else renders
//! `NotImplemented`, and the dispatcher's first notice for that id becomes a
//! toast. Because the dispatcher outlives this page, navigating back to an
//! unresolved tool does not toast again.

#[cfg(test)]
#[path = "tool_test.rs"]
mod tool_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use catalog::{Catalog, DispatchEvent, Dispatcher, Resolution};

use crate::components::not_implemented::NotImplemented;
use crate::state::notices::NoticeState;
use crate::tools::Widget;
use crate::util::icons::icon_glyph;

/// Document title for a tool route.
pub fn page_title(catalog: &Catalog, id: &str) -> String {
    match catalog.tool(id) {
        Some(tool) => format!("{} · Toolbox", tool.name),
        None => "Tool not found · Toolbox".to_owned(),
    }
}

/// Breadcrumb trail: `(label, href)` pairs from the catalog root to the tool.
pub fn breadcrumbs(catalog: &Catalog, id: &str) -> Vec<(String, String)> {
    let mut trail = vec![("Tools".to_owned(), "/tools".to_owned())];
    if let Some(tool) = catalog.tool(id) {
        if let Some(category) = catalog.category_of(tool) {
            trail.push((category.name.to_owned(), category.path()));
        }
        trail.push((tool.name.to_owned(), tool.path()));
    }
    trail
}

#[component]
pub fn ToolPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let dispatcher = expect_context::<StoredValue<Dispatcher<Widget>>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();

    let tool_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let body = move || {
        let id = tool_id.get();
        let sink = move |event: DispatchEvent| {
            notices.update(|n| {
                n.push_dispatch_event(&event, &catalog);
            });
        };
        let resolution = dispatcher
            .try_update_value(|d| d.dispatch(&id, &sink))
            .unwrap_or(Resolution::Unknown);
        match resolution {
            Resolution::Known(widget) => widget(),
            Resolution::Unknown => view! { <NotImplemented tool_id=id/> }.into_any(),
        }
    };

    let header = move || {
        let id = tool_id.get();
        let tool = catalog.tool(&id);
        let crumbs = breadcrumbs(&catalog, &id);
        view! {
            <Title text=page_title(&catalog, &id)/>
            <nav class="breadcrumbs" aria-label="Breadcrumb">
                {crumbs
                    .into_iter()
                    .map(|(label, href)| view! { <a href=href>{label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
            {tool.map(|tool| {
                view! {
                    <header class="tool-page__header">
                        <span class="tool-page__icon" aria-hidden="true">{icon_glyph(tool.icon)}</span>
                        <div>
                            <h1 class="tool-page__title">{tool.name}</h1>
                            <p class="tool-page__description">{tool.description}</p>
                        </div>
                    </header>
                }
            })}
        }
    };

    view! {
        <section class="tool-page">
            {header}
            <div class="tool-page__body">{body}</div>
        </section>
    }
}
