//! Full catalog listing with text and category filters.
//!
//! DESIGN
//! ======
//! Filters come from the URL (`?q=...&category=...`) rather than local
//! signals, so the header search, category chips, and browser history all
//! drive the same view.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use catalog::{Catalog, ToolDescriptor};

use crate::components::search_box::SearchBox;
use crate::components::tool_card::ToolCard;

/// Tools matching the active filters, in catalog order.
///
/// An unknown `category` is ignored rather than producing an empty list.
pub fn visible_tools(catalog: &Catalog, query: &str, category: Option<&str>) -> Vec<&'static ToolDescriptor> {
    let query = query.trim();
    match category.and_then(|id| catalog.category(id)) {
        Some(category) => catalog.filter_by_text(query, catalog.list_by_category(category.id)),
        None => catalog.search(query),
    }
}

/// Href for a category chip, keeping the current text query.
pub fn filter_href(query: &str, category: Option<&str>) -> String {
    let query = query.trim();
    let mut params = Vec::new();
    if !query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(query)));
    }
    if let Some(category) = category {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if params.is_empty() {
        "/tools".to_owned()
    } else {
        format!("/tools?{}", params.join("&"))
    }
}

pub fn results_label(count: usize, query: &str) -> String {
    let noun = if count == 1 { "tool" } else { "tools" };
    let query = query.trim();
    if query.is_empty() {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun} matching \"{query}\"")
    }
}

#[component]
pub fn ToolsPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let query_map = use_query_map();

    let query = move || query_map.read().get("q").unwrap_or_default();
    let category = move || query_map.read().get("category");
    let results = move || visible_tools(&catalog, &query(), category().as_deref());

    view! {
        <section class="tools-page">
            <h1>"All tools"</h1>
            {move || view! { <SearchBox initial=query()/> }}
            <nav class="chip-row" aria-label="Filter by category">
                <a
                    class="chip"
                    class:chip--active=move || category().is_none()
                    href=move || filter_href(&query(), None)
                >
                    "All"
                </a>
                {catalog
                    .categories()
                    .iter()
                    .map(|c| {
                        let id = c.id;
                        view! {
                            <a
                                class="chip"
                                class:chip--active=move || category().as_deref() == Some(id)
                                href=move || filter_href(&query(), Some(id))
                            >
                                {c.name}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <p class="tools-page__count">{move || results_label(results().len(), &query())}</p>
            <div class="tool-grid">
                {move || {
                    results()
                        .into_iter()
                        .map(|tool| view! { <ToolCard tool=tool show_category=true/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
