//! Site footer with catalog totals.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use catalog::{Catalog, Registry};

use crate::tools::Widget;

/// One-line catalog summary, e.g. "9 of 46 tools ready across 9 categories".
pub fn catalog_summary(ready: usize, tools: usize, categories: usize) -> String {
    let noun = if categories == 1 { "category" } else { "categories" };
    format!("{ready} of {tools} tools ready across {categories} {noun}")
}

#[component]
pub fn Footer() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let registry = expect_context::<Registry<Widget>>();
    let ready = catalog.tools().iter().filter(|t| registry.contains(t.id)).count();
    let summary = catalog_summary(ready, catalog.tools().len(), catalog.categories().len());

    view! {
        <footer class="site-footer">
            <p class="site-footer__summary">{summary}</p>
            <nav class="site-footer__links">
                <a href="/">"Home"</a>
                <a href="/tools">"All tools"</a>
                <a href="/admin">"Admin"</a>
            </nav>
        </footer>
    }
}
