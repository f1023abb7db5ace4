//! Landing page: search, curated lists, and the category grid.

use leptos::prelude::*;

use catalog::Catalog;

use crate::components::category_card::CategoryCard;
use crate::components::search_box::SearchBox;
use crate::components::tool_card::ToolCard;

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let featured = catalog.featured();
    let fresh = catalog.new_tools();
    let total = catalog.tools().len();

    view! {
        <section class="hero">
            <h1 class="hero__title">"Free online tools for everyday tasks"</h1>
            <p class="hero__subtitle">
                {format!("{total} converters, generators, and formatters that run in your browser.")}
            </p>
            <SearchBox large=true placeholder="What do you want to do?"/>
        </section>

        <section class="home-section">
            <h2 class="home-section__title">"Featured tools"</h2>
            <div class="tool-grid">
                {featured
                    .into_iter()
                    .map(|tool| view! { <ToolCard tool=tool show_category=true/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <Show when=move || !catalog.new_tools().is_empty()>
            <section class="home-section">
                <h2 class="home-section__title">"New tools"</h2>
                <div class="tool-grid">
                    {fresh
                        .clone()
                        .into_iter()
                        .map(|tool| view! { <ToolCard tool=tool show_category=true/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </Show>

        <section class="home-section">
            <h2 class="home-section__title">"Browse by category"</h2>
            <div class="category-grid">
                {catalog
                    .categories()
                    .iter()
                    .map(|category| view! { <CategoryCard category=category/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
