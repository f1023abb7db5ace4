//! Category listing route.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use catalog::Catalog;

use crate::components::tool_card::ToolCard;
use crate::util::icons::{color_class, icon_glyph};

#[component]
pub fn CategoryPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let params = use_params_map();
    let category_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    move || {
        let id = category_id.get();
        let Some(category) = catalog.category(&id) else {
            return view! {
                <section class="not-found">
                    <Title text="Category not found · Toolbox"/>
                    <h1>"Category not found."</h1>
                    <p>{format!("There is no category called \"{id}\".")}</p>
                    <p>
                        <a href="/tools">"Browse all tools"</a>
                    </p>
                </section>
            }
            .into_any();
        };
        let tools = catalog.list_by_category(category.id);
        view! {
            <section class=format!("category-page {}", color_class(category.color))>
                <Title text=format!("{} · Toolbox", category.name)/>
                <header class="category-page__header">
                    <span class="category-page__icon" aria-hidden="true">{icon_glyph(category.icon)}</span>
                    <div>
                        <h1>{category.name}</h1>
                        <p>{category.description}</p>
                    </div>
                </header>
                <div class="tool-grid">
                    {tools.into_iter().map(|tool| view! { <ToolCard tool=tool/> }).collect::<Vec<_>>()}
                </div>
            </section>
        }
        .into_any()
    }
}
