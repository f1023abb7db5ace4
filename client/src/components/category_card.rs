//! Card for one catalog category.

use leptos::prelude::*;

use catalog::{Catalog, CategoryDescriptor};

use crate::util::icons::{color_class, icon_glyph};

#[component]
pub fn CategoryCard(category: &'static CategoryDescriptor) -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let count = catalog.count_in(category.id);
    let accent = color_class(category.color);
    let count_label = if count == 1 { "1 tool".to_owned() } else { format!("{count} tools") };

    view! {
        <a class=format!("category-card {accent}") href=category.path()>
            <span class="category-card__icon" aria-hidden="true">{icon_glyph(category.icon)}</span>
            <span class="category-card__name">{category.name}</span>
            <span class="category-card__description">{category.description}</span>
            <span class="category-card__count">{count_label}</span>
        </a>
    }
}
