//! Card for one catalog tool.
//!
//! DESIGN
//! ======
//! Cards read the registry only to mark tools that have no widget yet; the
//! link always points at the tool route so the dispatcher decides what the
//! user sees.

#[cfg(test)]
#[path = "tool_card_test.rs"]
mod tool_card_test;

use leptos::prelude::*;

use catalog::{Catalog, Registry, ToolDescriptor};

use crate::tools::Widget;
use crate::util::icons::{color_class, icon_glyph};

/// Badge labels shown on a tool card, in display order.
pub fn badges(tool: &ToolDescriptor, ready: bool) -> Vec<&'static str> {
    let mut out = Vec::new();
    if tool.featured {
        out.push("Featured");
    }
    if tool.is_new {
        out.push("New");
    }
    if !ready {
        out.push("Coming soon");
    }
    out
}

/// A clickable card linking to a tool.
#[component]
pub fn ToolCard(tool: &'static ToolDescriptor, #[prop(optional)] show_category: bool) -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let registry = expect_context::<Registry<Widget>>();
    let ready = registry.contains(tool.id);
    let category = catalog.category_of(tool);
    let accent = color_class(category.map_or("", |c| c.color));
    let category_name = category.map(|c| c.name);

    view! {
        <a class=format!("tool-card {accent}") class:tool-card--pending=!ready href=tool.path()>
            <span class="tool-card__icon" aria-hidden="true">{icon_glyph(tool.icon)}</span>
            <span class="tool-card__name">{tool.name}</span>
            <span class="tool-card__description">{tool.description}</span>
            <Show when=move || show_category && category_name.is_some()>
                <span class="tool-card__category">{category_name}</span>
            </Show>
            <span class="tool-card__badges">
                {badges(tool, ready)
                    .into_iter()
                    .map(|label| view! { <span class="badge">{label}</span> })
                    .collect::<Vec<_>>()}
            </span>
        </a>
    }
}
