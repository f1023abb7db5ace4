//! Fallback view for tool ids without a registered widget.

#[cfg(test)]
#[path = "not_implemented_test.rs"]
mod not_implemented_test;

use leptos::prelude::*;

use catalog::{Catalog, CategoryDescriptor, ToolDescriptor};

use crate::components::tool_card::ToolCard;
use crate::util::icons::icon_glyph;

/// How many sibling tools to suggest below the fallback message.
pub const SUGGESTION_LIMIT: usize = 4;

pub fn fallback_heading(tool: Option<&ToolDescriptor>) -> String {
    match tool {
        Some(tool) => format!("{} is coming soon", tool.name),
        None => "Tool not found".to_owned(),
    }
}

/// Other tools from the same category, excluding `tool` itself.
pub fn suggestions(catalog: &Catalog, tool: &ToolDescriptor) -> Vec<&'static ToolDescriptor> {
    catalog
        .list_by_category(tool.category)
        .into_iter()
        .filter(|other| other.id != tool.id)
        .take(SUGGESTION_LIMIT)
        .collect()
}

/// Rendered in place of a tool widget when the dispatcher cannot resolve
/// the requested id.
#[component]
pub fn NotImplemented(#[prop(into)] tool_id: String) -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let tool = catalog.tool(&tool_id);
    let category: Option<&'static CategoryDescriptor> = tool.and_then(|t| catalog.category_of(t));
    let heading = fallback_heading(tool);
    let message = match tool {
        Some(tool) => format!("We're still building {}. Try one of these in the meantime.", tool.name),
        None => format!("There is no tool with the id \"{tool_id}\"."),
    };
    let related = tool.map(|t| suggestions(&catalog, t)).unwrap_or_default();
    let icon = icon_glyph(tool.map_or("", |t| t.icon));

    view! {
        <section class="not-implemented">
            <span class="not-implemented__icon" aria-hidden="true">{icon}</span>
            <h2 class="not-implemented__title">{heading}</h2>
            <p class="not-implemented__message">{message}</p>
            <div class="not-implemented__related tool-grid">
                {related.into_iter().map(|tool| view! { <ToolCard tool=tool/> }).collect::<Vec<_>>()}
            </div>
            <p class="not-implemented__links">
                {category.map(|c| view! { <a href=c.path()>{format!("More {}", c.name)}</a> })}
                <a href="/tools">"Browse all tools"</a>
            </p>
        </section>
    }
}
