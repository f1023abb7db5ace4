//! Bulk version 4 UUID generator.

#[cfg(test)]
#[path = "uuid_generator_test.rs"]
mod uuid_generator_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::util::clipboard::copy_text;

pub const MAX_COUNT: usize = 100;

/// Output formatting options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UuidFormat {
    pub uppercase: bool,
    pub hyphens: bool,
}

impl UuidFormat {
    pub const STANDARD: Self = Self { uppercase: false, hyphens: true };
}

pub fn format_uuid(id: Uuid, format: UuidFormat) -> String {
    let text = if format.hyphens {
        id.hyphenated().to_string()
    } else {
        id.simple().to_string()
    };
    if format.uppercase { text.to_ascii_uppercase() } else { text }
}

/// Parse the requested count, clamped to `1..=MAX_COUNT`.
pub fn parse_count(raw: &str) -> usize {
    raw.trim().parse::<usize>().unwrap_or(1).clamp(1, MAX_COUNT)
}

pub fn generate(count: usize, format: UuidFormat) -> Vec<String> {
    (0..count.clamp(1, MAX_COUNT)).map(|_| format_uuid(Uuid::new_v4(), format)).collect()
}

#[component]
pub fn UuidGenerator() -> impl IntoView {
    let count = RwSignal::new(1_usize);
    let uppercase = RwSignal::new(false);
    let hyphens = RwSignal::new(true);
    let output = RwSignal::new(Vec::<String>::new());

    let regenerate = move || {
        let format = UuidFormat { uppercase: uppercase.get_untracked(), hyphens: hyphens.get_untracked() };
        output.set(generate(count.get_untracked(), format));
    };

    view! {
        <div class="tool-widget uuid-generator">
            <div class="tool-widget__controls">
                <label class="tool-widget__field">
                    "How many"
                    <input
                        type="number"
                        min="1"
                        max=MAX_COUNT.to_string()
                        prop:value=move || count.get().to_string()
                        on:input=move |ev| count.set(parse_count(&event_target_value(&ev)))
                    />
                </label>
                <label class="tool-widget__check">
                    <input
                        type="checkbox"
                        prop:checked=move || uppercase.get()
                        on:change=move |_| uppercase.update(|v| *v = !*v)
                    />
                    "Uppercase"
                </label>
                <label class="tool-widget__check">
                    <input
                        type="checkbox"
                        prop:checked=move || hyphens.get()
                        on:change=move |_| hyphens.update(|v| *v = !*v)
                    />
                    "Hyphens"
                </label>
                <button class="btn btn--primary" on:click=move |_| regenerate()>
                    "Generate"
                </button>
                <button
                    class="btn"
                    disabled=move || output.with(Vec::is_empty)
                    on:click=move |_| {
                        output.with_untracked(|ids| copy_text(&ids.join("\n")));
                    }
                >
                    "Copy"
                </button>
            </div>
            <ul class="tool-widget__output uuid-generator__list">
                {move || {
                    output
                        .get()
                        .into_iter()
                        .map(|id| view! { <li><code>{id}</code></li> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
