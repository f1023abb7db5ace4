//! JSON pretty-printer, minifier, and validator.

#[cfg(test)]
#[path = "json_formatter_test.rs"]
mod json_formatter_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::clipboard::copy_text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonMode {
    Pretty,
    Minify,
}

/// Reformat a JSON document.
///
/// # Errors
///
/// Returns the parser's message with line and column when the input is not
/// valid JSON.
pub fn format_json(input: &str, mode: JsonMode) -> Result<String, String> {
    let value: serde_json::Value = serde_json::from_str(input).map_err(|e| describe_error(&e))?;
    let text = match mode {
        JsonMode::Pretty => serde_json::to_string_pretty(&value),
        JsonMode::Minify => serde_json::to_string(&value),
    };
    text.map_err(|e| e.to_string())
}

pub fn describe_error(err: &serde_json::Error) -> String {
    format!("Invalid JSON at line {}, column {}: {}", err.line(), err.column(), err)
}

#[component]
pub fn JsonFormatter() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let mode = RwSignal::new(JsonMode::Pretty);
    let result = Memo::new(move |_| {
        input.with(|text| if text.trim().is_empty() { None } else { Some(format_json(text, mode.get())) })
    });

    view! {
        <div class="tool-widget json-formatter">
            <div class="tool-widget__controls">
                <button
                    class="btn"
                    class:btn--active=move || mode.get() == JsonMode::Pretty
                    on:click=move |_| mode.set(JsonMode::Pretty)
                >
                    "Pretty"
                </button>
                <button
                    class="btn"
                    class:btn--active=move || mode.get() == JsonMode::Minify
                    on:click=move |_| mode.set(JsonMode::Minify)
                >
                    "Minify"
                </button>
            </div>
            <textarea
                class="tool-widget__input tool-widget__input--mono"
                rows="10"
                placeholder="Paste JSON here"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            {move || match result.get() {
                None => ().into_any(),
                Some(Ok(text)) => {
                    let copy_value = text.clone();
                    view! {
                        <div class="tool-widget__output">
                            <p class="tool-widget__ok">"Valid JSON"</p>
                            <pre class="tool-widget__code">{text}</pre>
                            <button class="btn btn--small" on:click=move |_| {
                                copy_text(&copy_value);
                            }>
                                "Copy"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                Some(Err(message)) => view! { <p class="tool-widget__error">{message}</p> }.into_any(),
            }}
        </div>
    }
}
