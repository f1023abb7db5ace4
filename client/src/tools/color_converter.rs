//! HEX / RGB / HSL color converter.
//!
//! Parsing and the conversion math live in [`crate::util::color`]; this
//! widget only formats the three notations for a parsed color.

#[cfg(test)]
#[path = "color_converter_test.rs"]
mod color_converter_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::clipboard::copy_text;
use crate::util::color::parse_color;

/// A color rendered in every supported notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorNotations {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}

/// Parse any supported notation and render all of them.
///
/// # Errors
///
/// Returns a user-facing message when the input is not a recognized color.
pub fn convert(input: &str) -> Result<ColorNotations, String> {
    let rgb = parse_color(input).ok_or_else(|| format!("\"{}\" is not a HEX, rgb(), or hsl() color.", input.trim()))?;
    Ok(ColorNotations { hex: rgb.to_hex(), rgb: rgb.to_css(), hsl: rgb.to_hsl().to_css() })
}

#[component]
pub fn ColorConverter() -> impl IntoView {
    let input = RwSignal::new("#3b82f6".to_owned());
    let result = Memo::new(move |_| input.with(|text| convert(text)));

    let row = |label: &'static str, value: String| {
        let copy_value = value.clone();
        view! {
            <div class="color-converter__row">
                <dt>{label}</dt>
                <dd>
                    <code>{value}</code>
                    <button class="btn btn--small" on:click=move |_| {
                        copy_text(&copy_value);
                    }>
                        "Copy"
                    </button>
                </dd>
            </div>
        }
    };

    view! {
        <div class="tool-widget color-converter">
            <input
                class="tool-widget__input"
                type="text"
                placeholder="#ff8800, rgb(255, 136, 0), hsl(32, 100%, 50%)"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            {move || match result.get() {
                Ok(notations) => {
                    let swatch = format!("background-color: {}", notations.hex);
                    view! {
                        <div class="tool-widget__output color-converter__output">
                            <div class="color-converter__swatch" style=swatch></div>
                            <dl>
                                {row("HEX", notations.hex)}
                                {row("RGB", notations.rgb)}
                                {row("HSL", notations.hsl)}
                            </dl>
                        </div>
                    }
                        .into_any()
                }
                Err(message) => view! { <p class="tool-widget__error">{message}</p> }.into_any(),
            }}
        </div>
    }
}
