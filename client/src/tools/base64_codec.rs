//! Base64 encoder and decoder.

#[cfg(test)]
#[path = "base64_codec_test.rs"]
mod base64_codec_test;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::clipboard::copy_text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

pub fn encode(input: &str, url_safe: bool) -> String {
    if url_safe {
        URL_SAFE_NO_PAD.encode(input.as_bytes())
    } else {
        STANDARD.encode(input.as_bytes())
    }
}

/// Decode Base64 text into a UTF-8 string.
///
/// Surrounding whitespace is ignored. Both alphabets are accepted; the
/// URL-safe alphabet may omit padding.
///
/// # Errors
///
/// Returns a user-facing message when the input is not Base64 or does not
/// decode to UTF-8.
pub fn decode(input: &str) -> Result<String, String> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(&compact)
        .or_else(|_| URL_SAFE_NO_PAD.decode(compact.trim_end_matches('=')))
        .map_err(|e| format!("Invalid Base64: {e}"))?;
    String::from_utf8(bytes).map_err(|_| "Decoded bytes are not valid UTF-8 text.".to_owned())
}

pub fn convert(input: &str, direction: Direction, url_safe: bool) -> Result<String, String> {
    match direction {
        Direction::Encode => Ok(encode(input, url_safe)),
        Direction::Decode => decode(input),
    }
}

#[component]
pub fn Base64Codec() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let direction = RwSignal::new(Direction::Encode);
    let url_safe = RwSignal::new(false);
    let result = Memo::new(move |_| input.with(|text| convert(text, direction.get(), url_safe.get())));

    view! {
        <div class="tool-widget base64-codec">
            <div class="tool-widget__controls">
                <button
                    class="btn"
                    class:btn--active=move || direction.get() == Direction::Encode
                    on:click=move |_| direction.set(Direction::Encode)
                >
                    "Encode"
                </button>
                <button
                    class="btn"
                    class:btn--active=move || direction.get() == Direction::Decode
                    on:click=move |_| direction.set(Direction::Decode)
                >
                    "Decode"
                </button>
                <label class="tool-widget__check">
                    <input
                        type="checkbox"
                        prop:checked=move || url_safe.get()
                        on:change=move |_| url_safe.update(|v| *v = !*v)
                    />
                    "URL-safe"
                </label>
            </div>
            <textarea
                class="tool-widget__input"
                rows="6"
                placeholder="Input"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            {move || match result.get() {
                Ok(text) => {
                    let copy_value = text.clone();
                    view! {
                        <div class="tool-widget__output">
                            <pre>{text}</pre>
                            <button class="btn btn--small" on:click=move |_| {
                                copy_text(&copy_value);
                            }>
                                "Copy"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                Err(message) => view! { <p class="tool-widget__error">{message}</p> }.into_any(),
            }}
        </div>
    }
}
