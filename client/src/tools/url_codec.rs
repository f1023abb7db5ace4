//! Percent-encoding for URL components.

#[cfg(test)]
#[path = "url_codec_test.rs"]
mod url_codec_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::clipboard::copy_text;

pub fn encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decode a percent-encoded component. `+` is treated as a space, as in
/// form-encoded query strings.
///
/// # Errors
///
/// Returns a message when the decoded bytes are not UTF-8.
pub fn decode(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| "Decoded bytes are not valid UTF-8 text.".to_owned())
}

#[component]
pub fn UrlCodec() -> impl IntoView {
    let plain = RwSignal::new(String::new());
    let encoded = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_plain = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        encoded.set(encode(&text));
        plain.set(text);
        error.set(None);
    };
    let on_encoded = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        match decode(&text) {
            Ok(decoded) => {
                plain.set(decoded);
                error.set(None);
            }
            Err(message) => error.set(Some(message)),
        }
        encoded.set(text);
    };

    view! {
        <div class="tool-widget url-codec">
            <label class="tool-widget__field">
                "Decoded"
                <textarea rows="4" prop:value=move || plain.get() on:input=on_plain></textarea>
            </label>
            <label class="tool-widget__field">
                "Encoded"
                <textarea rows="4" prop:value=move || encoded.get() on:input=on_encoded></textarea>
            </label>
            {move || match error.get() {
                Some(message) => view! { <p class="tool-widget__error">{message}</p> }.into_any(),
                None => view! {
                    <button class="btn btn--small" on:click=move |_| {
                        encoded.with_untracked(|text| copy_text(text));
                    }>
                        "Copy encoded"
                    </button>
                }
                    .into_any(),
            }}
        </div>
    }
}
