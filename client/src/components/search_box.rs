//! Catalog search form.
//!
//! Submitting navigates to `/tools?q=...`; the tools page does the actual
//! filtering, so a search result is always a shareable URL.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::ui::search_href;

/// Search input that submits to the tools listing.
#[component]
pub fn SearchBox(
    #[prop(optional, into)] initial: String,
    #[prop(optional)] large: bool,
    #[prop(default = "Search tools…")] placeholder: &'static str,
) -> impl IntoView {
    let draft = RwSignal::new(initial);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let href = draft.with_untracked(|q| search_href(q));
        navigate(&href, NavigateOptions::default());
    };

    view! {
        <form class="search-box" class:search-box--large=large role="search" on:submit=on_submit>
            <input
                class="search-box__input"
                type="search"
                name="q"
                placeholder=placeholder
                aria-label="Search tools"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <button class="search-box__submit btn btn--primary" type="submit">
                "Search"
            </button>
        </form>
    }
}
