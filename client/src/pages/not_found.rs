//! Fallback route for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found."</h1>
            <p>
                <a href="/">"Back to the home page"</a>
            </p>
        </section>
    }
}
