//! Top navigation bar.

use leptos::prelude::*;

use catalog::Catalog;

use crate::components::search_box::SearchBox;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Site header with brand, category navigation, search, and theme toggle.
#[component]
pub fn Header() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };
    let on_toggle_nav = move |_| ui.update(|u| u.nav_open = !u.nav_open);
    let close_nav = move |_| ui.update(|u| u.nav_open = false);

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">
                <span class="site-header__logo" aria-hidden="true">"🧰"</span>
                "Toolbox"
            </a>
            <button
                class="site-header__menu"
                aria-label="Toggle navigation"
                on:click=on_toggle_nav
            >
                "☰"
            </button>
            <nav class="site-header__nav" class:site-header__nav--open=move || ui.get().nav_open on:click=close_nav>
                <a href="/tools">"All tools"</a>
                {catalog
                    .categories()
                    .iter()
                    .map(|category| view! { <a href=category.path()>{category.name}</a> })
                    .collect::<Vec<_>>()}
            </nav>
            <SearchBox/>
            <button
                class="site-header__theme"
                title="Toggle dark mode"
                aria-label="Toggle dark mode"
                on:click=on_toggle_theme
            >
                {move || dark_mode::toggle_icon(ui.get().dark_mode)}
            </button>
        </header>
    }
}
