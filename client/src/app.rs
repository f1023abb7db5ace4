//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` is the composition root. It builds the catalog view, the tool
//! registry, and the session dispatcher exactly once, then hands them to
//! every route through Leptos context. Nothing below this component
//! constructs or mutates the registry.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use catalog::{Catalog, Dispatcher};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    admin::AdminPage, category::CategoryPage, home::HomePage, not_found::NotFoundPage, tool::ToolPage,
    tools::ToolsPage,
};
use crate::state::{admin::AdminState, notices::NoticeState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the catalog, registry, dispatcher, and shared state contexts and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = Catalog::builtin();
    let registry = crate::tools::build_registry();
    let dispatcher = StoredValue::new(Dispatcher::new(registry.clone()));

    let ui = RwSignal::new(UiState::default());
    let notices = RwSignal::new(NoticeState::default());
    let admin = RwSignal::new(AdminState::default());

    provide_context(catalog);
    provide_context(registry);
    provide_context(dispatcher);
    provide_context(ui);
    provide_context(notices);
    provide_context(admin);

    // Effects only run in the browser, after hydration, so the stored
    // preference never causes a server/client markup mismatch.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/toolbox.css"/>
        <Title text="Toolbox"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("tools") view=ToolsPage/>
                    <Route path=(StaticSegment("tools"), ParamSegment("id")) view=ToolPage/>
                    <Route path=(StaticSegment("categories"), ParamSegment("id")) view=CategoryPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
