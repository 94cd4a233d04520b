//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{placement::PlacementPage, search::SearchPage};
use crate::state::catalog::CatalogState;
use crate::state::notify::NotifyState;
use crate::state::result::ResultState;
use crate::state::search::SearchState;
use crate::state::selection::SelectionState;
use crate::state::session::Session;
use crate::util::dark_mode;

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
/// Provides the session context and one `RwSignal` per state domain, then
/// sets up client-side routing between the two screens.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Session::load_or_create());

    let selection = RwSignal::new(SelectionState::default());
    let catalog = RwSignal::new(CatalogState::default());
    let result = RwSignal::new(ResultState::default());
    let search = RwSignal::new(SearchState::default());
    let notify = RwSignal::new(NotifyState::default());

    provide_context(selection);
    provide_context(catalog);
    provide_context(result);
    provide_context(search);
    provide_context(notify);

    let dark = RwSignal::new(false);
    Effect::new(move || {
        let preferred = dark_mode::read_preference();
        dark_mode::apply(preferred);
        dark.set(preferred);
    });
    let on_toggle_dark = move |_| dark.set(dark_mode::toggle(dark.get_untracked()));

    view! {
        <Stylesheet id="leptos" href="/pkg/roomcraft.css"/>
        <Title text="RoomCraft"/>

        <Router>
            <nav class="top-nav">
                <span class="top-nav__brand">"RoomCraft"</span>
                <A href="/">"Place Furniture"</A>
                <A href="/search">"Find Furniture"</A>
                <button class="top-nav__dark-toggle" on:click=on_toggle_dark>
                    {move || if dark.get() { "Light" } else { "Dark" }}
                </button>
            </nav>

            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PlacementPage/>
                <Route path=StaticSegment("search") view=SearchPage/>
            </Routes>
        </Router>

        <ToastStack/>
    }
}
