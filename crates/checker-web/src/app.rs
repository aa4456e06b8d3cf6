//! Main App Component

use checker_core::{AppRoute, Theme};
use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::components::{Footer, LegalNotice, Navbar};
use crate::pages::{CheckerPage, HomePage, LegalPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Layout />
        </Router>
    }
}

/// Page skeleton; must sit inside the router to read the location
#[component]
fn Layout() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let pathname = location.pathname.get();
        match AppRoute::resolve(&pathname) {
            Some(route) => tracing::debug!("Route {} -> {}", pathname, route.page_name()),
            None => tracing::debug!("Route {} -> (none)", pathname),
        }
    });

    let theme_css = Theme::default().css_variables();

    view! {
        <style>{theme_css}</style>
        <div class="min-h-screen flex flex-col">
            <LegalNotice />
            <Navbar />
            <main class="flex-grow p-4">
                <Routes fallback=|| view! { <Unmatched /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/check") view=CheckerPage />
                    <Route path=path!("/legal") view=LegalPage />
                </Routes>
            </main>
            <Footer />
        </div>
    }
}

/// Empty content region for paths outside the route table
#[component]
fn Unmatched() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    tracing::warn!("No page for {}", pathname);
}
