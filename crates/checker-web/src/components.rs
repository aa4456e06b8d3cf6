//! UI Components

use checker_core::{AppRoute, legal};
use leptos::prelude::*;
use leptos_router::components::A;

/// Fixed disclaimer banner with a link to the full statement
#[component]
pub fn LegalNotice() -> impl IntoView {
    view! {
        <div class=legal::BANNER_CLASS data-testid="legal-notice">
            <p class=legal::TEXT_CLASS>
                {legal::NOTICE_TEXT}
                <A href=legal::FULL_STATEMENT_ROUTE.path() attr:class="underline">
                    {legal::FULL_STATEMENT_LABEL}
                </A>
            </p>
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="bg-white shadow px-4 py-3" data-testid="navbar">
            <ul class="flex gap-6">
                {AppRoute::ALL
                    .into_iter()
                    .map(|route| view! {
                        <li class="hover:text-legal">
                            <A href=route.path()>{route.label()}</A>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-100 text-center text-xs text-gray-500 p-4" data-testid="footer">
            <p>"© 补剂检查 · 仅供参考"</p>
        </footer>
    }
}
