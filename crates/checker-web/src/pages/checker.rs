//! Checker Page

use checker_core::AppRoute;
use leptos::prelude::*;

#[component]
pub fn CheckerPage() -> impl IntoView {
    view! {
        <section class="checker" data-page=AppRoute::Checker.page_name()>
            <h1 class="text-2xl font-bold">{AppRoute::Checker.label()}</h1>
        </section>
    }
}
