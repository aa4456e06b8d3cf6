//! Legal Page

use checker_core::{AppRoute, legal};
use leptos::prelude::*;

#[component]
pub fn LegalPage() -> impl IntoView {
    view! {
        <section class="legal" data-page=AppRoute::Legal.page_name()>
            <h1 class="text-2xl font-bold text-legal">{AppRoute::Legal.label()}</h1>
            <p class="mt-2">{legal::NOTICE_TEXT}</p>
        </section>
    }
}
