//! Home Page

use checker_core::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home" data-page=AppRoute::Home.page_name()>
            <h1 class="text-2xl font-bold">"补剂检查"</h1>
            <p class="mt-2">
                <A href=AppRoute::Checker.path()>{AppRoute::Checker.label()}</A>
            </p>
        </section>
    }
}
