//! 404 page
//!
//! Rendered for any unknown path or slug; it also sets the response status.

use axum::http::StatusCode;
use leptos::*;
use leptos_axum::ResponseOptions;
use leptos_meta::*;
use tc_core::routes::{COMPARE_PREFIX, TOOLS_PREFIX};

#[component]
pub fn NotFound() -> impl IntoView {
    if let Some(response) = use_context::<ResponseOptions>() {
        response.set_status(StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page not found"/>
        <Meta name="robots" content="noindex"/>
        <section class="py-24">
            <div class="container mx-auto px-4 max-w-xl text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Page not found"</h1>
                <p class="text-gray-600 mb-8">"That review or comparison does not exist, or it has moved."</p>
                <div class="flex justify-center space-x-4">
                    <a href=TOOLS_PREFIX class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition">"Browse reviews"</a>
                    <a href=COMPARE_PREFIX class="px-6 py-3 bg-gray-100 hover:bg-gray-200 text-gray-900 font-semibold rounded-lg transition">"Browse comparisons"</a>
                </div>
            </div>
        </section>
    }
}
