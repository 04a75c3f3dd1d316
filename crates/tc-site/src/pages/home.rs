//! Home page

use super::{comparison_link, review_link};
use crate::components::{PageCardGrid, SeoHead};
use crate::state::use_site_state;
use leptos::*;
use tc_core::routes::{COMPARE_PREFIX, TOOLS_PREFIX};
use tc_core::seo;
use tracing::warn;

const FEATURED_COUNT: usize = 6;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_site_state();

    let (meta, comparisons, reviews) = match &state {
        Some(state) => {
            let meta = seo::home_meta(&state.catalog, &state.config)
                .map_err(|e| warn!("Home page metadata: {}", e))
                .ok();
            let comparisons = state
                .catalog
                .comparisons()
                .take(FEATURED_COUNT)
                .map(comparison_link)
                .collect::<Vec<_>>();
            let reviews = state
                .catalog
                .reviews()
                .take(FEATURED_COUNT)
                .map(review_link)
                .collect::<Vec<_>>();
            (meta, comparisons, reviews)
        }
        None => (None, Vec::new(), Vec::new()),
    };

    view! {
        {meta.map(|meta| view! { <SeoHead meta=meta/> })}
        <div>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Pick the right tool, faster"</h1>
                        <p class="text-xl text-gray-300 mb-8">
                            "Hands-on reviews and scored head-to-head comparisons of the software you are about to pay for."
                        </p>
                        <a href=COMPARE_PREFIX class="px-8 py-4 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition">
                            "See comparisons"
                        </a>
                    </div>
                </div>
            </section>

            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="flex justify-between items-baseline mb-8">
                        <h2 class="text-3xl font-bold text-gray-900">"Comparisons"</h2>
                        <a href=COMPARE_PREFIX class="text-indigo-600 hover:text-indigo-800">"All comparisons →"</a>
                    </div>
                    <PageCardGrid links=comparisons/>
                </div>
            </section>

            <section class="py-16">
                <div class="container mx-auto px-4">
                    <div class="flex justify-between items-baseline mb-8">
                        <h2 class="text-3xl font-bold text-gray-900">"Reviews"</h2>
                        <a href=TOOLS_PREFIX class="text-indigo-600 hover:text-indigo-800">"All reviews →"</a>
                    </div>
                    <PageCardGrid links=reviews/>
                </div>
            </section>
        </div>
    }
}
