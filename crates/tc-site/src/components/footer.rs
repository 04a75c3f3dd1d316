//! Footer component

use crate::state::use_site_state;
use leptos::*;
use tc_core::routes::{COMPARE_PREFIX, TOOLS_PREFIX};

#[component]
pub fn Footer() -> impl IntoView {
    let state = use_site_state();
    let year = state.as_ref().map(|s| s.year());
    let site_name = state
        .map(|s| s.config.site_name.clone())
        .unwrap_or_else(|| "Tool Compare".to_string());

    view! {
        <footer class="bg-gray-900 text-gray-400 py-12">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between gap-6">
                    <div>
                        <p class="text-white font-semibold mb-2">{site_name.clone()}</p>
                        <p class="text-sm max-w-md">
                            "Independent reviews. We may earn a commission when you buy through our links; it never changes our scores."
                        </p>
                    </div>
                    <div class="flex space-x-6 text-sm">
                        <a href="/" class="hover:text-white">"Home"</a>
                        <a href=TOOLS_PREFIX class="hover:text-white">"Reviews"</a>
                        <a href=COMPARE_PREFIX class="hover:text-white">"Comparisons"</a>
                        <a href="/sitemap.xml" class="hover:text-white">"Sitemap"</a>
                    </div>
                </div>
                <p class="text-xs mt-8">
                    "© "{year.map(|y| y.to_string())}" "{site_name}
                </p>
            </div>
        </footer>
    }
}
