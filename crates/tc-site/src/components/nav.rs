//! Site navigation component

use crate::state::use_site_state;
use leptos::*;
use tc_core::routes::{COMPARE_PREFIX, TOOLS_PREFIX};

#[component]
pub fn SiteNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);
    let site_name = use_site_state()
        .map(|state| state.config.site_name.clone())
        .unwrap_or_else(|| "Tool Compare".to_string());

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="text-xl font-bold text-gray-900">{site_name}</a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        <a href=TOOLS_PREFIX class="text-gray-600 hover:text-gray-900 transition">"Reviews"</a>
                        <a href=COMPARE_PREFIX class="text-gray-600 hover:text-gray-900 transition">"Comparisons"</a>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            aria-label="Toggle menu"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        <a href=TOOLS_PREFIX class="block text-gray-600 hover:text-gray-900">"Reviews"</a>
                        <a href=COMPARE_PREFIX class="block text-gray-600 hover:text-gray-900">"Comparisons"</a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
