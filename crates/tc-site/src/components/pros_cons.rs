//! Pros and cons lists

use leptos::*;

#[component]
pub fn ProsCons(pros: Vec<String>, cons: Vec<String>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <div class="bg-green-50 rounded-xl p-6">
                <h3 class="text-lg font-semibold text-green-800 mb-4">"Pros"</h3>
                <ul class="space-y-2">
                    {pros.into_iter().map(|item| view! {
                        <li class="flex items-start">
                            <span class="text-green-600 mr-2">"✓"</span>
                            <span class="text-gray-700">{item}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
            <div class="bg-red-50 rounded-xl p-6">
                <h3 class="text-lg font-semibold text-red-800 mb-4">"Cons"</h3>
                <ul class="space-y-2">
                    {cons.into_iter().map(|item| view! {
                        <li class="flex items-start">
                            <span class="text-red-500 mr-2">"✗"</span>
                            <span class="text-gray-700">{item}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
