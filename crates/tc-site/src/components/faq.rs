//! FAQ accordion

use leptos::*;
use tc_core::model::Faq;

/// Answers stay in the markup so crawlers and script-less readers get them
#[component]
pub fn FaqAccordion(faqs: Vec<Faq>) -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="container mx-auto px-4 max-w-3xl">
                <h2 class="text-3xl font-bold text-gray-900 mb-8">"Frequently asked questions"</h2>
                {faqs.into_iter().map(|faq| view! { <FaqItem faq=faq/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FaqItem(faq: Faq) -> impl IntoView {
    let (open, set_open) = create_signal(false);

    view! {
        <details class="border-b border-gray-200 py-4" open=move || open.get()>
            <summary
                class="flex justify-between items-center text-lg font-semibold text-gray-900"
                on:click=move |ev| {
                    ev.prevent_default();
                    set_open.update(|v| *v = !*v);
                }
            >
                {faq.question}
                <span class="text-gray-500">{move || if open.get() { "−" } else { "+" }}</span>
            </summary>
            <p class="mt-3 text-gray-600">{faq.answer}</p>
        </details>
    }
}
