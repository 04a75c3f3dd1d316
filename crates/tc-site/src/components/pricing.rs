//! Pricing plan cards

use leptos::*;
use tc_core::model::PricingPlan;

#[component]
pub fn PricingTable(plans: Vec<PricingPlan>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-8">
            {plans.into_iter().map(|plan| view! { <PlanCard plan=plan/> }).collect_view()}
        </div>
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    let highlighted = plan.highlighted;
    let card = if highlighted {
        "bg-gradient-to-b from-indigo-600 to-purple-700 rounded-xl shadow-xl p-8 text-white"
    } else {
        "bg-white rounded-xl shadow-lg p-8"
    };
    let period = (!plan.period.is_empty()).then(|| format!("/{}", plan.period));

    view! {
        <div class=card>
            <div class="text-center mb-8">
                <Show when=move || highlighted>
                    <span class="inline-block px-3 py-1 bg-white/20 rounded-full text-sm font-medium mb-4">"Best value"</span>
                </Show>
                <h3 class="text-xl font-semibold mb-2">{plan.name}</h3>
                <div class="text-4xl font-bold mb-1">
                    {plan.price}
                    <span class="text-lg font-normal opacity-70">{period}</span>
                </div>
            </div>
            <ul class="space-y-4">
                {plan.features.into_iter().map(|text| view! { <PricingFeature text=text/> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn PricingFeature(text: String) -> impl IntoView {
    view! {
        <li class="flex items-center">
            <span class="text-green-500 mr-3">"✓"</span>
            <span>{text}</span>
        </li>
    }
}
