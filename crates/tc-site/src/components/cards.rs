//! Card components

use leptos::*;
use tc_core::model::{Contender, Feature};
use tc_core::routes::tool_path;

/// Link to another page of the site
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    pub href: String,
    pub label: String,
    pub detail: String,
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{feature.title}</h3>
            <p class="text-gray-600">{feature.description}</p>
        </div>
    }
}

/// Contender summary; links to the review when one exists, otherwise out
#[component]
pub fn ContenderCard(
    contender: Contender,
    average: Option<f64>,
    #[prop(optional)] winner: bool,
) -> impl IntoView {
    let (href, cta, rel) = match &contender.review_slug {
        Some(slug) => (tool_path(slug), "Read review", None),
        None => (contender.url.clone(), "Visit site", Some("nofollow sponsored")),
    };
    let border = if winner { "border-2 border-indigo-600" } else { "border border-gray-200" };

    view! {
        <div class=format!("bg-white rounded-xl shadow p-6 {}", border)>
            <Show when=move || winner>
                <span class="inline-block px-3 py-1 bg-indigo-100 text-indigo-700 rounded-full text-sm font-medium mb-3">
                    "Our pick"
                </span>
            </Show>
            <h3 class="text-xl font-semibold text-gray-900 mb-1">{contender.name}</h3>
            <p class="text-gray-600 mb-4">{contender.description}</p>
            <p class="text-3xl font-bold text-gray-900 mb-4">
                {average.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "n/a".to_string())}
                <span class="text-base font-normal text-gray-500">" / 10"</span>
            </p>
            <a href=href rel=rel class="text-indigo-600 hover:text-indigo-800 font-medium">{cta}" →"</a>
        </div>
    }
}

#[component]
pub fn PageCard(link: PageLink) -> impl IntoView {
    view! {
        <a href=link.href class="block bg-white rounded-lg shadow p-6 hover:shadow-lg transition">
            <h3 class="font-semibold text-gray-900 mb-2">{link.label}</h3>
            <p class="text-sm text-gray-600">{link.detail}</p>
        </a>
    }
}

#[component]
pub fn PageCardGrid(links: Vec<PageLink>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6">
            {links.into_iter().map(|link| view! { <PageCard link=link/> }).collect_view()}
        </div>
    }
}
