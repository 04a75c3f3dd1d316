//! Review pages

use super::{comparison_link, review_link, NotFound};
use crate::components::*;
use crate::state::{use_site_state, SiteState};
use leptos::*;
use leptos_router::*;
use std::collections::BTreeMap;
use tc_core::routes::TOOLS_PREFIX;
use tc_core::seo::{self, SeoMeta};
use tc_core::verdict::fill_year;
use tc_core::{Catalog, ReviewPage};
use tracing::warn;

/// Review links grouped by category, categories in name order
pub fn reviews_by_category(catalog: &Catalog) -> BTreeMap<String, Vec<PageLink>> {
    let mut groups: BTreeMap<String, Vec<PageLink>> = BTreeMap::new();
    for page in catalog.reviews() {
        groups
            .entry(page.category.clone())
            .or_default()
            .push(review_link(page));
    }
    groups
}

#[component]
pub fn ToolsIndexPage() -> impl IntoView {
    let state = use_site_state();
    let meta = state.as_ref().and_then(|s| {
        seo::listing_meta(
            "Reviews",
            "In-depth reviews of every tool we have tested.",
            TOOLS_PREFIX,
            &s.config,
        )
        .map_err(|e| warn!("Review index metadata: {}", e))
        .ok()
    });
    let groups = state
        .as_ref()
        .map(|s| reviews_by_category(&s.catalog))
        .unwrap_or_default();

    view! {
        {meta.map(|meta| view! { <SeoHead meta=meta/> })}
        <section class="py-16">
            <div class="container mx-auto px-4">
                <h1 class="text-4xl font-bold text-gray-900 mb-10">"Reviews"</h1>
                {groups
                    .into_iter()
                    .map(|(category, links)| view! {
                        <h2 class="text-2xl font-semibold text-gray-900 mt-10 mb-6">{category}</h2>
                        <PageCardGrid links=links/>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// `/tools/:slug`
#[component]
pub fn ToolPage() -> impl IntoView {
    let params = use_params_map();
    let state = use_site_state();

    move || {
        let slug = params.with(|p| p.get("slug").cloned().unwrap_or_default());
        let found = state
            .as_ref()
            .and_then(|s| s.catalog.review(&slug).cloned().map(|page| (s, page)));

        match found {
            Some((state, page)) => render_review(state, page),
            None => view! { <NotFound/> }.into_view(),
        }
    }
}

fn render_review(state: &SiteState, page: ReviewPage) -> View {
    let meta = seo::review_meta(&page, &state.config)
        .map_err(|e| warn!("Review metadata for {}: {}", page.slug, e))
        .ok();
    let related = page
        .related
        .iter()
        .filter_map(|slug| state.catalog.review(slug))
        .map(review_link)
        .collect::<Vec<_>>();
    let comparisons = state
        .catalog
        .comparisons_featuring(&page.tool.key)
        .into_iter()
        .map(comparison_link)
        .collect::<Vec<_>>();

    view! {
        <ReviewPageTemplate
            page=page
            meta=meta
            year=state.year()
            related=related
            comparisons=comparisons
        />
    }
    .into_view()
}

/// Single-tool review
#[component]
pub fn ReviewPageTemplate(
    page: ReviewPage,
    meta: Option<SeoMeta>,
    year: i32,
    related: Vec<PageLink>,
    comparisons: Vec<PageLink>,
) -> impl IntoView {
    let headline = if page.hero.headline.is_empty() {
        format!("{} Review {}", page.tool.name, year)
    } else {
        fill_year(&page.hero.headline, year)
    };
    let subheadline = fill_year(&page.hero.subheadline, year);
    let verdict = fill_year(&page.verdict, year);
    let crumbs = meta.as_ref().map(|m| m.breadcrumbs.clone()).unwrap_or_default();
    let updated = page
        .last_modified()
        .map(|date| format!("Updated {}", date.format("%B %-d, %Y")));

    let features = (!page.features.is_empty()).then(|| {
        view! {
            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-gray-900 mb-8">"Key features"</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        {page.features.into_iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
                    </div>
                </div>
            </section>
        }
    });
    let pricing = (!page.pricing.is_empty()).then(|| {
        view! {
            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-gray-900 mb-8">"Pricing"</h2>
                    <PricingTable plans=page.pricing/>
                </div>
            </section>
        }
    });
    let faqs = (!page.faqs.is_empty()).then(|| view! { <FaqAccordion faqs=page.faqs/> });
    let related = (!related.is_empty()).then(|| {
        view! {
            <h2 class="text-2xl font-bold text-gray-900 mb-6">"Related reviews"</h2>
            <PageCardGrid links=related/>
        }
    });
    let comparisons = (!comparisons.is_empty()).then(|| {
        view! {
            <h2 class="text-2xl font-bold text-gray-900 mt-10 mb-6">"Compared with"</h2>
            <PageCardGrid links=comparisons/>
        }
    });

    view! {
        {meta.map(|meta| view! { <SeoHead meta=meta/> })}
        <article>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4 max-w-4xl">
                    <Breadcrumbs crumbs=crumbs/>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">{headline}</h1>
                    <p class="text-xl text-gray-300 mb-6">{subheadline}</p>
                    <div class="flex items-center space-x-6">
                        <span class="text-3xl font-bold">{format!("{:.1}", page.rating)}
                            <span class="text-lg font-normal text-gray-400">" / 5"</span>
                        </span>
                        <a href=page.tool.url.clone() rel="nofollow sponsored" class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-lg transition">
                            "Visit "{page.tool.name.clone()}
                        </a>
                    </div>
                    <p class="text-sm text-gray-400 mt-6">{updated}</p>
                </div>
            </section>

            {features}

            <section class="py-16">
                <div class="container mx-auto px-4 max-w-4xl">
                    <ProsCons pros=page.pros cons=page.cons/>
                </div>
            </section>

            {pricing}

            <section class="py-16">
                <div class="container mx-auto px-4 max-w-3xl">
                    <h2 class="text-3xl font-bold text-gray-900 mb-4">"Our verdict"</h2>
                    <p class="text-lg text-gray-700">{verdict}</p>
                </div>
            </section>

            {faqs}

            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4">
                    {related}
                    {comparisons}
                </div>
            </section>
        </article>
    }
}
