//! Comparison pages

use super::{comparison_link, NotFound};
use crate::components::*;
use crate::state::{use_site_state, SiteState};
use leptos::*;
use leptos_router::*;
use tc_core::routes::COMPARE_PREFIX;
use tc_core::seo::{self, SeoMeta};
use tc_core::verdict::{comparison_verdict, fill_year};
use tc_core::{AggregateResult, ComparisonPage};
use tracing::warn;

#[component]
pub fn ComparisonsIndexPage() -> impl IntoView {
    let state = use_site_state();
    let meta = state.as_ref().and_then(|s| {
        seo::listing_meta(
            "Comparisons",
            "Scored head-to-head comparisons of competing tools.",
            COMPARE_PREFIX,
            &s.config,
        )
        .map_err(|e| warn!("Comparison index metadata: {}", e))
        .ok()
    });
    let links = state
        .as_ref()
        .map(|s| s.catalog.comparisons().map(comparison_link).collect::<Vec<_>>())
        .unwrap_or_default();

    view! {
        {meta.map(|meta| view! { <SeoHead meta=meta/> })}
        <section class="py-16">
            <div class="container mx-auto px-4">
                <h1 class="text-4xl font-bold text-gray-900 mb-10">"Comparisons"</h1>
                <PageCardGrid links=links/>
            </div>
        </section>
    }
}

/// `/tools/compare/:slug`
#[component]
pub fn ComparisonPageView() -> impl IntoView {
    let params = use_params_map();
    let state = use_site_state();

    move || {
        let slug = params.with(|p| p.get("slug").cloned().unwrap_or_default());
        let found = state
            .as_ref()
            .and_then(|s| s.catalog.comparison(&slug).cloned().map(|page| (s, page)));

        match found {
            Some((state, page)) => render_comparison(state, page),
            None => view! { <NotFound/> }.into_view(),
        }
    }
}

fn render_comparison(state: &SiteState, page: ComparisonPage) -> View {
    let aggregate = state
        .config
        .aggregator()
        .aggregate(&page.contenders, &page.scores);
    let verdict = comparison_verdict(&page, &aggregate, state.year());
    let meta = seo::comparison_meta(&page, &aggregate, &state.config)
        .map_err(|e| warn!("Comparison metadata for {}: {}", page.slug, e))
        .ok();

    view! {
        <ComparisonPageTemplate
            page=page
            aggregate=aggregate
            verdict=verdict
            meta=meta
            year=state.year()
        />
    }
    .into_view()
}

/// Multi-tool comparison
///
/// Averages and winners come from the aggregate; nothing here recomputes them.
#[component]
pub fn ComparisonPageTemplate(
    page: ComparisonPage,
    aggregate: AggregateResult,
    verdict: String,
    meta: Option<SeoMeta>,
    year: i32,
) -> impl IntoView {
    let crumbs = meta.as_ref().map(|m| m.breadcrumbs.clone()).unwrap_or_default();
    let intro = fill_year(&page.intro, year);
    let updated = page
        .updated
        .map(|date| format!("Updated {}", date.format("%B %-d, %Y")));

    let cards = page
        .contenders
        .iter()
        .map(|contender| {
            view! {
                <ContenderCard
                    contender=contender.clone()
                    average=aggregate.average_of(&contender.key)
                    winner=aggregate.is_overall_winner(&contender.key)
                />
            }
        })
        .collect_view();
    let faqs = (!page.faqs.is_empty()).then(|| view! { <FaqAccordion faqs=page.faqs.clone()/> });
    let title = page.title.clone();

    view! {
        {meta.map(|meta| view! { <SeoHead meta=meta/> })}
        <article>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4 max-w-4xl">
                    <Breadcrumbs crumbs=crumbs/>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">{title}</h1>
                    <p class="text-xl text-gray-300">{intro}</p>
                    <p class="text-sm text-gray-400 mt-6">{updated}</p>
                </div>
            </section>

            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-3 gap-8">{cards}</div>
                </div>
            </section>

            <section class="py-16">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-gray-900 mb-8">"Scores"</h2>
                    <ScoreTable page=page aggregate=aggregate/>
                </div>
            </section>

            <section class="py-16 bg-indigo-50">
                <div class="container mx-auto px-4 max-w-3xl">
                    <h2 class="text-3xl font-bold text-gray-900 mb-4">"Verdict"</h2>
                    <p class="text-lg text-gray-700">{verdict}</p>
                </div>
            </section>

            {faqs}
        </article>
    }
}
