//! Document head metadata and breadcrumb trail

use leptos::*;
use leptos_meta::*;
use tc_core::seo::{Breadcrumb, SeoMeta};

/// Title, description, canonical link, Open Graph tags and JSON-LD blocks
#[component]
pub fn SeoHead(meta: SeoMeta) -> impl IntoView {
    let scripts = meta
        .script_bodies()
        .into_iter()
        .map(|body| view! { <script type="application/ld+json" inner_html=body></script> })
        .collect_view();

    view! {
        <Title text=meta.title.clone()/>
        <Meta name="description" content=meta.description.clone()/>
        {meta.keywords.clone().map(|keywords| view! { <Meta name="keywords" content=keywords/> })}
        <Link rel="canonical" href=meta.canonical.clone()/>
        <Meta property="og:title" content=meta.title.clone()/>
        <Meta property="og:description" content=meta.description.clone()/>
        <Meta property="og:type" content=meta.kind.as_str()/>
        <Meta property="og:url" content=meta.canonical.clone()/>
        {meta.image.clone().map(|image| view! { <Meta property="og:image" content=image/> })}
        {scripts}
    }
}

#[component]
pub fn Breadcrumbs(crumbs: Vec<Breadcrumb>) -> impl IntoView {
    let last = crumbs.len().saturating_sub(1);

    view! {
        <nav aria-label="Breadcrumb" class="text-sm text-gray-500 mb-6">
            {crumbs
                .into_iter()
                .enumerate()
                .map(|(i, crumb)| {
                    if i == last {
                        view! { <span class="text-gray-900">{crumb.name}</span> }.into_view()
                    } else {
                        view! {
                            <a href=crumb.url class="hover:text-gray-900">{crumb.name}</a>
                            <span class="mx-2">"/"</span>
                        }
                        .into_view()
                    }
                })
                .collect_view()}
        </nav>
    }
}
