//! schema.org JSON-LD builders

use crate::model::{ComparisonPage, Faq, ReviewPage};
use crate::scoring::{round_one_decimal, AggregateResult};
use crate::seo::Breadcrumb;
use serde_json::{json, Value};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const BEST_RATING: &str = "5";
pub const WORST_RATING: &str = "1";

/// Clamp an editorial rating into the 1-5 schema.org range
pub fn clamp_rating(rating: f64) -> f64 {
    if !rating.is_finite() {
        return 1.0;
    }
    round_one_decimal(rating.clamp(1.0, 5.0))
}

/// Map a 0-10 comparison mean onto the 1-5 rating scale
pub fn to_rating_scale(score: f64) -> f64 {
    clamp_rating(score / 2.0)
}

fn rating(value: f64) -> Value {
    json!({
        "@type": "Rating",
        "ratingValue": clamp_rating(value),
        "bestRating": BEST_RATING,
        "worstRating": WORST_RATING,
    })
}

/// `FAQPage` with one `Question` per FAQ
pub fn faq_page(faqs: &[Faq]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// `Product` carrying the editorial `Review` of a tool
pub fn product_review(page: &ReviewPage, author: &str) -> Value {
    let mut review = json!({
        "@type": "Review",
        "author": {
            "@type": "Organization",
            "name": author,
        },
        "reviewRating": rating(page.rating),
    });

    if !page.verdict.is_empty() {
        review["reviewBody"] = json!(page.verdict);
    }
    if let Some(date) = page.published {
        review["datePublished"] = json!(date.format("%Y-%m-%d").to_string());
    }

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Product",
        "name": page.tool.name,
        "description": page.tool.description,
        "url": page.tool.url,
        "category": page.category,
        "brand": {
            "@type": "Brand",
            "name": page.tool.name,
        },
        "review": review,
    })
}

/// `ItemList` of compared products, each rated from its mean score
pub fn comparison_item_list(page: &ComparisonPage, aggregate: &AggregateResult, author: &str) -> Value {
    let items: Vec<Value> = page
        .contenders
        .iter()
        .enumerate()
        .map(|(index, contender)| {
            let mut product = json!({
                "@type": "Product",
                "name": contender.name,
                "description": contender.description,
                "url": contender.url,
            });

            if let Some(average) = aggregate.average_of(&contender.key) {
                product["review"] = json!({
                    "@type": "Review",
                    "author": {
                        "@type": "Organization",
                        "name": author,
                    },
                    "reviewRating": rating(to_rating_scale(average)),
                });
            }

            json!({
                "@type": "ListItem",
                "position": index + 1,
                "item": product,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "name": page.title,
        "itemListElement": items,
    })
}

/// `BreadcrumbList` in navigation order
pub fn breadcrumb_list(crumbs: &[Breadcrumb]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(index, crumb)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": crumb.name,
                "item": crumb.url,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// Serialize for embedding in a `<script type="application/ld+json">` tag
pub fn script_body(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
