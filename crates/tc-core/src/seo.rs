//! Per-page SEO metadata
//!
//! Everything the document head needs: title, description, canonical URL,
//! keywords, preview image, content type, JSON-LD blocks and breadcrumbs.

use crate::content::Catalog;
use crate::model::{ComparisonPage, ReviewPage};
use crate::routes::{comparison_path, tool_path, COMPARE_PREFIX, TOOLS_PREFIX};
use crate::schema;
use crate::scoring::AggregateResult;
use crate::{CoreError, CoreResult, SiteConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Join a site base URL and a path into an absolute URL
///
/// Site paths are resolved below the base URL's own path, so a site hosted
/// at `https://example.com/reviews` keeps the `/reviews` prefix.
pub fn build_canonical(base_url: &str, path: &str) -> CoreResult<String> {
    let mut base = Url::parse(base_url)
        .map_err(|e| CoreError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    let url = base
        .join(path.trim_start_matches('/'))
        .map_err(|e| CoreError::Config(format!("invalid path '{}': {}", path, e)))?;
    Ok(url.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Open Graph content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Article,
    Website,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Article => "article",
            PageKind::Website => "website",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub keywords: Option<String>,
    pub image: Option<String>,
    pub kind: PageKind,
    pub schemas: Vec<Value>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl SeoMeta {
    /// Schema blocks serialized for `<script type="application/ld+json">`
    pub fn script_bodies(&self) -> Vec<String> {
        self.schemas.iter().map(schema::script_body).collect()
    }
}

fn crumbs(config: &SiteConfig, trail: &[(&str, &str)]) -> CoreResult<Vec<Breadcrumb>> {
    trail
        .iter()
        .map(|(name, path)| -> CoreResult<Breadcrumb> {
            Ok(Breadcrumb::new(*name, config.canonical(path)?))
        })
        .collect()
}

/// Metadata for a single-tool review
pub fn review_meta(page: &ReviewPage, config: &SiteConfig) -> CoreResult<SeoMeta> {
    let path = tool_path(&page.slug);
    let breadcrumbs = crumbs(
        config,
        &[("Home", "/"), ("Tools", TOOLS_PREFIX), (page.tool.name.as_str(), path.as_str())],
    )?;

    let mut schemas = vec![schema::product_review(page, &config.site_name)];
    if !page.faqs.is_empty() {
        schemas.push(schema::faq_page(&page.faqs));
    }
    schemas.push(schema::breadcrumb_list(&breadcrumbs));

    Ok(SeoMeta {
        title: page.seo.title.clone(),
        description: page.seo.description.clone(),
        canonical: config.canonical(&path)?,
        keywords: page.seo.keywords.clone(),
        image: page.seo.image.clone(),
        kind: PageKind::Article,
        schemas,
        breadcrumbs,
    })
}

/// Metadata for a multi-tool comparison
pub fn comparison_meta(
    page: &ComparisonPage,
    aggregate: &AggregateResult,
    config: &SiteConfig,
) -> CoreResult<SeoMeta> {
    let path = comparison_path(&page.slug);
    let breadcrumbs = crumbs(
        config,
        &[("Home", "/"), ("Comparisons", COMPARE_PREFIX), (page.title.as_str(), path.as_str())],
    )?;

    let mut schemas = vec![schema::comparison_item_list(page, aggregate, &config.site_name)];
    if !page.faqs.is_empty() {
        schemas.push(schema::faq_page(&page.faqs));
    }
    schemas.push(schema::breadcrumb_list(&breadcrumbs));

    Ok(SeoMeta {
        title: page.seo.title.clone(),
        description: page.seo.description.clone(),
        canonical: config.canonical(&path)?,
        keywords: page.seo.keywords.clone(),
        image: page.seo.image.clone(),
        kind: PageKind::Article,
        schemas,
        breadcrumbs,
    })
}

/// Metadata for the review and comparison index pages
pub fn listing_meta(
    title: &str,
    description: &str,
    path: &str,
    config: &SiteConfig,
) -> CoreResult<SeoMeta> {
    let breadcrumbs = crumbs(config, &[("Home", "/"), (title, path)])?;

    Ok(SeoMeta {
        title: format!("{} | {}", title, config.site_name),
        description: description.to_string(),
        canonical: config.canonical(path)?,
        keywords: None,
        image: None,
        kind: PageKind::Website,
        schemas: vec![schema::breadcrumb_list(&breadcrumbs)],
        breadcrumbs,
    })
}

pub fn home_meta(catalog: &Catalog, config: &SiteConfig) -> CoreResult<SeoMeta> {
    Ok(SeoMeta {
        title: format!("{}: honest SaaS reviews and comparisons", config.site_name),
        description: format!(
            "Independent reviews of {} tools and {} side-by-side comparisons.",
            catalog.review_count(),
            catalog.comparison_count()
        ),
        canonical: config.canonical("/")?,
        keywords: None,
        image: None,
        kind: PageKind::Website,
        schemas: Vec::new(),
        breadcrumbs: Vec::new(),
    })
}
