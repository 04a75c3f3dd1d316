//! Page data model
//!
//! Every review and comparison page is plain data. The site renders it
//! through one of two templates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tool or service being reviewed or compared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contender {
    /// Stable identifier, also used in comparison slugs
    pub key: String,
    pub name: String,
    /// One-line description
    pub description: String,
    /// Outbound URL
    pub url: String,
    /// Slug of this tool's review page, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_slug: Option<String>,
}

impl Contender {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            url: url.into(),
            review_slug: None,
        }
    }
}

/// One evaluation criterion with a 0-10 score per contender key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub label: String,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
}

impl ScoreRow {
    pub fn new<K, I>(label: impl Into<String>, scores: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            label: label.into(),
            scores: scores.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Score for a contender, `None` when the row omits it
    pub fn score(&self, key: &str) -> Option<f64> {
        self.scores.get(key).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }
}

/// Frequently asked question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Search metadata supplied by the content author
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoFields {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Option<String>,
    /// Social preview image URL
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    #[serde(default)]
    pub subheadline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    /// Display price, e.g. "$2.99" or "Free"
    pub price: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

/// Single-tool review page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPage {
    /// Filled from the file name when left empty
    #[serde(default)]
    pub slug: String,
    pub category: String,
    pub tool: Contender,
    pub seo: SeoFields,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub pricing: Vec<PricingPlan>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    /// Editorial rating on the 1-5 scale
    pub rating: f64,
    #[serde(default)]
    pub verdict: String,
    /// Slugs of related review pages
    #[serde(default)]
    pub related: Vec<String>,
    #[serde(default)]
    pub published: Option<NaiveDate>,
    #[serde(default)]
    pub updated: Option<NaiveDate>,
}

impl ReviewPage {
    /// Most recent date the page content changed
    pub fn last_modified(&self) -> Option<NaiveDate> {
        self.updated.or(self.published)
    }
}

/// Multi-tool comparison page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPage {
    /// Derived from contender keys when left empty
    #[serde(default)]
    pub slug: String,
    pub category: String,
    pub title: String,
    pub seo: SeoFields,
    #[serde(default)]
    pub intro: String,
    pub contenders: Vec<Contender>,
    #[serde(default)]
    pub scores: Vec<ScoreRow>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    /// Verdict prose; `{winner}` and `{year}` are substituted at render time
    #[serde(default)]
    pub verdict: String,
    #[serde(default)]
    pub updated: Option<NaiveDate>,
}

impl ComparisonPage {
    pub fn contender(&self, key: &str) -> Option<&Contender> {
        self.contenders.iter().find(|c| c.key == key)
    }

    pub fn contender_keys(&self) -> Vec<&str> {
        self.contenders.iter().map(|c| c.key.as_str()).collect()
    }

    /// Display name for a key, falling back to the key itself
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.contender(key).map(|c| c.name.as_str()).unwrap_or(key)
    }
}
