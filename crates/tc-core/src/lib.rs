//! Tool Compare Core
//!
//! This crate holds everything the review and comparison pages need that is
//! not markup: the page data model, content loading, score aggregation and
//! winner selection, schema.org structured data, SEO metadata, routes and
//! catalog validation.

pub mod clock;
pub mod content;
pub mod model;
pub mod report;
pub mod routes;
pub mod schema;
pub mod scoring;
pub mod seo;
pub mod sitemap;
pub mod validation;
pub mod verdict;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use content::Catalog;
pub use model::{ComparisonPage, Contender, Faq, ReviewPage, ScoreRow};
pub use scoring::{AggregateResult, MissingScorePolicy, RowWinner, ScoreAggregator};
pub use seo::SeoMeta;
pub use validation::{ValidationIssue, ValidationReport};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Report(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Site-wide settings shared by the CLI and the web server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute origin used for canonical URLs and the sitemap
    pub base_url: String,
    /// Organisation name used as review author in structured data
    pub site_name: String,
    /// Directory holding `tools/` and `compare/` content files
    pub content_dir: PathBuf,
    /// How a contender without a score in some row is averaged
    pub missing_scores: MissingScorePolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("SITE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| "Tool Compare".to_string()),
            content_dir: std::env::var("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("content")),
            missing_scores: missing_scores_from(std::env::var("MISSING_SCORES").ok().as_deref()),
        }
    }
}

/// Policy named by `MISSING_SCORES`, falling back to the default
fn missing_scores_from(value: Option<&str>) -> MissingScorePolicy {
    match value {
        Some(name) => name.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring MISSING_SCORES: {}", e);
            MissingScorePolicy::default()
        }),
        None => MissingScorePolicy::default(),
    }
}

impl SiteConfig {
    /// Build a canonical URL for a site path
    pub fn canonical(&self, path: &str) -> CoreResult<String> {
        seo::build_canonical(&self.base_url, path)
    }

    pub fn aggregator(&self) -> ScoreAggregator {
        ScoreAggregator::with_policy(self.missing_scores)
    }
}

/// Severity levels for catalog findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "Info"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}
