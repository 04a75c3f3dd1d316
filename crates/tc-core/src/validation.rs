//! Catalog consistency checks
//!
//! Content mistakes do not crash rendering; they silently produce wrong
//! numbers. A row missing a contender's score drags that contender's mean
//! down, for instance. These checks surface such problems before publishing.

use crate::content::Catalog;
use crate::model::{ComparisonPage, ReviewPage};
use crate::routes::{is_valid_slug, RESERVED_SLUGS, SLUG_SEPARATOR};
use crate::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Slug of the offending page
    pub page: String,
    pub severity: Severity,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.page, self.message)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn push(&mut self, page: &str, severity: Severity, message: String) {
        self.issues.push(ValidationIssue {
            page: page.to_string(),
            severity,
            message,
        });
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn for_page<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |i| i.page == slug)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check every page in the catalog
pub fn validate_catalog(catalog: &Catalog) -> ValidationReport {
    let mut report = ValidationReport::default();

    for page in catalog.reviews() {
        validate_review(page, &mut report);
        for related in &page.related {
            if catalog.review(related).is_none() {
                report.push(
                    &page.slug,
                    Severity::Warning,
                    format!("related review '{}' does not exist", related),
                );
            }
        }
    }

    for page in catalog.comparisons() {
        validate_comparison(page, &mut report);
        for contender in &page.contenders {
            if let Some(slug) = &contender.review_slug {
                if catalog.review(slug).is_none() {
                    report.push(
                        &page.slug,
                        Severity::Warning,
                        format!("contender '{}' links to missing review '{}'", contender.key, slug),
                    );
                }
            }
        }
    }

    report
}

pub fn validate_review(page: &ReviewPage, report: &mut ValidationReport) {
    check_slug(&page.slug, report);
    if RESERVED_SLUGS.contains(&page.slug.as_str()) {
        report.push(
            &page.slug,
            Severity::Error,
            format!("slug '{}' is reserved for a listing page", page.slug),
        );
    }

    if !page.rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&page.rating) {
        report.push(
            &page.slug,
            Severity::Error,
            format!(
                "rating {} is outside {}-{}",
                page.rating, MIN_RATING, MAX_RATING
            ),
        );
    }

    if page.faqs.is_empty() {
        report.push(&page.slug, Severity::Info, "page has no FAQs".to_string());
    }
}

pub fn validate_comparison(page: &ComparisonPage, report: &mut ValidationReport) {
    let slug = page.slug.as_str();
    check_slug(slug, report);

    if page.contenders.len() < 2 {
        report.push(
            slug,
            Severity::Error,
            format!("comparison needs at least two contenders, found {}", page.contenders.len()),
        );
    }

    let mut keys = HashSet::new();
    for contender in &page.contenders {
        if !keys.insert(contender.key.as_str()) {
            report.push(
                slug,
                Severity::Error,
                format!("duplicate contender key '{}'", contender.key),
            );
        }
        if !is_valid_slug(&contender.key) || contender.key.contains(SLUG_SEPARATOR) {
            report.push(
                slug,
                Severity::Error,
                format!("contender key '{}' is not usable in a comparison slug", contender.key),
            );
        }
    }

    if page.scores.is_empty() {
        report.push(slug, Severity::Error, "score table is empty".to_string());
    }

    for row in &page.scores {
        for contender in &page.contenders {
            if row.score(&contender.key).is_none() {
                report.push(
                    slug,
                    Severity::Warning,
                    format!(
                        "row '{}' has no score for '{}'; it counts as 0 in the average",
                        row.label, contender.key
                    ),
                );
            }
        }

        for (key, score) in &row.scores {
            if !keys.contains(key.as_str()) {
                report.push(
                    slug,
                    Severity::Error,
                    format!("row '{}' scores unknown contender '{}'", row.label, key),
                );
            }
            if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(score) {
                report.push(
                    slug,
                    Severity::Error,
                    format!(
                        "row '{}' score {} for '{}' is outside {}-{}",
                        row.label, score, key, MIN_SCORE, MAX_SCORE
                    ),
                );
            }
        }
    }

    if page.faqs.is_empty() {
        report.push(slug, Severity::Info, "page has no FAQs".to_string());
    }
}

fn check_slug(slug: &str, report: &mut ValidationReport) {
    if !is_valid_slug(slug) {
        report.push(slug, Severity::Error, format!("slug '{}' is not a valid URL slug", slug));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contender, Faq, Hero, ScoreRow, SeoFields};

    fn faq() -> Faq {
        Faq {
            question: "Q?".to_string(),
            answer: "A.".to_string(),
        }
    }

    fn comparison(scores: Vec<ScoreRow>) -> ComparisonPage {
        ComparisonPage {
            slug: "a-vs-b".to_string(),
            category: "VPN".to_string(),
            title: "A vs B".to_string(),
            seo: SeoFields::default(),
            intro: String::new(),
            contenders: vec![
                Contender::new("a", "A", "", ""),
                Contender::new("b", "B", "", ""),
            ],
            scores,
            faqs: vec![faq()],
            verdict: String::new(),
            updated: None,
        }
    }

    fn review(slug: &str, rating: f64) -> ReviewPage {
        ReviewPage {
            slug: slug.to_string(),
            category: "VPN".to_string(),
            tool: Contender::new(slug, slug, "", ""),
            seo: SeoFields::default(),
            hero: Hero::default(),
            features: Vec::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            pricing: Vec::new(),
            faqs: vec![faq()],
            rating,
            verdict: String::new(),
            related: Vec::new(),
            published: None,
            updated: None,
        }
    }

    #[test]
    fn test_clean_comparison() {
        let mut report = ValidationReport::default();
        validate_comparison(
            &comparison(vec![ScoreRow::new("Speed", [("a", 9.0), ("b", 8.0)])]),
            &mut report,
        );
        assert!(report.is_clean(), "{:?}", report.issues);
    }

    #[test]
    fn test_missing_score_is_warning() {
        let mut report = ValidationReport::default();
        validate_comparison(&comparison(vec![ScoreRow::new("Speed", [("a", 9.0)])]), &mut report);

        assert_eq!(report.count(Severity::Warning), 1);
        assert!(!report.has_errors());
        assert!(report.issues[0].message.contains("no score for 'b'"));
    }

    #[test]
    fn test_unknown_contender_and_out_of_range_score() {
        let mut report = ValidationReport::default();
        validate_comparison(
            &comparison(vec![ScoreRow::new("Speed", [("a", 11.0), ("b", 8.0), ("c", 7.0)])]),
            &mut report,
        );

        assert_eq!(report.count(Severity::Error), 2);
        assert!(report.issues.iter().any(|i| i.message.contains("unknown contender 'c'")));
        assert!(report.issues.iter().any(|i| i.message.contains("score 11")));
    }

    #[test]
    fn test_empty_score_table_is_error() {
        let mut report = ValidationReport::default();
        validate_comparison(&comparison(Vec::new()), &mut report);
        assert!(report.has_errors());
    }

    #[test]
    fn test_single_contender_and_duplicate_key() {
        let mut page = comparison(vec![ScoreRow::new("Speed", [("a", 9.0)])]);
        page.contenders = vec![Contender::new("a", "A", "", ""), Contender::new("a", "A2", "", "")];
        let mut report = ValidationReport::default();
        validate_comparison(&page, &mut report);
        assert!(report.issues.iter().any(|i| i.message.contains("duplicate contender key 'a'")));

        page.contenders.truncate(1);
        let mut report = ValidationReport::default();
        validate_comparison(&page, &mut report);
        assert!(report.issues.iter().any(|i| i.message.contains("at least two contenders")));
    }

    #[test]
    fn test_review_rating_and_slug() {
        let mut report = ValidationReport::default();
        validate_review(&review("Bad Slug", 6.0), &mut report);
        assert_eq!(report.count(Severity::Error), 2);

        let mut report = ValidationReport::default();
        validate_review(&review("compare", 4.0), &mut report);
        assert!(report.issues.iter().any(|i| i.message.contains("reserved")));
    }

    #[test]
    fn test_catalog_dangling_links() {
        let mut catalog = Catalog::new();
        let mut page = review("nordvpn", 4.5);
        page.related = vec!["surfshark".to_string()];
        catalog.add_review(page).unwrap();

        let mut cmp = comparison(vec![ScoreRow::new("Speed", [("a", 9.0), ("b", 8.0)])]);
        cmp.contenders[0].review_slug = Some("missing".to_string());
        catalog.add_comparison(cmp).unwrap();

        let report = validate_catalog(&catalog);

        assert_eq!(report.count(Severity::Warning), 2);
        assert_eq!(report.for_page("nordvpn").count(), 1);
        assert_eq!(report.for_page("a-vs-b").count(), 1);
        assert!(!report.has_errors());
    }
}
