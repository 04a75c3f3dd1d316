//! Verdict prose

use crate::model::ComparisonPage;
use crate::scoring::AggregateResult;

pub const WINNER_PLACEHOLDER: &str = "{winner}";
pub const YEAR_PLACEHOLDER: &str = "{year}";

const DEFAULT_TEMPLATE: &str =
    "{winner} comes out ahead in our {year} comparison, with the highest average score across every criterion we tested.";
const TIED_TEMPLATE: &str =
    "There is no clear winner in our {year} comparison: {winner} shares the top average score, so pick based on the criteria that matter most to you.";
const NO_SCORES_TEMPLATE: &str = "We have not scored these tools yet for {year}.";

/// Substitute `{winner}` and `{year}` in a verdict template
pub fn render_verdict(template: &str, winner_name: &str, year: i32) -> String {
    template
        .replace(WINNER_PLACEHOLDER, winner_name)
        .replace(YEAR_PLACEHOLDER, &year.to_string())
}

/// Substitute only `{year}`, for copy that names no winner
pub fn fill_year(text: &str, year: i32) -> String {
    text.replace(YEAR_PLACEHOLDER, &year.to_string())
}

/// Verdict sentence for a comparison page
///
/// The page's own template is used when present. Without one, the wording
/// depends on whether the overall winner was decided by the tie-break.
pub fn comparison_verdict(page: &ComparisonPage, aggregate: &AggregateResult, year: i32) -> String {
    let Some(winner) = aggregate.overall_winner.as_deref() else {
        return render_verdict(NO_SCORES_TEMPLATE, "", year);
    };
    let winner_name = page.display_name(winner);

    let template = if !page.verdict.trim().is_empty() {
        page.verdict.as_str()
    } else if aggregate.overall_tied {
        TIED_TEMPLATE
    } else {
        DEFAULT_TEMPLATE
    };

    render_verdict(template, winner_name, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contender, ScoreRow, SeoFields};
    use crate::scoring::ScoreAggregator;

    fn page(verdict: &str) -> ComparisonPage {
        ComparisonPage {
            slug: "a-vs-b".to_string(),
            category: "VPN".to_string(),
            title: "A vs B".to_string(),
            seo: SeoFields::default(),
            intro: String::new(),
            contenders: vec![
                Contender::new("a", "Alpha", "", ""),
                Contender::new("b", "Beta", "", ""),
            ],
            scores: vec![ScoreRow::new("Speed", [("a", 7.0), ("b", 9.0)])],
            faqs: Vec::new(),
            verdict: verdict.to_string(),
            updated: None,
        }
    }

    #[test]
    fn test_render_verdict_placeholders() {
        assert_eq!(
            render_verdict("{winner} wins {year}. {winner}!", "Beta", 2025),
            "Beta wins 2025. Beta!"
        );
    }

    #[test]
    fn test_fill_year_leaves_winner_placeholder() {
        assert_eq!(fill_year("Best of {year}: {winner}", 2024), "Best of 2024: {winner}");
    }

    #[test]
    fn test_comparison_verdict_uses_page_template() {
        let page = page("Our {year} pick is {winner}.");
        let aggregate = ScoreAggregator::new().aggregate(&page.contenders, &page.scores);
        assert_eq!(comparison_verdict(&page, &aggregate, 2026), "Our 2026 pick is Beta.");
    }

    #[test]
    fn test_comparison_verdict_default_template() {
        let page = page("");
        let aggregate = ScoreAggregator::new().aggregate(&page.contenders, &page.scores);
        let verdict = comparison_verdict(&page, &aggregate, 2026);
        assert!(verdict.starts_with("Beta comes out ahead in our 2026 comparison"));
    }

    #[test]
    fn test_comparison_verdict_tied() {
        let mut page = page("");
        page.scores = vec![ScoreRow::new("Speed", [("a", 9.0), ("b", 9.0)])];
        let aggregate = ScoreAggregator::new().aggregate(&page.contenders, &page.scores);
        let verdict = comparison_verdict(&page, &aggregate, 2026);
        assert!(verdict.contains("no clear winner"));
        assert!(verdict.contains("Alpha"));
    }

    #[test]
    fn test_comparison_verdict_without_scores() {
        let mut page = page("{winner} wins");
        page.scores.clear();
        let aggregate = ScoreAggregator::new().aggregate(&page.contenders, &page.scores);
        assert_eq!(
            comparison_verdict(&page, &aggregate, 2026),
            "We have not scored these tools yet for 2026."
        );
    }
}
