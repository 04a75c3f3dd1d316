//! Score report generation

pub mod json;
pub mod markdown;

use crate::model::ComparisonPage;
use crate::scoring::{AggregateResult, RowWinner};
use crate::CoreResult;
use serde::{Deserialize, Serialize};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
}

/// Flattened view of a comparison and its aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub slug: String,
    pub title: String,
    pub contenders: Vec<ReportContender>,
    pub rows: Vec<ReportRow>,
    pub overall_winner: Option<String>,
    pub overall_tied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportContender {
    pub key: String,
    pub name: String,
    pub average: Option<f64>,
    pub row_wins: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    /// In contender order; `None` where the row omits the contender
    pub scores: Vec<Option<f64>>,
    pub winner: RowWinner,
}

impl ScoreReport {
    pub fn new(page: &ComparisonPage, aggregate: &AggregateResult) -> Self {
        let contenders = page
            .contenders
            .iter()
            .map(|c| ReportContender {
                key: c.key.clone(),
                name: c.name.clone(),
                average: aggregate.average_of(&c.key),
                row_wins: aggregate.row_wins(&c.key),
            })
            .collect();

        let rows = page
            .scores
            .iter()
            .zip(&aggregate.rows)
            .map(|(row, result)| ReportRow {
                label: row.label.clone(),
                scores: page.contenders.iter().map(|c| row.score(&c.key)).collect(),
                winner: result.winner.clone(),
            })
            .collect();

        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
            contenders,
            rows,
            overall_winner: aggregate.overall_winner.clone(),
            overall_tied: aggregate.overall_tied,
        }
    }
}

/// Generate report in specified format
pub fn generate_report(
    page: &ComparisonPage,
    aggregate: &AggregateResult,
    format: ReportFormat,
) -> CoreResult<String> {
    let report = ScoreReport::new(page, aggregate);
    match format {
        ReportFormat::Json => json::generate(&report),
        ReportFormat::Markdown => Ok(markdown::generate(&report)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contender, ScoreRow, SeoFields};
    use crate::scoring::ScoreAggregator;

    #[test]
    fn test_columns_follow_contender_order() {
        let page = ComparisonPage {
            slug: "zeta-vs-alpha".to_string(),
            category: "VPN".to_string(),
            title: "Zeta vs Alpha".to_string(),
            seo: SeoFields::default(),
            intro: String::new(),
            contenders: vec![
                Contender::new("zeta", "Zeta", "", ""),
                Contender::new("alpha", "Alpha", "", ""),
            ],
            scores: vec![ScoreRow::new("Speed", [("alpha", 6.0), ("zeta", 9.0)])],
            faqs: Vec::new(),
            verdict: String::new(),
            updated: None,
        };
        let aggregate = ScoreAggregator::new().aggregate(&page.contenders, &page.scores);
        let report = ScoreReport::new(&page, &aggregate);

        let keys: Vec<&str> = report.contenders.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(report.rows[0].scores, vec![Some(9.0), Some(6.0)]);
        assert_eq!(report.contenders[0].row_wins, 1);
    }
}
