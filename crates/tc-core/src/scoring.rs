//! Score aggregation and winner selection
//!
//! Comparison pages carry a table of criteria, each scoring every contender
//! on a 0-10 scale. From it we derive:
//! - a per-contender mean rounded to one decimal
//! - a winner per criterion, or `Tie` when the maximum is shared
//! - an overall winner by highest mean
//!
//! Overall ties go to the first contender in page order among those sharing
//! the maximum. Every function here is pure and never panics.

use crate::model::{Contender, ScoreRow};
use serde::{Deserialize, Serialize};

/// Label shown for a shared row maximum
pub const TIE_LABEL: &str = "Tie";

/// How a row without a score for the contender enters the mean
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingScorePolicy {
    /// Count the missing score as 0 and keep the row in the denominator
    #[default]
    Zero,
    /// Leave the row out of both sum and denominator
    Exclude,
}

impl std::str::FromStr for MissingScorePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" => Ok(MissingScorePolicy::Zero),
            "exclude" => Ok(MissingScorePolicy::Exclude),
            other => Err(format!("unknown missing-score policy '{}'", other)),
        }
    }
}

/// Round half away from zero to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of a contender's scores across all rows, missing scores as 0
///
/// Returns `None` for an empty row list.
pub fn compute_average(rows: &[ScoreRow], contender_key: &str) -> Option<f64> {
    compute_average_with(rows, contender_key, MissingScorePolicy::Zero)
}

pub fn compute_average_with(
    rows: &[ScoreRow],
    contender_key: &str,
    policy: MissingScorePolicy,
) -> Option<f64> {
    let (sum, count) = match policy {
        MissingScorePolicy::Zero => (
            rows.iter()
                .map(|row| row.score(contender_key).unwrap_or(0.0))
                .sum::<f64>(),
            rows.len(),
        ),
        MissingScorePolicy::Exclude => rows
            .iter()
            .filter_map(|row| row.score(contender_key))
            .fold((0.0, 0), |(sum, count), score| (sum + score, count + 1)),
    };

    if count == 0 {
        return None;
    }

    Some(round_one_decimal(sum / count as f64))
}

/// Winner of a single criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "lowercase")]
pub enum RowWinner {
    Contender(String),
    Tie,
}

impl RowWinner {
    pub fn is_tie(&self) -> bool {
        matches!(self, RowWinner::Tie)
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            RowWinner::Contender(key) => Some(key),
            RowWinner::Tie => None,
        }
    }

    /// True when `key` alone holds the row maximum
    pub fn is(&self, key: &str) -> bool {
        self.key() == Some(key)
    }
}

impl std::fmt::Display for RowWinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowWinner::Contender(key) => write!(f, "{}", key),
            RowWinner::Tie => write!(f, "{}", TIE_LABEL),
        }
    }
}

/// Highest score in a row among `contender_keys`
///
/// Any exact tie on the maximum yields [`RowWinner::Tie`], regardless of
/// where the tied contenders sit in the list. Missing and non-finite scores
/// count as 0. An empty key list is a tie.
pub fn pick_row_winner<S: AsRef<str>>(row: &ScoreRow, contender_keys: &[S]) -> RowWinner {
    let mut best: Option<(&str, f64)> = None;
    let mut tied = false;

    for key in contender_keys {
        let key = key.as_ref();
        let score = row.score(key).filter(|s| s.is_finite()).unwrap_or(0.0);

        match best {
            Some((_, top)) if score < top => {}
            Some((_, top)) if score == top => tied = true,
            _ => {
                best = Some((key, score));
                tied = false;
            }
        }
    }

    match best {
        Some((key, _)) if !tied => RowWinner::Contender(key.to_string()),
        _ => RowWinner::Tie,
    }
}

/// Contender with the highest average
///
/// `averages` is in page order; the first contender reaching the maximum
/// wins a tie. Non-finite averages are skipped.
pub fn pick_overall_winner<S: AsRef<str>>(averages: &[(S, f64)]) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;

    for (key, average) in averages {
        if !average.is_finite() {
            continue;
        }
        match best {
            Some((_, top)) if *average <= top => {}
            _ => best = Some((key.as_ref(), *average)),
        }
    }

    best.map(|(key, _)| key.to_string())
}

/// Mean for one contender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContenderAverage {
    pub key: String,
    /// `None` when no row contributes to the mean
    pub average: Option<f64>,
}

/// Winner of one score row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowResult {
    pub label: String,
    pub winner: RowWinner,
}

/// Everything the comparison template needs from the score table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// In contender order
    pub averages: Vec<ContenderAverage>,
    /// In row order
    pub rows: Vec<RowResult>,
    pub overall_winner: Option<String>,
    /// More than one contender shares the winning mean
    pub overall_tied: bool,
    pub policy: MissingScorePolicy,
}

impl AggregateResult {
    pub fn average_of(&self, key: &str) -> Option<f64> {
        self.averages
            .iter()
            .find(|a| a.key == key)
            .and_then(|a| a.average)
    }

    pub fn is_overall_winner(&self, key: &str) -> bool {
        self.overall_winner.as_deref() == Some(key)
    }

    pub fn row_winner(&self, index: usize) -> Option<&RowWinner> {
        self.rows.get(index).map(|r| &r.winner)
    }

    /// Number of rows each contender won outright
    pub fn row_wins(&self, key: &str) -> usize {
        self.rows.iter().filter(|r| r.winner.is(key)).count()
    }
}

/// Aggregates a comparison score table
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreAggregator {
    policy: MissingScorePolicy,
}

impl ScoreAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: MissingScorePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MissingScorePolicy {
        self.policy
    }

    pub fn average(&self, rows: &[ScoreRow], contender_key: &str) -> Option<f64> {
        compute_average_with(rows, contender_key, self.policy)
    }

    pub fn aggregate(&self, contenders: &[Contender], rows: &[ScoreRow]) -> AggregateResult {
        let keys: Vec<&str> = contenders.iter().map(|c| c.key.as_str()).collect();

        let averages: Vec<ContenderAverage> = keys
            .iter()
            .map(|key| ContenderAverage {
                key: key.to_string(),
                average: self.average(rows, key),
            })
            .collect();

        let scored: Vec<(&str, f64)> = averages
            .iter()
            .filter_map(|a| a.average.map(|avg| (a.key.as_str(), avg)))
            .collect();

        let overall_winner = pick_overall_winner(&scored);
        let overall_tied = overall_winner
            .as_deref()
            .and_then(|winner| scored.iter().find(|(key, _)| *key == winner))
            .map(|(_, top)| scored.iter().filter(|(_, avg)| avg == top).count() > 1)
            .unwrap_or(false);

        let rows = rows
            .iter()
            .map(|row| RowResult {
                label: row.label.clone(),
                winner: pick_row_winner(row, &keys),
            })
            .collect();

        AggregateResult {
            averages,
            rows,
            overall_winner,
            overall_tied,
            policy: self.policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contenders(keys: &[&str]) -> Vec<Contender> {
        keys.iter()
            .map(|k| Contender::new(*k, k.to_uppercase(), "", ""))
            .collect()
    }

    #[test]
    fn test_average_two_rows() {
        let rows = vec![
            ScoreRow::new("Speed", [("a", 9.0), ("b", 8.0)]),
            ScoreRow::new("Value", [("a", 7.0), ("b", 9.0)]),
        ];
        assert_eq!(compute_average(&rows, "a"), Some(8.0));
        assert_eq!(compute_average(&rows, "b"), Some(8.5));
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let rows = vec![
            ScoreRow::new("One", [("a", 9.0)]),
            ScoreRow::new("Two", [("a", 9.1)]),
            ScoreRow::new("Three", [("a", 9.2)]),
        ];
        assert_eq!(compute_average(&rows, "a"), Some(9.1));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_one_decimal(8.25), 8.3);
        assert_eq!(round_one_decimal(7.0), 7.0);
    }

    #[test]
    fn test_average_empty_rows() {
        assert_eq!(compute_average(&[], "a"), None);
    }

    #[test]
    fn test_missing_score_counts_as_zero() {
        let rows = vec![
            ScoreRow::new("Speed", [("a", 9.0), ("b", 8.0)]),
            ScoreRow::new("Value", [("b", 9.0)]),
        ];
        assert_eq!(compute_average(&rows, "a"), Some(4.5));
    }

    #[test]
    fn test_missing_score_excluded() {
        let rows = vec![
            ScoreRow::new("Speed", [("a", 9.0), ("b", 8.0)]),
            ScoreRow::new("Value", [("b", 9.0)]),
        ];
        assert_eq!(
            compute_average_with(&rows, "a", MissingScorePolicy::Exclude),
            Some(9.0)
        );
        assert_eq!(
            compute_average_with(&rows, "c", MissingScorePolicy::Exclude),
            None
        );
    }

    #[test]
    fn test_row_winner_clear() {
        let row = ScoreRow::new("Speed", [("a", 9.0), ("b", 8.4), ("c", 9.1)]);
        assert_eq!(
            pick_row_winner(&row, &["a", "b", "c"]),
            RowWinner::Contender("c".to_string())
        );
    }

    #[test]
    fn test_row_winner_exact_tie() {
        let row = ScoreRow::new("Speed", [("a", 9.0), ("b", 9.0), ("c", 8.0)]);
        let winner = pick_row_winner(&row, &["a", "b", "c"]);
        assert!(winner.is_tie());
        assert_eq!(winner.to_string(), "Tie");
    }

    #[test]
    fn test_row_winner_tie_between_non_adjacent() {
        let row = ScoreRow::new("Support", [("a", 9.5), ("b", 7.0), ("c", 9.5)]);
        assert_eq!(pick_row_winner(&row, &["a", "b", "c"]), RowWinner::Tie);
    }

    #[test]
    fn test_row_winner_tie_broken_by_later_higher_score() {
        let row = ScoreRow::new("Price", [("a", 8.0), ("b", 8.0), ("c", 9.0)]);
        assert_eq!(
            pick_row_winner(&row, &["a", "b", "c"]),
            RowWinner::Contender("c".to_string())
        );
    }

    #[test]
    fn test_row_winner_missing_key_is_zero() {
        let row = ScoreRow::new("Speed", [("b", 0.5)]);
        assert_eq!(
            pick_row_winner(&row, &["a", "b"]),
            RowWinner::Contender("b".to_string())
        );
    }

    #[test]
    fn test_row_winner_no_contenders() {
        let row = ScoreRow::new("Speed", [("a", 1.0)]);
        let keys: [&str; 0] = [];
        assert_eq!(pick_row_winner(&row, &keys), RowWinner::Tie);
    }

    #[test]
    fn test_overall_winner_highest_average() {
        let averages = [("a", 8.1), ("b", 8.9), ("c", 8.4)];
        assert_eq!(pick_overall_winner(&averages), Some("b".to_string()));
    }

    #[test]
    fn test_overall_winner_tie_goes_to_first_in_order() {
        let averages = [("a", 8.0), ("b", 9.0), ("c", 9.0)];
        assert_eq!(pick_overall_winner(&averages), Some("b".to_string()));

        let reordered = [("c", 9.0), ("a", 8.0), ("b", 9.0)];
        assert_eq!(pick_overall_winner(&reordered), Some("c".to_string()));
    }

    #[test]
    fn test_overall_winner_empty() {
        let averages: [(&str, f64); 0] = [];
        assert_eq!(pick_overall_winner(&averages), None);
    }

    #[test]
    fn test_aggregate_full_table() {
        let contenders = contenders(&["a", "b", "c"]);
        let rows = vec![
            ScoreRow::new("Speed", [("a", 9.0), ("b", 8.4), ("c", 9.1)]),
            ScoreRow::new("Value", [("a", 8.0), ("b", 9.0), ("c", 8.0)]),
            ScoreRow::new("Support", [("a", 9.0), ("b", 9.0), ("c", 8.5)]),
        ];

        let result = ScoreAggregator::new().aggregate(&contenders, &rows);

        assert_eq!(result.average_of("a"), Some(8.7));
        assert_eq!(result.average_of("b"), Some(8.8));
        assert_eq!(result.average_of("c"), Some(8.5));
        assert_eq!(result.overall_winner.as_deref(), Some("b"));
        assert!(!result.overall_tied);
        assert_eq!(result.rows[0].winner, RowWinner::Contender("c".to_string()));
        assert_eq!(result.rows[1].winner, RowWinner::Contender("b".to_string()));
        assert!(result.rows[2].winner.is_tie());
        assert_eq!(result.row_wins("b"), 1);
    }

    #[test]
    fn test_aggregate_flags_overall_tie() {
        let contenders = contenders(&["a", "b"]);
        let rows = vec![
            ScoreRow::new("Speed", [("a", 9.0), ("b", 8.0)]),
            ScoreRow::new("Value", [("a", 8.0), ("b", 9.0)]),
        ];

        let result = ScoreAggregator::new().aggregate(&contenders, &rows);

        assert_eq!(result.overall_winner.as_deref(), Some("a"));
        assert!(result.overall_tied);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let contenders = contenders(&["a", "b"]);
        let rows = vec![
            ScoreRow::new("Speed", [("a", 9.3), ("b", 8.1)]),
            ScoreRow::new("Value", [("a", 7.7), ("b", 9.4)]),
        ];
        let before = rows.clone();
        let aggregator = ScoreAggregator::new();

        let first = aggregator.aggregate(&contenders, &rows);
        let second = aggregator.aggregate(&contenders, &rows);

        assert_eq!(first, second);
        assert_eq!(rows, before);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("exclude".parse::<MissingScorePolicy>(), Ok(MissingScorePolicy::Exclude));
        assert_eq!(" Zero ".parse::<MissingScorePolicy>(), Ok(MissingScorePolicy::Zero));
        assert!("drop".parse::<MissingScorePolicy>().is_err());
    }
}
