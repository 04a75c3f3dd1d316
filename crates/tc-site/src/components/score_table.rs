//! Comparison score table
//!
//! One row per criterion, one column per contender. The best score of each
//! row is highlighted; a tied row highlights nothing and says so.

use leptos::*;
use tc_core::{AggregateResult, ComparisonPage, RowWinner};

const CELL: &str = "px-4 py-3 text-center text-gray-700";
const WINNER_CELL: &str = "px-4 py-3 text-center score-winner text-indigo-700";

pub fn cell_class(is_winner: bool) -> &'static str {
    if is_winner {
        WINNER_CELL
    } else {
        CELL
    }
}

/// One decimal, or a dash where the row has no score
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{:.1}", value),
        None => "–".to_string(),
    }
}

pub fn winner_label(page: &ComparisonPage, winner: &RowWinner) -> String {
    match winner.key() {
        Some(key) => page.display_name(key).to_string(),
        None => winner.to_string(),
    }
}

#[component]
pub fn ScoreTable(page: ComparisonPage, aggregate: AggregateResult) -> impl IntoView {
    let header = page
        .contenders
        .iter()
        .map(|c| view! { <th class="px-4 py-3 text-center font-semibold text-gray-900">{c.name.clone()}</th> })
        .collect_view();

    let rows = page
        .scores
        .iter()
        .zip(&aggregate.rows)
        .map(|(row, result)| {
            let cells = page
                .contenders
                .iter()
                .map(|c| {
                    let class = cell_class(result.winner.is(&c.key));
                    view! { <td class=class>{format_score(row.score(&c.key))}</td> }
                })
                .collect_view();
            view! {
                <tr class="border-t border-gray-200">
                    <td class="px-4 py-3 font-medium text-gray-900">{row.label.clone()}</td>
                    {cells}
                    <td class="px-4 py-3 text-center text-gray-600">{winner_label(&page, &result.winner)}</td>
                </tr>
            }
        })
        .collect_view();

    let averages = page
        .contenders
        .iter()
        .map(|c| {
            let class = cell_class(aggregate.is_overall_winner(&c.key));
            view! { <td class=class>{format_score(aggregate.average_of(&c.key))}</td> }
        })
        .collect_view();

    view! {
        <div class="overflow-x-auto">
            <table class="w-full bg-white rounded-xl shadow">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-4 py-3 text-left font-semibold text-gray-900">"Criterion"</th>
                        {header}
                        <th class="px-4 py-3 text-center font-semibold text-gray-900">"Winner"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows}
                    <tr class="border-t-2 border-gray-300 bg-gray-50">
                        <td class="px-4 py-3 font-semibold text-gray-900">"Average"</td>
                        {averages}
                        <td></td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::view;
    use tc_core::model::SeoFields;
    use tc_core::{Contender, ScoreRow};

    fn page() -> ComparisonPage {
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
            scores: vec![ScoreRow::new("Speed", [("a", 9.0), ("b", 9.0)])],
            faqs: Vec::new(),
            verdict: String::new(),
            updated: None,
        }
    }

    fn render(page: ComparisonPage) -> String {
        let aggregate = tc_core::ScoreAggregator::new().aggregate(&page.contenders, &page.scores);
        leptos::ssr::render_to_string(move || view! { <ScoreTable page=page aggregate=aggregate/> })
            .to_string()
    }

    /// Highlighted cells per table row, header first
    fn highlights_per_row(html: &str) -> Vec<usize> {
        html.split("<tr")
            .skip(1)
            .map(|row| row.matches("score-winner").count())
            .collect()
    }

    #[test]
    fn test_table_highlights_row_and_overall_winners() {
        let mut page = page();
        page.contenders.push(Contender::new("c", "Gamma", "", ""));
        page.scores = vec![
            ScoreRow::new("Speed", [("a", 9.0), ("b", 7.0), ("c", 9.0)]),
            ScoreRow::new("Value", [("a", 8.0), ("b", 9.5), ("c", 7.0)]),
        ];

        let html = render(page);
        let rows: Vec<&str> = html.split("<tr").skip(1).collect();

        assert_eq!(highlights_per_row(&html), vec![0, 0, 1, 1]);
        assert!(rows[1].contains("Tie"));
        assert!(rows[2].contains("Beta"));
    }

    #[test]
    fn test_table_without_scores_highlights_nothing() {
        let mut page = page();
        page.scores.clear();

        let html = render(page);

        assert_eq!(highlights_per_row(&html), vec![0, 0]);
        assert!(html.contains("–"));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(9.0)), "9.0");
        assert_eq!(format_score(Some(7.46)), "7.5");
        assert_eq!(format_score(None), "–");
    }

    #[test]
    fn test_cell_class() {
        assert!(cell_class(true).contains("score-winner"));
        assert!(!cell_class(false).contains("score-winner"));
    }

    #[test]
    fn test_winner_label() {
        let page = page();
        assert_eq!(winner_label(&page, &RowWinner::Contender("b".to_string())), "Beta");
        assert_eq!(winner_label(&page, &RowWinner::Tie), "Tie");
        assert_eq!(winner_label(&page, &RowWinner::Contender("zz".to_string())), "zz");
    }
}
