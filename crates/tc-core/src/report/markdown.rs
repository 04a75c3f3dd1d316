//! Markdown report generation

use super::ScoreReport;
use crate::scoring::TIE_LABEL;

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{:.1}", value),
        None => "n/a".to_string(),
    }
}

/// Escape text placed inside a table cell
fn cell_text(text: &str) -> String {
    text.replace('|', "\\|")
}

pub fn generate(report: &ScoreReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", report.title));

    output.push_str("| Criterion |");
    for contender in &report.contenders {
        output.push_str(&format!(" {} |", cell_text(&contender.name)));
    }
    output.push_str(" Winner |\n");

    output.push_str("|---|");
    for _ in &report.contenders {
        output.push_str("---|");
    }
    output.push_str("---|\n");

    for row in &report.rows {
        output.push_str(&format!("| {} |", cell_text(&row.label)));
        for (contender, score) in report.contenders.iter().zip(&row.scores) {
            let cell = format_score(*score);
            if row.winner.is(&contender.key) {
                output.push_str(&format!(" **{}** |", cell));
            } else {
                output.push_str(&format!(" {} |", cell));
            }
        }
        let winner = match row.winner.key() {
            Some(key) => name_for(report, key),
            None => TIE_LABEL,
        };
        output.push_str(&format!(" {} |\n", cell_text(winner)));
    }

    output.push_str("| **Average** |");
    for contender in &report.contenders {
        let cell = format_score(contender.average);
        if report.overall_winner.as_deref() == Some(contender.key.as_str()) {
            output.push_str(&format!(" **{}** |", cell));
        } else {
            output.push_str(&format!(" {} |", cell));
        }
    }
    output.push_str(" |\n\n");

    match &report.overall_winner {
        Some(key) if report.overall_tied => output.push_str(&format!(
            "Overall: {} (tied on average, listed first)\n",
            name_for(report, key)
        )),
        Some(key) => output.push_str(&format!("Overall winner: {}\n", name_for(report, key))),
        None => output.push_str("Overall winner: none (no scores)\n"),
    }

    output
}

fn name_for<'a>(report: &'a ScoreReport, key: &'a str) -> &'a str {
    report
        .contenders
        .iter()
        .find(|c| c.key == key)
        .map(|c| c.name.as_str())
        .unwrap_or(key)
}
