use crate::model::{Score, Summary};

/// `None` for a zero count so callers can drop it from the output line.
pub fn format_count(count: usize, singular: &str, plural: &str) -> Option<String> {
    match count {
        0 => None,
        1 => Some(format!("1 {}", singular)),
        n => Some(format!("{} {}", n, plural)),
    }
}

pub fn score_line(score: &Score) -> String {
    let parts: Vec<String> = [
        format_count(score.bulls, "bull", "bulls"),
        format_count(score.cows, "cow", "cows"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        "No bulls, no cows".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn render_summary(summary: &Summary) -> String {
    let rule = "=".repeat(70);
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", rule));
    out.push_str("GAME STATISTICS\n");
    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("Total games played: {}\n", summary.total_games));
    out.push_str(&format!(
        "Best score: {} | Avg: {:.1}\n",
        summary.best_guesses, summary.avg_guesses
    ));
    out.push_str(&format!(
        "Fastest: {}s | Avg: {:.1}s\n",
        summary.fastest_time, summary.avg_time
    ));
    out.push_str("\nLast 5 games:\n");
    for record in &summary.recent {
        out.push_str(&format!(
            "{} - {} guesses, {}s\n",
            record.date, record.guesses, record.time
        ));
    }
    out.push_str(&format!("{}\n\n", rule));
    out
}
