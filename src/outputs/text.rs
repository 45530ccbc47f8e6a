//! Plain-text rendering for the terminal.

use crate::models::{Article, SelectionSet, Tone, ToneTally};
use crate::utils::truncate_chars;
use std::fmt::Write;

/// Characters of a title kept in tally labels.
const LABEL_CHARS: usize = 15;
/// Width of the longest bar in a tally chart.
const BAR_WIDTH: usize = 40;

/// Numbered one-line entries: `[i] Title (date) - Tone`.
pub fn render_listing(selection: &SelectionSet) -> String {
    let mut out = String::new();
    for (i, article) in selection.articles().iter().enumerate() {
        writeln!(
            out,
            "[{i}] {} ({}) - {}",
            article.title(),
            article.date_label(),
            article.tone()
        )
        .unwrap();
    }
    out
}

/// Full text of each article with its metadata.
pub fn render_view(articles: &[&Article]) -> String {
    let mut out = String::new();
    for article in articles {
        let date = article
            .published_at()
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_else(|| "Unknown".to_string());
        writeln!(out, "### {}", article.title()).unwrap();
        writeln!(out, "Source: {} | Date: {}", article.source(), date).unwrap();
        writeln!(out, "{}\n", article.url()).unwrap();
        writeln!(out, "{}\n", article.body()).unwrap();
    }
    out
}

/// Word counts per tone with a horizontal bar chart.
pub fn render_tone_report(report: &[(&Article, ToneTally)]) -> String {
    let peak = report
        .iter()
        .flat_map(|(_, tally)| Tone::ALL.map(|tone| tally.count(tone)))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut out = String::new();
    for (article, tally) in report {
        writeln!(out, "**{}**", article.title()).unwrap();
        writeln!(
            out,
            "Positive: {}, Negative: {}, Neutral: {}",
            tally.positive, tally.negative, tally.neutral
        )
        .unwrap();
        let label = truncate_chars(article.title(), LABEL_CHARS);
        for tone in Tone::ALL {
            let count = tally.count(tone);
            let bar = "#".repeat(count * BAR_WIDTH / peak);
            writeln!(out, "  {label:<18} {:<8} {bar} {count}", tone.as_str()).unwrap();
        }
        out.push('\n');
    }
    out
}
