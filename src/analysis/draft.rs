//! Draft report over a set of picked articles.

use super::keywords::{extract_keywords, DEFAULT_TOP_N};
use super::summary::{summarize, DEFAULT_MAX_WORDS};
use crate::models::{Article, Tone};
use rand::Rng;
use std::collections::HashMap;
use std::fmt::Write;

/// Titles listed per tone in the closing tally.
const TITLES_PER_TONE: usize = 3;

/// Per-article tone, keywords and summary, then a tally of articles by tone.
pub fn generate_draft<'a, I, R>(articles: I, rng: &mut R) -> String
where
    I: IntoIterator<Item = &'a Article>,
    R: Rng,
{
    let mut draft = String::from("**News Comparison Draft**\n\n");
    let mut by_tone: HashMap<Tone, Vec<&str>> = HashMap::new();

    for article in articles {
        let keywords = extract_keywords(article.body(), DEFAULT_TOP_N);
        let summary = summarize(article.body(), DEFAULT_MAX_WORDS, rng);
        writeln!(
            draft,
            "• **{}** ({} - {})",
            article.title(),
            article.source(),
            article.date_label()
        )
        .unwrap();
        writeln!(draft, "  → Tone: {}", article.tone()).unwrap();
        writeln!(draft, "  → Keywords: {}", keywords.join(", ")).unwrap();
        writeln!(draft, "  → Summary: {summary}\n").unwrap();
        by_tone.entry(article.tone()).or_default().push(article.title());
    }

    draft.push_str("\n---\n\n**Analysis Summary**\n");
    for tone in Tone::ALL {
        let Some(titles) = by_tone.get(&tone) else {
            continue;
        };
        let shown: Vec<&str> = titles.iter().take(TITLES_PER_TONE).copied().collect();
        writeln!(
            draft,
            "- {tone} articles: {} ({})",
            titles.len(),
            shown.join(", ")
        )
        .unwrap();
    }
    draft
}
