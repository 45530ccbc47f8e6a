//! Frequency-based keyword extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_TOP_N: usize = 5;

/// Filler returned when a text has fewer than `top_n` keywords.
pub const PLACEHOLDER: &str = "relevant";

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]{4,}\b").expect("valid keyword regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "this", "that", "with", "from", "have", "will", "which", "about", "their", "they",
        "been", "were", "would", "could", "should", "while", "after", "before", "said", "says",
        "news", "report", "more", "than", "some", "most", "other", "what", "when", "where",
        "your", "also", "just", "over", "into", "under", "against", "there", "these", "those",
        "however", "because", "since", "being", "through",
    ]
    .into_iter()
    .collect()
});

/// The `top_n` most frequent non-stop-words of four or more letters.
///
/// Ties go to the word seen first. The result always has exactly `top_n`
/// entries, padded with [`PLACEHOLDER`].
///
/// # Arguments
///
/// * `text` - Article body; matching is case-insensitive
/// * `top_n` - Number of keywords wanted
///
/// # Returns
///
/// Lowercase keywords, most frequent first.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let lower = text.to_lowercase();

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in TOKEN_RE.find_iter(&lower).map(|m| m.as_str()) {
        if STOP_WORDS.contains(token) {
            continue;
        }
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // stable: first-seen order survives among equal counts
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));

    let mut keywords: Vec<String> = order.into_iter().take(top_n).map(str::to_string).collect();
    keywords.resize(top_n, PLACEHOLDER.to_string());
    keywords
}
