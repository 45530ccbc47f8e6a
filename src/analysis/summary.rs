//! Templated pseudo-extractive summaries.
//!
//! Summaries stitch the article's own sentences together with rhetorical cue
//! phrases. Intro and conclusion cues are drawn from the caller's RNG, so a
//! seeded generator reproduces a summary exactly.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

pub const DEFAULT_MAX_WORDS: usize = 100;

pub const UNAVAILABLE: &str = "Summary not available.";

pub const INTRO_CUES: [&str; 5] = [
    "This article discusses",
    "According to the article,",
    "The report focuses on",
    "In this article,",
    "It is reported that",
];

pub const CONCLUSION_CUES: [&str; 5] = [
    "In conclusion,",
    "To summarize,",
    "Overall,",
    "Ultimately,",
    "In essence,",
];

/// Positional cues for the enumerated sentences, always in this order.
pub const ENUMERATION_CUES: [&str; 4] = ["First,", "Second,", "In addition,", "Lastly,"];

static BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary regex"));

/// Split after `.`, `!` or `?` when followed by whitespace.
///
/// The punctuation stays with its sentence. Blank text has no sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in BOUNDARY_RE.find_iter(text) {
        // the punctuation mark is a single ASCII byte
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);
    sentences
}

fn pick<'a, R: Rng>(cues: &[&'a str], rng: &mut R) -> &'a str {
    cues[rng.random_range(0..cues.len())]
}

/// Summarize `body` in at most `max_words` words.
///
/// - five or more sentences: intro, the first four sentences behind
///   [`ENUMERATION_CUES`], conclusion with the last sentence
/// - three or four: intro, the second sentence, conclusion
/// - one or two: intro only
/// - none: [`UNAVAILABLE`]
///
/// Truncated output ends in `...`.
///
/// # Arguments
///
/// * `body` - Article text to summarize
/// * `max_words` - Word cap applied to the assembled summary
/// * `rng` - Source for the intro and conclusion cue choice
///
/// # Returns
///
/// The summary, or [`UNAVAILABLE`] when `body` has no sentences.
pub fn summarize<R: Rng>(body: &str, max_words: usize, rng: &mut R) -> String {
    let sentences = split_sentences(body);
    let Some((first, last)) = sentences.first().zip(sentences.last()) else {
        return UNAVAILABLE.to_string();
    };

    let summary = match sentences.len() {
        n if n >= 5 => {
            let intro = format!("{} {}", pick(&INTRO_CUES, rng), first.to_lowercase());
            let enumerated = ENUMERATION_CUES
                .iter()
                .zip(&sentences)
                .map(|(cue, sentence)| format!("{cue} {sentence}"))
                .collect::<Vec<_>>()
                .join(" ");
            let outro = format!("{} {}", pick(&CONCLUSION_CUES, rng), last);
            format!("{intro} {enumerated} {outro}")
        }
        n if n >= 3 => {
            let intro = format!("{} {}", pick(&INTRO_CUES, rng), first.to_lowercase());
            let outro = format!("{} {}", pick(&CONCLUSION_CUES, rng), last);
            format!("{intro} {} {outro}", sentences[1])
        }
        _ => format!("{} {}", pick(&INTRO_CUES, rng), first),
    };

    truncate_words(&summary, max_words)
}

/// Keep the first `max_words` whitespace-separated words, marking a cut with `...`.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_words {
        format!("{}...", words[..max_words].join(" "))
    } else {
        words.join(" ")
    }
}
