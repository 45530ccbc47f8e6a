//! Tone classification.
//!
//! Polarity scoring sits behind [`PolarityScorer`] so the classifier does not
//! depend on a particular sentiment backend. [`LexiconScorer`] is the
//! built-in general-purpose implementation.

use crate::models::{Article, Tone, ToneTally};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Polarity above this is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity below this is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Maps free text to a polarity in `[-1.0, 1.0]`.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

impl Tone {
    /// Both thresholds are exclusive: exactly 0.1 and -0.1 are neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Tone::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }
}

pub fn classify_tone(scorer: &dyn PolarityScorer, text: &str) -> Tone {
    Tone::from_polarity(scorer.polarity(text))
}

/// General-purpose word weights. Values are in `[-1.0, 1.0]`.
const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("good", 0.7),
    ("great", 0.8),
    ("best", 1.0),
    ("better", 0.5),
    ("excellent", 1.0),
    ("success", 0.6),
    ("successful", 0.75),
    ("breakthrough", 0.6),
    ("benefit", 0.4),
    ("benefits", 0.4),
    ("improve", 0.4),
    ("improved", 0.4),
    ("improvement", 0.4),
    ("innovative", 0.5),
    ("promising", 0.5),
    ("positive", 0.23),
    ("hope", 0.3),
    ("hopeful", 0.4),
    ("safe", 0.5),
    ("win", 0.6),
    ("growth", 0.3),
    ("strong", 0.43),
    ("happy", 0.8),
    ("love", 0.5),
    ("welcome", 0.8),
    ("remarkable", 0.75),
    ("effective", 0.6),
    ("boost", 0.4),
    ("record", 0.2),
    ("new", 0.14),
    // Negative
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("poor", -0.4),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.5),
    ("crisis", -0.6),
    ("risk", -0.3),
    ("risks", -0.3),
    ("threat", -0.5),
    ("danger", -0.6),
    ("dangerous", -0.6),
    ("harm", -0.6),
    ("harmful", -0.6),
    ("concern", -0.3),
    ("concerns", -0.3),
    ("warning", -0.4),
    ("attack", -0.5),
    ("killed", -0.8),
    ("death", -0.7),
    ("deaths", -0.7),
    ("loss", -0.5),
    ("losses", -0.5),
    ("decline", -0.4),
    ("problem", -0.4),
    ("problems", -0.4),
    ("controversial", -0.4),
    ("scandal", -0.7),
    ("terrible", -1.0),
    ("sad", -0.5),
    ("angry", -0.6),
    ("lawsuit", -0.4),
    ("ban", -0.4),
    ("shortage", -0.4),
];

const NEGATORS: &[&str] = &["not", "no", "never", "without"];

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z']+").expect("valid word regex"));

/// Lexicon scorer: mean weight of the lexicon words present in the text.
///
/// A negator immediately before a lexicon word flips that word's sign.
/// Text without lexicon words scores `0.0`.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    weights: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self {
            weights: LEXICON.iter().copied().collect(),
        }
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let mut total = 0.0;
        let mut hits = 0usize;
        let mut negated = false;

        for word in WORD_RE.find_iter(&lower).map(|m| m.as_str()) {
            if let Some(&weight) = self.weights.get(word) {
                total += if negated { -weight } else { weight };
                hits += 1;
            }
            negated = NEGATORS.contains(&word);
        }

        if hits == 0 {
            0.0
        } else {
            (total / hits as f64).clamp(-1.0, 1.0)
        }
    }
}

static TALLY_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]{3,}\b").expect("valid tally token regex"));

/// Classify every word of three or more letters in `body` on its own.
pub fn tally_words(scorer: &dyn PolarityScorer, body: &str) -> ToneTally {
    let lower = body.to_lowercase();
    let mut tally = ToneTally::default();
    for token in TALLY_TOKEN_RE.find_iter(&lower) {
        tally.record(classify_tone(scorer, token.as_str()));
    }
    tally
}

/// Word-level tone tally for each article, independent of the article's own tone.
pub fn analyze_tone<'a, I>(
    scorer: &dyn PolarityScorer,
    articles: I,
) -> Vec<(&'a Article, ToneTally)>
where
    I: IntoIterator<Item = &'a Article>,
{
    articles
        .into_iter()
        .map(|article| (article, tally_words(scorer, article.body())))
        .collect()
}
