//! Keyword relevance filtering.
//!
//! Search input is split on whitespace, lowercased and capped at three
//! terms. With [`MatchPolicy::All`] every term must appear somewhere in the
//! title or body; [`MatchPolicy::Any`] accepts a record matching one term.

use crate::models::ArticleRecord;
use serde::{Deserialize, Serialize};

/// Terms past this count are ignored.
pub const MAX_TERMS: usize = 3;

/// How multiple search terms combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Every term must match.
    #[default]
    All,
    /// At least one term must match.
    Any,
}

/// Lowercased search terms, at most [`MAX_TERMS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms(Vec<String>);

impl SearchTerms {
    pub fn parse(input: &str) -> Self {
        Self(
            input
                .split_whitespace()
                .take(MAX_TERMS)
                .map(str::to_lowercase)
                .collect(),
        )
    }

    pub fn terms(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `text` satisfies the terms under `policy`. No terms always matches.
    pub fn matches(&self, text: &str, policy: MatchPolicy) -> bool {
        if self.0.is_empty() {
            return true;
        }
        let haystack = text.to_lowercase();
        match policy {
            MatchPolicy::All => self.0.iter().all(|term| haystack.contains(term.as_str())),
            MatchPolicy::Any => self.0.iter().any(|term| haystack.contains(term.as_str())),
        }
    }

    pub fn matches_record(&self, record: &ArticleRecord, policy: MatchPolicy) -> bool {
        self.matches(&record.searchable_text(), policy)
    }
}

/// Keep the records that satisfy `terms`, preserving order.
pub fn filter_relevant(
    records: Vec<ArticleRecord>,
    terms: &SearchTerms,
    policy: MatchPolicy,
) -> Vec<ArticleRecord> {
    records
        .into_iter()
        .filter(|record| terms.matches_record(record, policy))
        .collect()
}
