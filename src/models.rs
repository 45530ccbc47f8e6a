//! Data models for scraped articles and the per-cycle selection.
//!
//! - [`Candidate`]: a link discovered on a section listing page
//! - [`ArticleRecord`]: a candidate with its extracted timestamp and body
//! - [`Article`]: a record after tone classification; immutable
//! - [`SelectionSet`]: the ranked articles produced by one fetch cycle
//! - [`ToneTally`]: word-level tone counts for one article

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    /// Report order used by tallies and drafts.
    pub const ALL: [Tone; 3] = [Tone::Positive, Tone::Negative, Tone::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Positive => "Positive",
            Tone::Negative => "Negative",
            Tone::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (title, url) pair found on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    /// Absolute URL, unique within a cycle.
    pub url: String,
}

/// An article page after extraction, before tone classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRecord {
    pub title: String,
    pub url: String,
    pub published_at: Option<DateTime<FixedOffset>>,
    /// Paragraph text; never empty.
    pub body: String,
}

impl ArticleRecord {
    /// Title and body joined the way relevance and tone see them.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}

/// A retained article. The tone is fixed when the article is built.
///
/// Deserializing goes through the same checks as extraction: a snapshot with
/// a blank title or body is rejected.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "ArticleFields")]
pub struct Article {
    title: String,
    source: String,
    published_at: Option<DateTime<FixedOffset>>,
    body: String,
    url: String,
    tone: Tone,
}

impl Article {
    pub fn new(record: ArticleRecord, source: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: record.title,
            source: source.into(),
            published_at: record.published_at,
            body: record.body,
            url: record.url,
            tone,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        self.published_at
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// `YYYY-MM-DD`, or `Unknown` for undated articles.
    pub fn date_label(&self) -> String {
        self.published_at
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Wire shape of an [`Article`] before validation.
#[derive(Deserialize)]
struct ArticleFields {
    title: String,
    source: String,
    published_at: Option<DateTime<FixedOffset>>,
    body: String,
    url: String,
    tone: Tone,
}

impl TryFrom<ArticleFields> for Article {
    type Error = String;

    fn try_from(fields: ArticleFields) -> Result<Self, Self::Error> {
        if fields.title.trim().is_empty() {
            return Err(format!("article {} has an empty title", fields.url));
        }
        if fields.body.trim().is_empty() {
            return Err(format!("article {} has an empty body", fields.url));
        }
        Ok(Self {
            title: fields.title,
            source: fields.source,
            published_at: fields.published_at,
            body: fields.body,
            url: fields.url,
            tone: fields.tone,
        })
    }
}

/// The ranked articles of one fetch cycle.
///
/// A new set replaces the previous one on every fetch; analysis functions
/// borrow it and never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SelectionSet {
    articles: Vec<Article>,
}

impl SelectionSet {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }

    /// The articles at `indices`, in the order given.
    ///
    /// Out-of-range and repeated indices are ignored.
    pub fn pick(&self, indices: &[usize]) -> Vec<&Article> {
        let mut seen = HashSet::new();
        indices
            .iter()
            .filter(|&&i| seen.insert(i))
            .filter_map(|&i| self.articles.get(i))
            .collect()
    }
}

/// Word-level tone counts for one article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ToneTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl ToneTally {
    pub fn record(&mut self, tone: Tone) {
        match tone {
            Tone::Positive => self.positive += 1,
            Tone::Negative => self.negative += 1,
            Tone::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, tone: Tone) -> usize {
        match tone {
            Tone::Positive => self.positive,
            Tone::Negative => self.negative,
            Tone::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(title: &str, url: &str, published_at: Option<&str>, body: &str) -> ArticleRecord {
        ArticleRecord {
            title: title.to_string(),
            url: url.to_string(),
            published_at: published_at.map(|ts| DateTime::parse_from_rfc3339(ts).unwrap()),
            body: body.to_string(),
        }
    }

    pub fn article(title: &str, body: &str, tone: Tone) -> Article {
        let url = format!("https://www.bbc.com/news/{}", title.to_lowercase().replace(' ', "-"));
        Article::new(record(title, &url, None, body), "BBC", tone)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{article, record};
    use super::*;

    #[test]
    fn test_article_takes_record_fields() {
        let rec = record(
            "Chip shortage eases",
            "https://www.bbc.com/news/articles/abc",
            Some("2025-05-06T14:30:00+00:00"),
            "Supply is recovering.",
        );
        let article = Article::new(rec, "BBC", Tone::Positive);
        assert_eq!(article.title(), "Chip shortage eases");
        assert_eq!(article.source(), "BBC");
        assert_eq!(article.url(), "https://www.bbc.com/news/articles/abc");
        assert_eq!(article.body(), "Supply is recovering.");
        assert_eq!(article.tone(), Tone::Positive);
        assert_eq!(article.date_label(), "2025-05-06");
    }

    #[test]
    fn test_undated_article_label() {
        let article = article("Undated", "Body text.", Tone::Neutral);
        assert_eq!(article.published_at(), None);
        assert_eq!(article.date_label(), "Unknown");
    }

    #[test]
    fn test_searchable_text_joins_title_and_body() {
        let rec = record("Title", "https://example.com/a", None, "Body");
        assert_eq!(rec.searchable_text(), "Title Body");
    }

    #[test]
    fn test_pick_preserves_order_and_skips_invalid() {
        let set = SelectionSet::new(vec![
            article("Zero", "a", Tone::Neutral),
            article("One", "b", Tone::Neutral),
            article("Two", "c", Tone::Neutral),
        ]);
        let picked: Vec<&str> = set.pick(&[2, 0, 2, 9]).iter().map(|a| a.title()).collect();
        assert_eq!(picked, vec!["Two", "Zero"]);
    }

    #[test]
    fn test_selection_set_serialization() {
        let set = SelectionSet::new(vec![article("Solar record", "Panels.", Tone::Positive)]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("Solar record"));
        assert!(json.contains("\"tone\":\"Positive\""));

        let back: SelectionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_snapshot_with_blank_body_is_rejected() {
        let json = r#"{
            "title": "Moon base",
            "source": "BBC",
            "published_at": "2025-05-06T14:30:00+00:00",
            "body": "  ",
            "url": "https://www.bbc.com/news/moon-base",
            "tone": "Neutral"
        }"#;
        let err = serde_json::from_str::<Article>(json).unwrap_err();
        assert!(err.to_string().contains("empty body"), "{err}");

        let blank_title = json
            .replace("\"Moon base\"", "\"\"")
            .replace("\"  \"", "\"Plans announced.\"");
        let err = serde_json::from_str::<Article>(&blank_title).unwrap_err();
        assert!(err.to_string().contains("empty title"), "{err}");
    }

    #[test]
    fn test_snapshot_article_keeps_timestamp() {
        let json = r#"{
            "title": "Moon base",
            "source": "BBC",
            "published_at": "2025-05-06T14:30:00+02:00",
            "body": "Plans announced.",
            "url": "https://www.bbc.com/news/moon-base",
            "tone": "Positive"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.date_label(), "2025-05-06");
        assert_eq!(article.tone(), Tone::Positive);
        assert_eq!(
            article.published_at().map(|ts| ts.offset().local_minus_utc()),
            Some(2 * 3600)
        );
    }

    #[test]
    fn test_tone_tally_counts() {
        let mut tally = ToneTally::default();
        tally.record(Tone::Positive);
        tally.record(Tone::Neutral);
        tally.record(Tone::Neutral);
        assert_eq!(tally.count(Tone::Positive), 1);
        assert_eq!(tally.count(Tone::Negative), 0);
        assert_eq!(tally.count(Tone::Neutral), 2);
        assert_eq!(tally.total(), 3);
    }
}
