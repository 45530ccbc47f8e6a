//! Recency ranking with an undated top-up.

use crate::models::Article;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectionLimits {
    /// Most dated articles kept.
    pub max_dated: usize,
    /// Undated articles are appended until the selection reaches this size.
    pub min_selection: usize,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            max_dated: 10,
            min_selection: 6,
        }
    }
}

/// Order `articles` (given in extraction order) into the final selection.
///
/// Dated articles come first, newest first, ties kept in extraction order,
/// capped at `max_dated`. Undated articles fill in, in extraction order,
/// only while the selection is smaller than `min_selection`.
///
/// # Arguments
///
/// * `articles` - Classified articles in extraction order
/// * `limits` - Dated cap and minimum selection size
///
/// # Returns
///
/// At most `max(max_dated, min_selection)` articles, dated before undated.
pub fn rank(articles: Vec<Article>, limits: SelectionLimits) -> Vec<Article> {
    let (mut dated, undated): (Vec<Article>, Vec<Article>) = articles
        .into_iter()
        .partition(|article| article.published_at().is_some());

    // stable
    dated.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
    dated.truncate(limits.max_dated);

    let mut selection = dated;
    let shortfall = limits.min_selection.saturating_sub(selection.len());
    debug!(
        dated = selection.len(),
        undated = undated.len(),
        shortfall,
        "Ranked articles"
    );
    selection.extend(undated.into_iter().take(shortfall));
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::record;
    use crate::models::Tone;

    fn dated(title: &str, ts: &str) -> Article {
        let url = format!("https://www.bbc.com/news/{title}");
        Article::new(record(title, &url, Some(ts), "body"), "BBC", Tone::Neutral)
    }

    fn undated(title: &str) -> Article {
        let url = format!("https://www.bbc.com/news/{title}");
        Article::new(record(title, &url, None, "body"), "BBC", Tone::Neutral)
    }

    fn titles(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(Article::title).collect()
    }

    #[test]
    fn test_twelve_dated_three_undated_keeps_ten_newest() {
        let mut input: Vec<Article> = (1..=12)
            .map(|day| dated(&format!("d{day:02}"), &format!("2025-05-{day:02}T09:00:00+00:00")))
            .collect();
        input.insert(3, undated("u1"));
        input.push(undated("u2"));
        input.push(undated("u3"));

        let ranked = rank(input, SelectionLimits::default());
        assert_eq!(
            titles(&ranked),
            vec!["d12", "d11", "d10", "d09", "d08", "d07", "d06", "d05", "d04", "d03"]
        );
    }

    #[test]
    fn test_three_dated_five_undated_tops_up_to_six() {
        let input = vec![
            undated("u1"),
            dated("old", "2025-01-01T00:00:00+00:00"),
            undated("u2"),
            dated("new", "2025-03-01T00:00:00+00:00"),
            undated("u3"),
            undated("u4"),
            dated("mid", "2025-02-01T00:00:00+00:00"),
            undated("u5"),
        ];
        let ranked = rank(input, SelectionLimits::default());
        assert_eq!(titles(&ranked), vec!["new", "mid", "old", "u1", "u2", "u3"]);
    }

    #[test]
    fn test_ties_keep_extraction_order() {
        let ts = "2025-05-06T12:00:00+00:00";
        let input = vec![dated("first", ts), dated("second", ts), dated("third", ts)];
        let ranked = rank(input, SelectionLimits::default());
        assert_eq!(titles(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_offsets_compare_by_instant() {
        let input = vec![
            dated("utc_noon", "2025-05-06T12:00:00+00:00"),
            // 13:30 in UTC
            dated("later", "2025-05-06T15:30:00+02:00"),
        ];
        let ranked = rank(input, SelectionLimits::default());
        assert_eq!(titles(&ranked), vec!["later", "utc_noon"]);
    }

    #[test]
    fn test_small_input_yields_small_selection() {
        let input = vec![undated("u1"), dated("d1", "2025-05-06T12:00:00+00:00")];
        let ranked = rank(input, SelectionLimits::default());
        assert_eq!(titles(&ranked), vec!["d1", "u1"]);
        assert!(rank(Vec::new(), SelectionLimits::default()).is_empty());
    }

    #[test]
    fn test_six_dated_skips_undated() {
        let mut input: Vec<Article> = (1..=6)
            .map(|day| dated(&format!("d{day}"), &format!("2025-05-0{day}T00:00:00+00:00")))
            .collect();
        input.push(undated("u1"));
        let ranked = rank(input, SelectionLimits::default());
        assert_eq!(ranked.len(), 6);
        assert!(ranked.iter().all(|a| a.published_at().is_some()));
    }
}
