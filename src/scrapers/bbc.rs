//! BBC News section scraper.
//!
//! Section listing pages such as <https://www.bbc.com/news/technology> link to
//! articles with relative paths under `/news`. Article pages carry a `<time>`
//! element with a machine-readable `datetime` attribute and the story text in
//! plain `<p>` elements.

use crate::config::SiteConfig;
use crate::error::{ConfigError, FetchError, SkipReason};
use crate::fetcher::HtmlFetcher;
use crate::models::{ArticleRecord, Candidate};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};
use url::Url;

static TIME_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("time").expect("valid time selector"));
static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("valid paragraph selector"));

/// Finds article links on a section listing page.
#[derive(Debug, Clone)]
pub struct ListingParser {
    origin: Url,
    anchors: Selector,
}

impl ListingParser {
    pub fn new(site: &SiteConfig) -> Result<Self, ConfigError> {
        let origin = Url::parse(&site.origin).map_err(|source| ConfigError::InvalidUrl {
            origin: site.origin.clone(),
            source,
        })?;
        let selector = format!("a[href^=\"{}\"]", site.article_prefix);
        let anchors = Selector::parse(&selector).map_err(|e| ConfigError::InvalidSelector {
            selector: selector.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { origin, anchors })
    }

    /// Candidates in document order, one per resolved URL.
    ///
    /// Anchors without visible text are skipped.
    pub fn parse(&self, html: &str) -> Vec<Candidate> {
        let document = Html::parse_document(html);
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for element in document.select(&self.anchors) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            let Ok(resolved) = self.origin.join(href) else {
                debug!(href, "Unresolvable article link");
                continue;
            };
            let title = element
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .join(" ");
            if title.is_empty() {
                continue;
            }
            let url = resolved.to_string();
            if seen.insert(url.clone()) {
                candidates.push(Candidate { title, url });
            }
        }
        candidates
    }
}

/// Offset-carrying forms after RFC 3339. `%#z` takes `+hh:mm`, `+hhmm` or `+hh`.
const AWARE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO-8601 `datetime` attribute.
///
/// # Arguments
///
/// * `raw` - The attribute value as found on the page
///
/// # Returns
///
/// The instant with its original offset. A trailing `Z` means UTC, values
/// without an offset are taken as UTC, and a bare date as midnight UTC.
///
/// # Errors
///
/// [`SkipReason::BadTimestamp`] when the value matches none of these forms.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, SkipReason> {
    let trimmed = raw.trim();
    let normalized = match trimmed.strip_suffix('Z').or_else(|| trimmed.strip_suffix('z')) {
        Some(stem) => format!("{stem}+00:00"),
        None => trimmed.to_string(),
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(ts);
    }
    if let Some(ts) = AWARE_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
    {
        return Ok(ts);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc().fixed_offset())
        .ok_or_else(|| SkipReason::BadTimestamp(raw.to_string()))
}

/// Build a record from an article page, or say why it has to be skipped.
///
/// A page without a `<time datetime>` is undated; a `datetime` that does not
/// parse skips the article.
pub fn extract_article(candidate: &Candidate, html: &str) -> Result<ArticleRecord, SkipReason> {
    let document = Html::parse_document(html);

    let published_at = document
        .select(&TIME_SELECTOR)
        .next()
        .and_then(|time| time.value().attr("datetime"))
        .map(parse_timestamp)
        .transpose()?;

    let body = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .join(" ");
    let body = body.trim();
    if body.is_empty() {
        return Err(SkipReason::EmptyBody);
    }

    Ok(ArticleRecord {
        title: candidate.title.clone(),
        url: candidate.url.clone(),
        published_at,
        body: body.to_string(),
    })
}

/// Fetch a section listing page and return its article candidates.
///
/// A failed listing fetch is returned to the caller; it ends the cycle.
#[instrument(level = "info", skip(fetcher, parser))]
pub async fn index_articles(
    fetcher: &HtmlFetcher,
    parser: &ListingParser,
    listing_url: &str,
) -> Result<Vec<Candidate>, FetchError> {
    let html = fetcher.fetch(listing_url).await?;
    let candidates = parser.parse(&html);
    info!(count = candidates.len(), "Indexed article candidates");
    debug!(
        urls = ?candidates.iter().map(|c| c.url.as_str()).collect::<Vec<_>>(),
        "Candidate URLs"
    );
    Ok(candidates)
}

/// Fetch and extract every candidate, at most `concurrency` at a time.
///
/// Output follows candidate order regardless of which fetch finishes first.
/// Candidates that fail are logged and dropped.
#[instrument(level = "info", skip_all, fields(candidates = candidates.len()))]
pub async fn fetch_articles(
    fetcher: &HtmlFetcher,
    candidates: Vec<Candidate>,
    concurrency: usize,
) -> Vec<ArticleRecord> {
    let records: Vec<ArticleRecord> = stream::iter(candidates)
        .map(|candidate| async move {
            match fetch_article(fetcher, &candidate).await {
                Ok(record) => {
                    debug!(
                        url = %candidate.url,
                        dated = record.published_at.is_some(),
                        "Extracted article"
                    );
                    Some(record)
                }
                Err(reason) => {
                    warn!(url = %candidate.url, %reason, "Skipping article");
                    None
                }
            }
        })
        .buffered(concurrency.max(1))
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(count = records.len(), "Extracted article records");
    records
}

async fn fetch_article(
    fetcher: &HtmlFetcher,
    candidate: &Candidate,
) -> Result<ArticleRecord, SkipReason> {
    let html = fetcher.fetch(&candidate.url).await?;
    extract_article(candidate, &html)
}
