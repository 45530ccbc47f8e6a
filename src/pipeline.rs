//! One fetch cycle: listing → candidates → records → relevance → tone → ranking.

use crate::config::Config;
use crate::error::NewsError;
use crate::fetcher::HtmlFetcher;
use crate::models::{Article, SelectionSet};
use crate::ranking::rank;
use crate::relevance::{filter_relevant, MatchPolicy, SearchTerms};
use crate::scrapers::bbc::{fetch_articles, index_articles, ListingParser};
use crate::tone::{classify_tone, LexiconScorer, PolarityScorer};
use std::time::Instant;
use tracing::{info, instrument};

/// Runs fetch cycles against one configured site.
pub struct Pipeline {
    config: Config,
    fetcher: HtmlFetcher,
    parser: ListingParser,
    scorer: Box<dyn PolarityScorer>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("fetcher", &self.fetcher)
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Build a pipeline with the built-in [`LexiconScorer`].
    pub fn new(config: Config) -> Result<Self, NewsError> {
        Self::with_scorer(config, Box::new(LexiconScorer::default()))
    }

    /// Build a pipeline that classifies tone with `scorer`.
    ///
    /// # Arguments
    ///
    /// * `config` - Site, HTTP, section and ranking settings
    /// * `scorer` - Polarity source used for every article of every cycle
    ///
    /// # Errors
    ///
    /// [`NewsError::Config`] when the HTTP client cannot be built or the site
    /// origin or article prefix is invalid.
    pub fn with_scorer(
        config: Config,
        scorer: Box<dyn PolarityScorer>,
    ) -> Result<Self, NewsError> {
        let fetcher = HtmlFetcher::new(&config.http)?;
        let parser = ListingParser::new(&config.site)?;
        Ok(Self {
            config,
            fetcher,
            parser,
            scorer,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scorer(&self) -> &dyn PolarityScorer {
        self.scorer.as_ref()
    }

    /// Fetch a named section and build its selection.
    ///
    /// # Errors
    ///
    /// [`NewsError::UnknownSection`] if the section is not configured and
    /// [`NewsError::Fetch`] if the listing page cannot be fetched. Failing
    /// article pages only shrink the result.
    pub async fn fetch(
        &self,
        section: &str,
        terms: &SearchTerms,
    ) -> Result<SelectionSet, NewsError> {
        let listing_url = self
            .config
            .section_url(section)
            .ok_or_else(|| NewsError::UnknownSection(section.to_string()))?;
        self.fetch_listing(listing_url, terms, self.config.match_policy)
            .await
    }

    /// Fetch an explicit listing URL with the given match policy.
    #[instrument(level = "info", skip(self, terms), fields(terms = ?terms.terms()))]
    pub async fn fetch_listing(
        &self,
        listing_url: &str,
        terms: &SearchTerms,
        policy: MatchPolicy,
    ) -> Result<SelectionSet, NewsError> {
        let t0 = Instant::now();

        let candidates = index_articles(&self.fetcher, &self.parser, listing_url).await?;
        let candidate_count = candidates.len();

        let records = fetch_articles(&self.fetcher, candidates, self.config.http.concurrency).await;
        let extracted = records.len();

        let relevant = filter_relevant(records, terms, policy);
        let matched = relevant.len();

        let articles: Vec<Article> = relevant
            .into_iter()
            .map(|record| {
                let tone = classify_tone(self.scorer(), &record.searchable_text());
                Article::new(record, self.config.site.source.clone(), tone)
            })
            .collect();

        let selection = SelectionSet::new(rank(articles, self.config.ranking));
        info!(
            candidates = candidate_count,
            extracted,
            matched,
            selected = selection.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetch cycle complete"
        );
        Ok(selection)
    }
}
