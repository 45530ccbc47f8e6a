//! # News Compare
//!
//! Fetches a news section listing, extracts and ranks its articles, and
//! derives tone, keyword, summary and comparison reports from them.
//!
//! ## Pipeline
//!
//! 1. **Listing**: fetch the section page and collect deduplicated article links
//! 2. **Extraction**: fetch each article, keep its `<time>` stamp and paragraph text
//! 3. **Relevance**: keep articles matching the search terms
//! 4. **Tone**: classify each article as positive, negative or neutral
//! 5. **Ranking**: newest first, topped up with undated articles
//!
//! The result is a [`SelectionSet`] that the [`analysis`] functions borrow.
//!
//! ```no_run
//! use news_compare::{analysis, Config, Pipeline, SearchTerms};
//!
//! # async fn run() -> Result<(), news_compare::NewsError> {
//! let pipeline = Pipeline::new(Config::default())?;
//! let selection = pipeline.fetch("Technology", &SearchTerms::parse("ai")).await?;
//! if let [a, b, ..] = selection.articles() {
//!     println!("{}", analysis::compare(a, b));
//! }
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod ranking;
pub mod relevance;
pub mod scrapers;
pub mod tone;
pub mod utils;

pub use config::{load_config, Config};
pub use error::{ConfigError, FetchError, NewsError, SkipReason};
pub use models::{Article, SelectionSet, Tone, ToneTally};
pub use pipeline::Pipeline;
pub use relevance::{MatchPolicy, SearchTerms};
pub use tone::{analyze_tone, LexiconScorer, PolarityScorer};
