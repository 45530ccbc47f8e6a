//! News site scrapers.
//!
//! A scraper works in two phases:
//!
//! 1. **Indexing**: fetch a section listing page and collect deduplicated
//!    article candidates (`index_articles`)
//! 2. **Fetching**: download each candidate page and extract its timestamp
//!    and paragraph text (`fetch_articles`)
//!
//! A failed listing fetch is an error for the caller. A failed or empty
//! article page is logged and skipped.
//!
//! | Source | Module | Method |
//! |--------|--------|--------|
//! | BBC News | [`bbc`] | HTML scraping of section pages |

pub mod bbc;
