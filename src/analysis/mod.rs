//! On-demand text analysis of selected articles.
//!
//! Nothing here is cached: keywords, summaries, drafts and comparisons are
//! recomputed from article bodies on every call.

pub mod compare;
pub mod draft;
pub mod keywords;
pub mod summary;

pub use compare::compare;
pub use draft::generate_draft;
pub use keywords::extract_keywords;
pub use summary::summarize;
