//! Output for the command-line front end.
//!
//! - [`text`]: terminal rendering of listings, article views and tone tallies
//! - [`json`]: optional JSON snapshot of a cycle's selection
//!
//! Analysis text (drafts, comparisons) is produced by [`crate::analysis`] and
//! printed as is.

pub mod json;
pub mod text;
