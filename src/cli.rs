//! Command-line interface definitions for News Compare.
//!
//! Each invocation runs one fetch cycle and then performs a single action on
//! the resulting selection.

use clap::{Parser, ValueEnum};
use news_compare::relevance::MatchPolicy;

/// What to do with the fetched selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Print the ranked selection, one line per article.
    #[default]
    List,
    /// Print the full text of the picked articles.
    View,
    /// Word-level tone tally of the picked articles.
    Tone,
    /// Draft report with tone, keywords and summary per picked article.
    Draft,
    /// Comparison report; needs exactly two picked articles.
    Compare,
}

/// Command-line arguments for News Compare.
///
/// # Examples
///
/// ```sh
/// # List the current Technology selection
/// news_compare --section Technology
///
/// # Draft over articles 0 and 2 that mention both "ai" and "chips"
/// news_compare -s Technology -q "ai chips" --action draft --pick 0,2
///
/// # Compare two articles with reproducible summaries
/// news_compare --action compare --pick 1,3 --seed 7
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News section to fetch
    #[arg(short, long, default_value = "Technology")]
    pub section: String,

    /// Search keywords; only the first three are used
    #[arg(short = 'q', long, default_value = "")]
    pub search: String,

    /// How multiple search keywords combine (overrides the config file)
    #[arg(long, value_enum)]
    pub match_policy: Option<MatchPolicy>,

    /// Optional path to config.yaml file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Action to run on the selection
    #[arg(short, long, value_enum, default_value_t = Action::List)]
    pub action: Action,

    /// Zero-based indices of the articles to act on (default: all)
    #[arg(short, long, value_delimiter = ',')]
    pub pick: Vec<usize>,

    /// Seed for summary cue selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for a JSON snapshot of the selection
    #[arg(short, long)]
    pub json_output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["news_compare"]);
        assert_eq!(cli.section, "Technology");
        assert_eq!(cli.search, "");
        assert_eq!(cli.action, Action::List);
        assert!(cli.pick.is_empty());
        assert_eq!(cli.match_policy, None);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "news_compare",
            "--section",
            "Health",
            "--search",
            "vaccine trial",
            "--match-policy",
            "any",
            "--action",
            "compare",
            "--pick",
            "1,3",
            "--seed",
            "42",
        ]);

        assert_eq!(cli.section, "Health");
        assert_eq!(cli.search, "vaccine trial");
        assert_eq!(cli.match_policy, Some(MatchPolicy::Any));
        assert_eq!(cli.action, Action::Compare);
        assert_eq!(cli.pick, vec![1, 3]);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "news_compare",
            "-s",
            "Science",
            "-q",
            "mars",
            "-a",
            "draft",
            "-j",
            "/tmp/json",
        ]);

        assert_eq!(cli.section, "Science");
        assert_eq!(cli.search, "mars");
        assert_eq!(cli.action, Action::Draft);
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
    }
}
