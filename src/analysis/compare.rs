//! Two-article comparison report.

use super::keywords::extract_keywords;
use crate::models::{Article, Tone};
use std::fmt::Write;

/// Keywords per article in a comparison.
pub const COMPARE_TOP_N: usize = 4;

/// How the first article frames its story.
pub fn framing_of_first(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "breakthrough",
        Tone::Negative => "controversial issue",
        Tone::Neutral => "balanced development",
    }
}

/// What the second article highlights.
pub fn framing_of_second(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "benefits",
        Tone::Negative => "concerns",
        Tone::Neutral => "neutral implications",
    }
}

/// Render the fixed-structure comparison of two articles.
pub fn compare(first: &Article, second: &Article) -> String {
    // Keyword lists are padded to COMPARE_TOP_N, so [0] and [1] always exist.
    let k1 = extract_keywords(first.body(), COMPARE_TOP_N);
    let k2 = extract_keywords(second.body(), COMPARE_TOP_N);
    let tone1 = first.tone().as_str().to_lowercase();
    let tone2 = second.tone().as_str().to_lowercase();

    let mut report = String::new();
    writeln!(report, "# Comparative Analysis\n").unwrap();
    writeln!(report, "## Introduction").unwrap();
    writeln!(
        report,
        "Comparing \"{}\" and \"{}\".\n",
        first.title(),
        second.title()
    )
    .unwrap();
    writeln!(report, "## Tone Comparison").unwrap();
    writeln!(
        report,
        "Article 1 is *{tone1}*, using words like {}, {}.",
        k1[0], k1[1]
    )
    .unwrap();
    writeln!(
        report,
        "Article 2 is *{tone2}*, with terms such as {}, {}.\n",
        k2[0], k2[1]
    )
    .unwrap();
    writeln!(report, "## Framing Analysis").unwrap();
    writeln!(
        report,
        "Article 1 frames the issue as a {}, while Article 2 highlights {}.\n",
        framing_of_first(first.tone()),
        framing_of_second(second.tone())
    )
    .unwrap();
    writeln!(report, "## Conclusion").unwrap();
    write!(report, "The two articles provide contrasting perspectives.").unwrap();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::article;

    #[test]
    fn test_positive_vs_negative_framing() {
        let a = article(
            "Vaccine trial succeeds",
            "Trial results vaccine vaccine hope.",
            Tone::Positive,
        );
        let b = article("Factory closes", "Workers workers lose jobs.", Tone::Negative);
        let report = compare(&a, &b);
        assert!(report.contains("frames the issue as a breakthrough"));
        assert!(report.contains("Article 2 highlights concerns."));
    }

    #[test]
    fn test_framing_ignores_keywords() {
        let a = article("A", "controversial concerns crisis", Tone::Positive);
        let b = article("B", "breakthrough benefits", Tone::Negative);
        let report = compare(&a, &b);
        assert!(report.contains("as a breakthrough,"));
        assert!(report.contains("highlights concerns."));
    }

    #[test]
    fn test_neutral_framing() {
        let a = article("A", "text", Tone::Neutral);
        let b = article("B", "text", Tone::Neutral);
        let report = compare(&a, &b);
        assert!(report.contains("as a balanced development,"));
        assert!(report.contains("highlights neutral implications."));
        assert_eq!(framing_of_first(Tone::Negative), "controversial issue");
        assert_eq!(framing_of_second(Tone::Positive), "benefits");
    }

    #[test]
    fn test_report_structure_and_keywords() {
        let a = article(
            "Solar boom",
            "Solar panels solar panels solar farms.",
            Tone::Positive,
        );
        let b = article("Empty words", "It is.", Tone::Neutral);
        let report = compare(&a, &b);

        assert!(report.starts_with("# Comparative Analysis\n"));
        assert!(report.contains("Comparing \"Solar boom\" and \"Empty words\"."));
        assert!(report.contains("Article 1 is *positive*, using words like solar, panels."));
        assert!(report.contains("Article 2 is *neutral*, with terms such as relevant, relevant."));
        assert!(report.contains("## Framing Analysis"));
        assert!(report.ends_with("The two articles provide contrasting perspectives."));
    }
}
