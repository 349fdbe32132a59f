//! Static detector configuration: phrase lists, spam patterns and the
//! sentiment lexicons. Built once, shared read-only by every analysis.

use once_cell::sync::Lazy;
use regex::Regex;

/// Template phrases that show up verbatim in low-effort reviews.
/// Matched case-insensitively as substrings.
pub const GENERIC_PHRASES: &[&str] = &[
    "best product ever",
    "highly recommend",
    "amazing product",
    "must buy",
    "life changing",
    "perfect",
    "awesome",
    "excellent",
    "worst ever",
    "terrible product",
    "waste of money",
    "don't buy",
    "save your money",
    "total scam",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "love",
    "best",
    "amazing",
    "wonderful",
    "fantastic",
    "perfect",
    "awesome",
    "outstanding",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "worst",
    "hate",
    "disappointed",
    "awful",
    "horrible",
    "useless",
    "waste",
    "regret",
];

/// A compiled promotional-content pattern plus the name reported in
/// evidence when it matches.
pub struct SpamPattern {
    pub name: &'static str,
    pub regex: Regex,
}

pub static SPAM_PATTERNS: Lazy<Vec<SpamPattern>> = Lazy::new(|| {
    [
        ("http[s]?://", r"http[s]?://"),
        ("www.", r"www\."),
        (".com", r"\.com"),
        ("click here", r"click here"),
        ("buy now", r"buy now"),
        ("limited offer", r"limited offer"),
        ("discount code", r"discount code"),
    ]
    .into_iter()
    .map(|(name, pattern)| SpamPattern {
        name,
        regex: Regex::new(&format!("(?i){pattern}")).expect("invalid spam pattern"),
    })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spam_patterns_compile_and_match_case_insensitively() {
        assert_eq!(SPAM_PATTERNS.len(), 7);
        let url = SPAM_PATTERNS
            .iter()
            .find(|p| p.name == "http[s]?://")
            .unwrap();
        assert!(url.regex.is_match("see HTTPS://example.org"));
        assert!(!url.regex.is_match("no links here"));
    }

    #[test]
    fn lexicons_are_disjoint() {
        for word in POSITIVE_WORDS {
            assert!(!NEGATIVE_WORDS.contains(word), "{word} in both lexicons");
        }
    }
}
