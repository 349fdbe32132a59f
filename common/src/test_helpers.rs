/// Shared Review Fixtures for Cross-Crate Use
///
/// Canned review texts exercised by both the `detection` and `monitor`
/// test suites, so the two crates agree on what a "hype" or "promo"
/// review looks like.

/// Below the 20-character floor of the length detector.
pub const SHORT_REVIEW: &str = "ok";

/// Enthusiastic but generic praise: excess exclamation marks plus two
/// phrases from the generic phrase list.
pub const HYPE_REVIEW: &str =
    "This is the best product ever! I love it! Highly recommend to everyone!!!";

/// Promotional content that trips the spam patterns.
pub const PROMO_REVIEW: &str =
    "Amazing deal!!!! Click here at www.bestdeals.com and buy now with discount code SAVE20";

/// An unremarkable genuine review: no flagged phrases, sentiment in line
/// with a positive rating.
pub const BALANCED_REVIEW: &str =
    "Arrived on time, packaging was fine, works as described, would consider buying again for the price.";

/// Repeat one word `count` times, for vocabulary diversity cases.
pub fn repetitive_review(word: &str, count: usize) -> String {
    vec![word; count].join(" ")
}
