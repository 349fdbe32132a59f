//! The eight feature detectors. Each is a plain function that inspects
//! the review text (and rating where relevant), appends evidence, and
//! returns a signed contribution to the suspicion score. Detectors are
//! independent: order changes evidence ordering only, never the total.

use std::collections::HashSet;

use crate::lexicon::{GENERIC_PHRASES, NEGATIVE_WORDS, POSITIVE_WORDS, SPAM_PATTERNS};
use crate::model::Evidence;

/// Very short reviews are a fake signal, long ones a genuine one.
pub fn length_signal(text: &str, evidence: &mut Evidence) -> i32 {
    let length = text.chars().count();

    if length < 20 {
        evidence
            .suspicious_patterns
            .push("Very short review".to_string());
        30
    } else if length > 100 {
        evidence
            .positive_indicators
            .push("Detailed review".to_string());
        -10
    } else {
        0
    }
}

/// Excess exclamation and question marks, scored independently.
pub fn punctuation_signal(text: &str, evidence: &mut Evidence) -> i32 {
    let exclamation_count = text.matches('!').count();
    let question_count = text.matches('?').count();

    let mut score = 0;
    if exclamation_count > 3 {
        evidence
            .suspicious_patterns
            .push(format!("Excessive exclamation marks ({exclamation_count})"));
        score += 20;
    }

    if question_count > 3 {
        evidence
            .suspicious_patterns
            .push(format!("Too many questions ({question_count})"));
        score += 10;
    }

    score
}

/// More than two fully upper-cased words longer than three characters.
pub fn capitalization_signal(text: &str, evidence: &mut Evidence) -> i32 {
    let caps_words = text.split_whitespace().filter(|w| is_shouted(w)).count();

    if caps_words > 2 {
        evidence
            .suspicious_patterns
            .push(format!("Excessive capitalization ({caps_words} words)"));
        15
    } else {
        0
    }
}

fn is_shouted(word: &str) -> bool {
    word.chars().count() > 3
        && word.chars().any(|c| c.is_alphabetic())
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase())
}

/// Substring matches against the generic phrase list. Three or more
/// matches flag the review outright; one or two only warn.
pub fn generic_phrase_signal(text: &str, evidence: &mut Evidence) -> i32 {
    let lowered = text.to_lowercase();
    let found: Vec<&str> = GENERIC_PHRASES
        .iter()
        .copied()
        .filter(|phrase| lowered.contains(phrase))
        .collect();

    if found.len() > 2 {
        evidence.suspicious_patterns.push(format!(
            "Multiple generic phrases: {}",
            found[..3].join(", ")
        ));
        25
    } else if !found.is_empty() {
        evidence
            .warnings
            .push(format!("Generic phrase detected: {}", found[0]));
        10
    } else {
        0
    }
}

/// Disagreement between the star rating and the detected sentiment.
/// Lexicon hits are substring-based; `polarity` comes from the injected
/// estimator and is neutral (0.0) when estimation failed. Ratings outside
/// 1-5 are accepted: the comparisons simply treat them like the nearest
/// extreme.
pub fn sentiment_mismatch_signal(
    text: &str,
    rating: i32,
    polarity: f64,
    evidence: &mut Evidence,
) -> i32 {
    let lowered = text.to_lowercase();
    let pos_count = POSITIVE_WORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .count();
    let neg_count = NEGATIVE_WORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .count();

    if rating >= 4 && (neg_count > pos_count || polarity < -0.2) {
        evidence
            .suspicious_patterns
            .push("Rating-content mismatch (high rating, negative content)".to_string());
        35
    } else if rating <= 2 && (pos_count > neg_count || polarity > 0.2) {
        evidence
            .suspicious_patterns
            .push("Rating-content mismatch (low rating, positive content)".to_string());
        35
    } else {
        evidence
            .positive_indicators
            .push("Rating matches sentiment".to_string());
        0
    }
}

/// Promotional content: URLs, calls to action, discount codes.
pub fn spam_signal(text: &str, evidence: &mut Evidence) -> i32 {
    let found: Vec<&str> = SPAM_PATTERNS
        .iter()
        .filter(|pattern| pattern.regex.is_match(text))
        .map(|pattern| pattern.name)
        .collect();

    if found.is_empty() {
        return 0;
    }

    let listed = found.iter().take(2).copied().collect::<Vec<_>>().join(", ");
    evidence
        .suspicious_patterns
        .push(format!("Contains promotional content: {listed}"));
    40
}

/// Any character repeated five or more times in a row ("sooooo").
pub fn repeated_char_signal(text: &str, evidence: &mut Evidence) -> i32 {
    if has_repeated_run(text, 5) {
        evidence
            .suspicious_patterns
            .push("Repeated characters detected".to_string());
        20
    } else {
        0
    }
}

fn has_repeated_run(text: &str, min_run: usize) -> bool {
    let mut run = 0usize;
    let mut previous = None;

    for c in text.chars() {
        if previous == Some(c) {
            run += 1;
        } else {
            run = 1;
            previous = Some(c);
        }
        if run >= min_run {
            return true;
        }
    }

    false
}

/// Ratio of unique to total lower-cased tokens. Only meaningful once the
/// review has at least five words.
pub fn word_diversity_signal(text: &str, evidence: &mut Evidence) -> i32 {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.len() < 5 {
        return 0;
    }

    let unique: HashSet<&str> = words.iter().copied().collect();
    let diversity_ratio = unique.len() as f64 / words.len() as f64;

    if diversity_ratio < 0.5 && words.len() > 20 {
        evidence
            .suspicious_patterns
            .push("Low vocabulary diversity".to_string());
        15
    } else {
        if diversity_ratio > 0.8 {
            evidence
                .positive_indicators
                .push("High vocabulary diversity".to_string());
        }
        0
    }
}
