use detection::detectors::{
    capitalization_signal, generic_phrase_signal, length_signal, punctuation_signal,
    repeated_char_signal, sentiment_mismatch_signal, spam_signal, word_diversity_signal,
};
use detection::model::Evidence;

#[test]
fn length_flags_short_reviews() {
    let mut evidence = Evidence::default();
    assert_eq!(length_signal(common::SHORT_REVIEW, &mut evidence), 30);
    assert_eq!(evidence.suspicious_patterns, vec!["Very short review"]);
}

#[test]
fn length_boundaries_are_exclusive() {
    // 19 chars is short, 20 is not; 100 is neutral, 101 is detailed
    let mut evidence = Evidence::default();
    assert_eq!(length_signal(&"a".repeat(19), &mut evidence), 30);
    assert_eq!(length_signal(&"a".repeat(20), &mut evidence), 0);
    assert_eq!(length_signal(&"a".repeat(100), &mut evidence), 0);
    assert_eq!(length_signal(&"a".repeat(101), &mut evidence), -10);
    assert_eq!(evidence.positive_indicators, vec!["Detailed review"]);
}

#[test]
fn length_counts_characters_not_bytes() {
    let mut evidence = Evidence::default();
    // 21 multi-byte characters must not be treated as short
    assert_eq!(length_signal(&"é".repeat(21), &mut evidence), 0);
}

#[test]
fn punctuation_scores_exclamations_and_questions_independently() {
    let mut evidence = Evidence::default();
    assert_eq!(punctuation_signal("wow!!!! really???? ok", &mut evidence), 30);
    assert_eq!(
        evidence.suspicious_patterns,
        vec![
            "Excessive exclamation marks (4)",
            "Too many questions (4)",
        ]
    );
}

#[test]
fn punctuation_threshold_is_more_than_three() {
    let mut evidence = Evidence::default();
    assert_eq!(punctuation_signal("fine!!! sure???", &mut evidence), 0);
    assert!(evidence.suspicious_patterns.is_empty());
}

#[test]
fn capitalization_needs_more_than_two_long_caps_words() {
    let mut evidence = Evidence::default();
    assert_eq!(capitalization_signal("GREAT DEAL WOW", &mut evidence), 0);

    assert_eq!(
        capitalization_signal("BUY THIS GREAT DEAL NOW, WOW", &mut evidence),
        15
    );
    // THIS, GREAT, DEAL plus the comma-suffixed NOW, token counts too
    assert_eq!(
        evidence.suspicious_patterns,
        vec!["Excessive capitalization (4 words)"]
    );
}

#[test]
fn capitalization_ignores_short_and_mixed_case_words() {
    let mut evidence = Evidence::default();
    assert_eq!(
        capitalization_signal("WOW Nice ASAP okay GOOD", &mut evidence),
        0
    );
}

#[test]
fn three_generic_phrases_flag_the_review() {
    let mut evidence = Evidence::default();
    let score = generic_phrase_signal(
        "Best product ever, highly recommend, simply awesome",
        &mut evidence,
    );
    assert_eq!(score, 25);
    assert_eq!(
        evidence.suspicious_patterns,
        vec!["Multiple generic phrases: best product ever, highly recommend, awesome"]
    );
}

#[test]
fn one_generic_phrase_only_warns() {
    let mut evidence = Evidence::default();
    assert_eq!(
        generic_phrase_signal("I would highly recommend this blender", &mut evidence),
        10
    );
    assert_eq!(
        evidence.warnings,
        vec!["Generic phrase detected: highly recommend"]
    );
    assert!(evidence.suspicious_patterns.is_empty());
}

#[test]
fn no_generic_phrases_is_silent() {
    let mut evidence = Evidence::default();
    assert_eq!(
        generic_phrase_signal("sturdy hinge, quiet motor", &mut evidence),
        0
    );
    assert_eq!(evidence, Evidence::default());
}

#[test]
fn high_rating_with_negative_content_mismatches() {
    let mut evidence = Evidence::default();
    let score = sentiment_mismatch_signal(
        "terrible quality, broke after a week, total waste",
        5,
        -0.8,
        &mut evidence,
    );
    assert_eq!(score, 35);
    assert_eq!(
        evidence.suspicious_patterns,
        vec!["Rating-content mismatch (high rating, negative content)"]
    );
}

#[test]
fn low_rating_with_positive_content_mismatches() {
    let mut evidence = Evidence::default();
    let score = sentiment_mismatch_signal("great product, love it", 1, 0.9, &mut evidence);
    assert_eq!(score, 35);
    assert_eq!(
        evidence.suspicious_patterns,
        vec!["Rating-content mismatch (low rating, positive content)"]
    );
}

#[test]
fn polarity_alone_can_trigger_a_mismatch() {
    // No lexicon hits either way; the estimator's polarity decides
    let mut evidence = Evidence::default();
    let score = sentiment_mismatch_signal("came in a box", 5, -0.5, &mut evidence);
    assert_eq!(score, 35);
}

#[test]
fn aligned_sentiment_is_a_positive_indicator() {
    let mut evidence = Evidence::default();
    assert_eq!(
        sentiment_mismatch_signal("great product, love it", 5, 0.9, &mut evidence),
        0
    );
    assert_eq!(evidence.positive_indicators, vec!["Rating matches sentiment"]);
}

#[test]
fn middle_ratings_never_mismatch() {
    let mut evidence = Evidence::default();
    assert_eq!(
        sentiment_mismatch_signal("terrible awful horrible", 3, -1.0, &mut evidence),
        0
    );
    assert_eq!(evidence.positive_indicators, vec!["Rating matches sentiment"]);
}

#[test]
fn spam_lists_at_most_two_pattern_names() {
    let mut evidence = Evidence::default();
    let score = spam_signal(common::PROMO_REVIEW, &mut evidence);
    assert_eq!(score, 40);
    // www., .com, click here, buy now and discount code all match; first two listed
    assert_eq!(
        evidence.suspicious_patterns,
        vec!["Contains promotional content: www., .com"]
    );
}

#[test]
fn spam_score_is_flat_regardless_of_match_count() {
    let mut single = Evidence::default();
    let mut many = Evidence::default();
    assert_eq!(spam_signal("more at https://shop.example", &mut single), 40);
    assert_eq!(spam_signal(common::PROMO_REVIEW, &mut many), 40);
}

#[test]
fn clean_text_has_no_spam_signal() {
    let mut evidence = Evidence::default();
    assert_eq!(spam_signal(common::BALANCED_REVIEW, &mut evidence), 0);
}

#[test]
fn five_repeats_trigger_the_repeated_char_signal() {
    let mut evidence = Evidence::default();
    assert_eq!(repeated_char_signal("sooooo good", &mut evidence), 20);
    assert_eq!(
        evidence.suspicious_patterns,
        vec!["Repeated characters detected"]
    );

    let mut evidence = Evidence::default();
    assert_eq!(repeated_char_signal("soooo good", &mut evidence), 0);
    assert!(evidence.suspicious_patterns.is_empty());
}

#[test]
fn repeated_run_must_be_consecutive() {
    let mut evidence = Evidence::default();
    assert_eq!(repeated_char_signal("ababababab", &mut evidence), 0);
}

#[test]
fn low_diversity_needs_more_than_twenty_words() {
    let mut evidence = Evidence::default();
    // 10 words, all the same: ratio 0.1 but too few words to flag
    assert_eq!(
        word_diversity_signal(&common::repetitive_review("nice", 10), &mut evidence),
        0
    );

    assert_eq!(
        word_diversity_signal(&common::repetitive_review("nice", 21), &mut evidence),
        15
    );
    assert_eq!(evidence.suspicious_patterns, vec!["Low vocabulary diversity"]);
}

#[test]
fn high_diversity_is_an_indicator_without_score_change() {
    let mut evidence = Evidence::default();
    assert_eq!(
        word_diversity_signal("every single word here is different", &mut evidence),
        0
    );
    assert_eq!(
        evidence.positive_indicators,
        vec!["High vocabulary diversity"]
    );
}

#[test]
fn diversity_skips_very_short_reviews() {
    let mut evidence = Evidence::default();
    assert_eq!(word_diversity_signal("four unique words here", &mut evidence), 0);
    assert_eq!(evidence, Evidence::default());
}
