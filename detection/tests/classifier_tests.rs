use detection::classifier::classify;
use detection::model::Prediction;

#[test]
fn score_boundaries() {
    assert_eq!(classify(60).0, Prediction::Fake);
    assert_eq!(classify(59).0, Prediction::Suspicious);
    assert_eq!(classify(30).0, Prediction::Suspicious);
    assert_eq!(classify(29).0, Prediction::Genuine);
}

#[test]
fn fake_confidence_grows_with_score_up_to_95() {
    assert_eq!(classify(60), (Prediction::Fake, 90.0));
    assert_eq!(classify(65), (Prediction::Fake, 92.5));
    // 60 + 70/2 == 95, the cap
    assert_eq!(classify(70), (Prediction::Fake, 95.0));
    assert_eq!(classify(500), (Prediction::Fake, 95.0));
}

#[test]
fn suspicious_confidence_is_half_score_above_fifty() {
    assert_eq!(classify(30), (Prediction::Suspicious, 65.0));
    assert_eq!(classify(45), (Prediction::Suspicious, 72.5));
    assert_eq!(classify(59), (Prediction::Suspicious, 79.5));
}

#[test]
fn genuine_confidence_is_clamped_into_range() {
    // 100 - 0*2 == 100, clamped down to 99
    assert_eq!(classify(0), (Prediction::Genuine, 99.0));
    // negative scores (length bonus) would exceed 100 without the clamp
    assert_eq!(classify(-10), (Prediction::Genuine, 99.0));
    // 100 - 25*2 == 50, right at the floor
    assert_eq!(classify(25), (Prediction::Genuine, 50.0));
    // 100 - 29*2 == 42, clamped up to 50
    assert_eq!(classify(29), (Prediction::Genuine, 50.0));
}

#[test]
fn confidence_stays_within_bounds_for_any_score() {
    for score in -100..400 {
        let (_, confidence) = classify(score);
        assert!(
            (50.0..=99.0).contains(&confidence),
            "score {score} produced confidence {confidence}"
        );
    }
}
