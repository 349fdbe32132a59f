use crate::model::Prediction;

/// Map an accumulated suspicion score to a verdict and a confidence
/// percentage. Piecewise-linear, no learned parameters; confidence is
/// clamped to [50, 99] and reported to one decimal place.
pub fn classify(score: i32) -> (Prediction, f64) {
    let (prediction, confidence) = if score >= 60 {
        (Prediction::Fake, f64::min(95.0, 60.0 + score as f64 / 2.0))
    } else if score >= 30 {
        (Prediction::Suspicious, 50.0 + score as f64 / 2.0)
    } else {
        (Prediction::Genuine, 100.0 - score as f64 * 2.0)
    };

    (prediction, round_to_tenth(confidence.clamp(50.0, 99.0)))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
