use chrono::{DateTime, Utc};
use detection::model::{Evidence, Prediction};
use serde::{Deserialize, Serialize};

pub type ModelId = i64;

fn default_product() -> String {
    "Unknown".to_string()
}

fn default_reviewer() -> String {
    "Anonymous".to_string()
}

/// A review as submitted for analysis. Product and reviewer are optional
/// on the wire and fall back to placeholder names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSubmission {
    #[serde(default = "default_product")]
    pub product: String,
    #[serde(default = "default_reviewer")]
    pub reviewer: String,
    pub rating: i32,
    pub text: String,
}

/// An analyzed review held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReview {
    pub id: ModelId,
    pub product: String,
    pub reviewer: String,
    pub rating: i32,
    pub text: String,
    pub prediction: Prediction,
    pub confidence: f64,
    pub features: Evidence,
    pub timestamp: DateTime<Utc>,
}

/// Listing filter; `None` means no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub product: Option<String>,
    pub prediction: Option<Prediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewStatistics {
    pub total: usize,
    pub fake_count: usize,
    pub suspicious_count: usize,
    pub genuine_count: usize,
    /// Share of fake reviews in percent, one decimal place.
    pub fake_percentage: f64,
    /// Mean confidence across all stored reviews, one decimal place.
    pub average_confidence: f64,
}

pub fn compute_statistics(reviews: &[StoredReview]) -> ReviewStatistics {
    let total = reviews.len();
    let count_of = |prediction: Prediction| {
        reviews
            .iter()
            .filter(|review| review.prediction == prediction)
            .count()
    };
    let fake_count = count_of(Prediction::Fake);
    let suspicious_count = count_of(Prediction::Suspicious);
    let genuine_count = count_of(Prediction::Genuine);

    let (fake_percentage, average_confidence) = if total == 0 {
        (0.0, 0.0)
    } else {
        let confidence_sum: f64 = reviews.iter().map(|review| review.confidence).sum();
        (
            round_to_tenth(fake_count as f64 * 100.0 / total as f64),
            round_to_tenth(confidence_sum / total as f64),
        )
    };

    ReviewStatistics {
        total,
        fake_count,
        suspicious_count,
        genuine_count,
        fake_percentage,
        average_confidence,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
