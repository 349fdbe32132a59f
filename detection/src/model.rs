use serde::{Deserialize, Serialize};
use std::error::Error;
use strum_macros::{Display as EnumDisplay, EnumString};

pub type GenericError = Box<dyn Error + Send + Sync>;

/// Three-way verdict over a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumDisplay, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Prediction {
    Fake,
    Suspicious,
    Genuine,
}

/// Human-readable explanations accumulated by the detectors, in pipeline
/// order. Ordering matters for output reproducibility, not for scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub suspicious_patterns: Vec<String>,
    pub positive_indicators: Vec<String>,
    pub warnings: Vec<String>,
}

/// Final outcome of analyzing one review. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub prediction: Prediction,
    /// Confidence in percent, within [50, 99], one decimal place.
    pub confidence: f64,
    /// Accumulated suspicion score across all detectors.
    pub score: i32,
    pub features: Evidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictions_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Prediction::Fake).unwrap(), "\"fake\"");
        assert_eq!(Prediction::Suspicious.to_string(), "suspicious");
        assert_eq!(
            serde_json::from_str::<Prediction>("\"genuine\"").unwrap(),
            Prediction::Genuine
        );
    }

    #[test]
    fn result_wire_shape_is_stable() {
        let result = AnalysisResult {
            prediction: Prediction::Suspicious,
            confidence: 65.0,
            score: 30,
            features: Evidence {
                suspicious_patterns: vec!["Very short review".to_string()],
                positive_indicators: vec![],
                warnings: vec![],
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["prediction"], "suspicious");
        assert_eq!(json["score"], 30);
        assert_eq!(
            json["features"]["suspicious_patterns"][0],
            "Very short review"
        );
    }
}
