use crate::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::model::GenericError;

/// Seam for sentiment polarity estimation, so the implementation can be
/// swapped without touching detector logic.
pub trait PolarityEstimator: Send + Sync {
    /// Estimate overall polarity of `text` in [-1, 1]; negative values
    /// mean negative sentiment.
    fn estimate(&self, text: &str) -> Result<f64, GenericError>;
}

/// Token-level estimator over the positive/negative lexicons. Polarity is
/// the signed fraction of lexicon hits, so an all-positive text scores
/// 1.0 and a text without any lexicon word scores 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconPolarity;

impl PolarityEstimator for LexiconPolarity {
    fn estimate(&self, text: &str) -> Result<f64, GenericError> {
        let mut positive = 0usize;
        let mut negative = 0usize;

        for token in text.split_whitespace() {
            let token = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if token.is_empty() {
                continue;
            }
            if POSITIVE_WORDS.contains(&token.as_str()) {
                positive += 1;
            } else if NEGATIVE_WORDS.contains(&token.as_str()) {
                negative += 1;
            }
        }

        let hits = positive + negative;
        if hits == 0 {
            return Ok(0.0);
        }

        Ok((positive as f64 - negative as f64) / hits as f64)
    }
}

/// Estimation is best-effort: a failing estimator degrades to neutral
/// polarity instead of failing the analysis.
pub fn polarity_or_neutral(estimator: &dyn PolarityEstimator, text: &str) -> f64 {
    match estimator.estimate(text) {
        Ok(polarity) => polarity.clamp(-1.0, 1.0),
        Err(e) => {
            tracing::warn!(error = %e, "Polarity estimation failed, treating as neutral");
            0.0
        }
    }
}
