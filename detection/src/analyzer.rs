use crate::{
    classifier, detectors,
    model::{AnalysisResult, Evidence},
    sentiment::{LexiconPolarity, PolarityEstimator, polarity_or_neutral},
};
use std::sync::Arc;
#[cfg(not(test))]
use tracing::{debug, trace};
#[cfg(test)]
use {println as debug, println as trace};

/// Pipeline orchestrator: runs the feature detectors in fixed order over
/// a shared score accumulator and evidence record, then classifies the
/// total. Holds only the injected polarity estimator, so concurrent
/// `analyze` calls need no synchronization.
pub struct ReviewAnalyzer {
    estimator: Arc<dyn PolarityEstimator>,
}

impl Default for ReviewAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(LexiconPolarity))
    }
}

impl ReviewAnalyzer {
    pub fn new(estimator: Arc<dyn PolarityEstimator>) -> Self {
        debug!("Initializing new ReviewAnalyzer");
        Self { estimator }
    }

    /// Analyze a single review. Never fails: empty text and out-of-range
    /// ratings degrade the score instead of erroring.
    pub fn analyze(&self, text: &str, rating: i32) -> AnalysisResult {
        trace!("Starting analysis cycle");

        let mut evidence = Evidence::default();
        let mut score = 0;

        score += detectors::length_signal(text, &mut evidence);
        score += detectors::punctuation_signal(text, &mut evidence);
        score += detectors::capitalization_signal(text, &mut evidence);
        score += detectors::generic_phrase_signal(text, &mut evidence);

        let polarity = polarity_or_neutral(self.estimator.as_ref(), text);
        score += detectors::sentiment_mismatch_signal(text, rating, polarity, &mut evidence);

        score += detectors::spam_signal(text, &mut evidence);
        score += detectors::repeated_char_signal(text, &mut evidence);
        score += detectors::word_diversity_signal(text, &mut evidence);

        let (prediction, confidence) = classifier::classify(score);
        debug!("Scored review at {} -> {}", score, prediction);

        AnalysisResult {
            prediction,
            confidence,
            score,
            features: evidence,
        }
    }

    /// Analyze independent reviews; results match calling `analyze` on
    /// each item individually, in order.
    pub fn analyze_batch<'a, I>(&self, reviews: I) -> Vec<AnalysisResult>
    where
        I: IntoIterator<Item = (&'a str, i32)>,
    {
        reviews
            .into_iter()
            .map(|(text, rating)| self.analyze(text, rating))
            .collect()
    }
}
