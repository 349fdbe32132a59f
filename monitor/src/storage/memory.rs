use async_trait::async_trait;
use chrono::Utc;
use detection::model::{AnalysisResult, GenericError, Prediction};
use std::collections::BTreeSet;
use tokio::sync::RwLock;

use crate::model::{ModelId, ReviewFilter, ReviewSubmission, StoredReview};
use crate::storage::ReviewStorage;

/// In-memory store. Ids come from a monotonic counter so deleting a
/// review never resurrects its id for a later one.
pub struct MemoryReviewStorage {
    state: RwLock<State>,
}

struct State {
    next_id: ModelId,
    reviews: Vec<StoredReview>,
}

impl MemoryReviewStorage {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                next_id: 1,
                reviews: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryReviewStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewStorage for MemoryReviewStorage {
    async fn save(
        &self,
        submission: &ReviewSubmission,
        analysis: &AnalysisResult,
    ) -> Result<StoredReview, GenericError> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let review = StoredReview {
            id,
            product: submission.product.clone(),
            reviewer: submission.reviewer.clone(),
            rating: submission.rating,
            text: submission.text.clone(),
            prediction: analysis.prediction,
            confidence: analysis.confidence,
            features: analysis.features.clone(),
            timestamp: Utc::now(),
        };
        state.reviews.push(review.clone());
        tracing::debug!(id, "Stored analyzed review");

        Ok(review)
    }

    async fn list(&self, filter: &ReviewFilter) -> Result<Vec<StoredReview>, GenericError> {
        let state = self.state.read().await;
        Ok(state
            .reviews
            .iter()
            .filter(|review| {
                filter
                    .product
                    .as_ref()
                    .is_none_or(|product| &review.product == product)
            })
            .filter(|review| {
                filter
                    .prediction
                    .is_none_or(|prediction| review.prediction == prediction)
            })
            .cloned()
            .collect())
    }

    async fn delete(&self, id: ModelId) -> Result<bool, GenericError> {
        let mut state = self.state.write().await;
        let before = state.reviews.len();
        state.reviews.retain(|review| review.id != id);
        Ok(state.reviews.len() < before)
    }

    async fn delete_by_prediction(
        &self,
        prediction: Prediction,
    ) -> Result<usize, GenericError> {
        let mut state = self.state.write().await;
        let before = state.reviews.len();
        state.reviews.retain(|review| review.prediction != prediction);
        let deleted = before - state.reviews.len();
        tracing::info!(deleted, %prediction, "Bulk-deleted reviews");
        Ok(deleted)
    }

    async fn clear(&self) -> Result<usize, GenericError> {
        let mut state = self.state.write().await;
        let cleared = state.reviews.len();
        state.reviews.clear();
        Ok(cleared)
    }

    async fn products(&self) -> Result<Vec<String>, GenericError> {
        let state = self.state.read().await;
        let products: BTreeSet<String> = state
            .reviews
            .iter()
            .map(|review| review.product.clone())
            .collect();
        Ok(products.into_iter().collect())
    }
}
