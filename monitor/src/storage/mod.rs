pub mod memory;

pub use memory::MemoryReviewStorage;

use async_trait::async_trait;
use detection::model::{AnalysisResult, GenericError, Prediction};

use crate::model::{ModelId, ReviewFilter, ReviewSubmission, StoredReview};

/// Store abstraction for analyzed reviews, injected into the request
/// layer instead of a process-wide list.
#[async_trait]
pub trait ReviewStorage: Send + Sync {
    /// Persist a freshly analyzed review, assigning its id and timestamp.
    async fn save(
        &self,
        submission: &ReviewSubmission,
        analysis: &AnalysisResult,
    ) -> Result<StoredReview, GenericError>;

    async fn list(&self, filter: &ReviewFilter) -> Result<Vec<StoredReview>, GenericError>;

    /// Remove one review; returns false when the id is unknown.
    async fn delete(&self, id: ModelId) -> Result<bool, GenericError>;

    /// Remove every review carrying the given prediction; returns the
    /// number removed.
    async fn delete_by_prediction(
        &self,
        prediction: Prediction,
    ) -> Result<usize, GenericError>;

    /// Drop everything; returns the number removed.
    async fn clear(&self) -> Result<usize, GenericError>;

    /// Distinct product names, sorted.
    async fn products(&self) -> Result<Vec<String>, GenericError>;
}
