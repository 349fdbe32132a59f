use std::error::Error;
use std::sync::Arc;

use detection::analyzer::ReviewAnalyzer;
use monitor::api::{AppState, run_backend};
use monitor::executable_utils::{initialize_executable, initialize_tracing};
use monitor::storage::{MemoryReviewStorage, ReviewStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("Starting backend...");
    let config = initialize_executable()?;
    initialize_tracing(&config.backend.log_level);

    let storage: Arc<dyn ReviewStorage> = Arc::new(MemoryReviewStorage::new());
    let state = AppState::new(Arc::new(ReviewAnalyzer::default()), storage);

    run_backend(config.backend, state).await
}
