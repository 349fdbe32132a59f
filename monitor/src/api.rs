use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use detection::analyzer::ReviewAnalyzer;
use detection::model::{GenericError, Prediction};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde::Deserialize;
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use common::config::BackendConfig;

use crate::model::{ModelId, ReviewFilter, ReviewSubmission, compute_statistics};
use crate::storage::ReviewStorage;

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<ReviewAnalyzer>,
    storage: Arc<dyn ReviewStorage>,
}

impl AppState {
    pub fn new(analyzer: Arc<ReviewAnalyzer>, storage: Arc<dyn ReviewStorage>) -> Self {
        Self { analyzer, storage }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_review))
        .route("/api/analyze-batch", post(analyze_batch))
        .route("/api/reviews", get(list_reviews))
        .route("/api/reviews/{id}", delete(delete_review))
        .route("/api/reviews/bulk-delete", post(bulk_delete))
        .route("/api/statistics", get(statistics))
        .route("/api/clear", post(clear_reviews))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn run_backend(config: BackendConfig, state: AppState) -> Result<(), GenericError> {
    let prometheus = PrometheusBuilder::new().install_recorder()?;
    let app = router(state).route(
        "/metrics",
        get(move || {
            let handle = prometheus.clone();
            async move { handle.render() }
        }),
    );

    tracing::info!("Starting backend service at {}", config.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}

pub async fn analyze_review(
    State(state): State<AppState>,
    Json(submission): Json<ReviewSubmission>,
) -> Response {
    counter!("reviews_analyzed_total").increment(1);
    let analysis = state.analyzer.analyze(&submission.text, submission.rating);
    histogram!("review_suspicion_score").record(analysis.score as f64);

    match state.storage.save(&submission, &analysis).await {
        Ok(review) => {
            tracing::info!(
                id = review.id,
                prediction = %review.prediction,
                "Analyzed and stored review"
            );
            (
                StatusCode::OK,
                Json(json!({ "success": true, "review": review })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store analyzed review");
            internal_error(e)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub reviews: Vec<ReviewSubmission>,
}

pub async fn analyze_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Response {
    if request.reviews.is_empty() {
        return bad_request("Reviews must be a non-empty array");
    }

    counter!("reviews_analyzed_total").increment(request.reviews.len() as u64);
    let mut stored = Vec::with_capacity(request.reviews.len());
    for submission in &request.reviews {
        let analysis = state.analyzer.analyze(&submission.text, submission.rating);
        histogram!("review_suspicion_score").record(analysis.score as f64);

        match state.storage.save(submission, &analysis).await {
            Ok(review) => stored.push(review),
            Err(e) => {
                tracing::error!(error = %e, "Failed to store review from batch");
                return internal_error(e);
            }
        }
    }

    tracing::info!("Analyzed batch of {} reviews", stored.len());
    (
        StatusCode::OK,
        Json(json!({ "success": true, "count": stored.len(), "reviews": stored })),
    )
        .into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub product: Option<String>,
    pub prediction: Option<String>,
}

pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let filter = match build_filter(query) {
        Ok(filter) => filter,
        Err(message) => return bad_request(&message),
    };

    match state.storage.list(&filter).await {
        Ok(reviews) => (
            StatusCode::OK,
            Json(json!({ "success": true, "count": reviews.len(), "reviews": reviews })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list reviews");
            internal_error(e)
        }
    }
}

fn build_filter(query: ListQuery) -> Result<ReviewFilter, String> {
    let product = query.product.filter(|product| product != "all");
    let prediction = match query.prediction.filter(|prediction| prediction != "all") {
        Some(raw) => Some(
            Prediction::from_str(&raw)
                .map_err(|_| format!("Unknown prediction type: {raw}"))?,
        ),
        None => None,
    };

    Ok(ReviewFilter {
        product,
        prediction,
    })
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<ModelId>,
) -> Response {
    match state.storage.delete(id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({ "success": true, "message": "Review deleted successfully" })),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": format!("Review {id} not found") })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, id, "Failed to delete review");
            internal_error(e)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    #[serde(default = "default_bulk_prediction")]
    pub prediction: Prediction,
}

fn default_bulk_prediction() -> Prediction {
    Prediction::Fake
}

pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest>,
) -> Response {
    match state.storage.delete_by_prediction(request.prediction).await {
        Ok(deleted_count) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "deleted_count": deleted_count,
                "message": format!("Deleted {} {} reviews", deleted_count, request.prediction),
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to bulk-delete reviews");
            internal_error(e)
        }
    }
}

pub async fn statistics(State(state): State<AppState>) -> Response {
    let reviews = match state.storage.list(&ReviewFilter::default()).await {
        Ok(reviews) => reviews,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load reviews for statistics");
            return internal_error(e);
        }
    };

    match state.storage.products().await {
        Ok(products) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "statistics": compute_statistics(&reviews),
                "products": products,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list products for statistics");
            internal_error(e)
        }
    }
}

pub async fn clear_reviews(State(state): State<AppState>) -> Response {
    match state.storage.clear().await {
        Ok(count) => {
            tracing::info!(count, "Cleared review store");
            (
                StatusCode::OK,
                Json(json!({ "success": true, "message": format!("Cleared {count} reviews") })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to clear review store");
            internal_error(e)
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}

fn internal_error(e: GenericError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": e.to_string() })),
    )
        .into_response()
}
