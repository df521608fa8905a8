use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Candidate pool
        .route("/books", get(handlers::get_books))
        .route("/books", post(handlers::add_book))
        // Interaction log
        .route("/interactions", get(handlers::get_interactions))
        .route("/interactions", post(handlers::record_interaction))
        // Derived taste profile
        .route("/profile", get(handlers::get_profile))
        // Recommendations
        .route("/recommendations", get(handlers::get_recommendations))
        .route("/score", post(handlers::score_candidate))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        // Outermost so the span factory sees the extension
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
