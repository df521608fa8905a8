use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::engine;
use crate::error::{AppError, AppResult};
use crate::models::{Book, BookScore, Interaction, InteractionAction, UserProfile};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct RecordInteractionRequest {
    pub book_id: String,
    pub action: InteractionAction,
    /// Epoch milliseconds; stamped with the current time when absent
    pub timestamp: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub limit: Option<usize>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the current candidate pool
pub async fn get_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let inner = state.inner.read().await;
    Json(inner.books.clone())
}

/// Add a candidate book to the pool
pub async fn add_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> AppResult<(StatusCode, Json<Book>)> {
    if book.id.is_empty() {
        return Err(AppError::InvalidInput("book is missing an id".to_string()));
    }

    let mut inner = state.inner.write().await;
    if inner.find_book(&book.id).is_some() {
        return Err(AppError::InvalidInput(format!(
            "book \"{}\" is already in the pool",
            book.id
        )));
    }

    tracing::info!(book_id = %book.id, title = %book.title, "Added candidate book");
    inner.books.push(book.clone());

    Ok((StatusCode::CREATED, Json(book)))
}

/// Get the interaction log
pub async fn get_interactions(State(state): State<AppState>) -> Json<Vec<Interaction>> {
    let inner = state.inner.read().await;
    Json(inner.interactions.clone())
}

/// Record a user action against a book in the pool.
/// The book is snapshotted into the interaction at record time.
pub async fn record_interaction(
    State(state): State<AppState>,
    Json(request): Json<RecordInteractionRequest>,
) -> AppResult<(StatusCode, Json<Interaction>)> {
    let mut inner = state.inner.write().await;

    let book = inner
        .find_book(&request.book_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no book with id \"{}\"", request.book_id)))?;

    let interaction = match request.timestamp {
        Some(timestamp) => Interaction::new(book, request.action, timestamp),
        None => Interaction::now(book, request.action),
    };

    tracing::info!(
        book_id = %interaction.book_id,
        action = ?interaction.action,
        "Recorded interaction"
    );
    inner.interactions.push(interaction.clone());

    Ok((StatusCode::CREATED, Json(interaction)))
}

/// Build and return the taste profile from the current log
pub async fn get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    let inner = state.inner.read().await;
    Json(engine::build_user_profile(&inner.interactions))
}

/// Rank the candidate pool against the current profile
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<Vec<BookScore>>> {
    let inner = state.inner.read().await;

    let limit = params.limit.unwrap_or(state.max_recommendations);
    let profile = engine::build_user_profile(&inner.interactions);
    let picks = engine::personalized_recommendations(
        &inner.books,
        &profile,
        limit,
        &mut rand::thread_rng(),
    )?;

    Ok(Json(picks))
}

/// Ad-hoc scoring of a posted candidate against the current profile,
/// for "why was this recommended" lookups
pub async fn score_candidate(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> AppResult<Json<BookScore>> {
    let inner = state.inner.read().await;
    let profile = engine::build_user_profile(&inner.interactions);
    let scored = engine::score_book(&book, &profile)?;
    Ok(Json(scored))
}
