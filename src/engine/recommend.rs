use rand::Rng;

use crate::error::{AppError, AppResult};
use crate::models::{Book, BookScore, UserProfile};

use super::scorer::score_book;

/// Interactions required before recommendations are personalized
pub const MIN_INTERACTIONS: usize = 3;

/// Ranks a candidate pool against a user profile and returns the top `limit`.
///
/// Below `MIN_INTERACTIONS` the profile carries too little signal to
/// personalize, so the selector falls back to exploration: the first
/// `limit` candidates are returned in input order, each tagged with a
/// random score in [0, 1) and the reason "Exploring new content".
///
/// Otherwise every candidate is scored, entries with a negative score
/// are dropped (this removes the "already seen" sentinel; ordinary
/// negatives were already clamped to zero by the scorer), and the rest
/// are stably sorted by score descending so ties keep input order.
///
/// The random source is a caller-supplied `Rng` so tests can seed it.
pub fn personalized_recommendations<R: Rng>(
    candidates: &[Book],
    profile: &UserProfile,
    limit: usize,
    rng: &mut R,
) -> AppResult<Vec<BookScore>> {
    if let Some(invalid) = candidates.iter().find(|book| book.id.is_empty()) {
        return Err(AppError::InvalidInput(format!(
            "candidate book \"{}\" is missing an id",
            invalid.title
        )));
    }

    if profile.interaction_count() < MIN_INTERACTIONS {
        tracing::debug!(
            interactions = profile.interaction_count(),
            candidates = candidates.len(),
            "Cold start, returning exploration picks"
        );
        return Ok(candidates
            .iter()
            .take(limit)
            .map(|book| BookScore {
                book: book.clone(),
                score: rng.gen::<f64>(),
                reasons: vec!["Exploring new content".to_string()],
            })
            .collect());
    }

    let mut scored = Vec::with_capacity(candidates.len());
    for book in candidates {
        let book_score = score_book(book, profile)?;
        if book_score.score >= 0.0 {
            scored.push(book_score);
        }
    }

    // Stable sort: equal scores keep candidate input order
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit);

    tracing::debug!(
        candidates = candidates.len(),
        returned = scored.len(),
        "Ranked recommendations"
    );

    Ok(scored)
}
