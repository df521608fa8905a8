use crate::error::{AppError, AppResult};
use crate::models::{Book, BookScore, UserProfile};

use super::similarity::similarity;

const GENRE_WEIGHT: f64 = 0.30;
const AUTHOR_WEIGHT: f64 = 0.20;
const YEAR_WEIGHT: f64 = 0.15;
const LENGTH_WEIGHT: f64 = 0.10;
const SIMILARITY_WEIGHT: f64 = 0.25;

/// Penalty multiplier applied when a candidate resembles disliked books
const DISLIKE_PENALTY: f64 = 0.5;
/// Max similarity to a liked book above which a reason is emitted
const LIKED_REASON_THRESHOLD: f64 = 0.3;
/// Max similarity to a disliked book above which the penalty kicks in
const DISLIKED_PENALTY_THRESHOLD: f64 = 0.4;
/// Individual preference value above which per-dimension reasons fire
const REASON_THRESHOLD: f64 = 0.5;

/// Scores a candidate book against a user profile.
///
/// Books already present in the interaction history come back with the
/// score -1 sentinel and the single reason "Already seen" so the
/// selector can drop them. Otherwise the score is a weighted sum of
/// genre, author, decade and length preference lookups plus the max
/// similarity to liked books, minus a penalty when the candidate is too
/// close to disliked books. The reported score is clamped at zero;
/// reasons reflect whatever fired before the clamp.
pub fn score_book(book: &Book, profile: &UserProfile) -> AppResult<BookScore> {
    if book.id.is_empty() {
        return Err(AppError::InvalidInput(
            "candidate book is missing an id".to_string(),
        ));
    }

    if profile.has_seen(&book.id) {
        return Ok(BookScore {
            book: book.clone(),
            score: -1.0,
            reasons: vec!["Already seen".to_string()],
        });
    }

    let mut total = 0.0;
    let mut reasons = Vec::new();

    // Genre preferences
    let mut genre_score = 0.0;
    for genre in &book.genres {
        if let Some(&weight) = profile.genre_preferences.get(genre) {
            genre_score += weight;
            if weight > REASON_THRESHOLD {
                reasons.push(format!("You like {} books", genre));
            }
        }
    }
    total += genre_score * GENRE_WEIGHT;

    // Author preference
    if !book.author.is_empty() {
        if let Some(&weight) = profile.author_preferences.get(&book.author) {
            total += weight * AUTHOR_WEIGHT;
            if weight != 0.0 {
                reasons.push(format!("You've liked books by {}", book.author));
            }
        }
    }

    // Decade preference
    if let Some(decade) = book.decade_label() {
        if let Some(&weight) = profile.year_preferences.get(&decade) {
            total += weight * YEAR_WEIGHT;
            if weight > REASON_THRESHOLD {
                reasons.push(format!("You enjoy books from the {}", decade));
            }
        }
    }

    // Length preference
    if let Some(bucket) = book.length_bucket() {
        if let Some(&weight) = profile.length_preferences.get(bucket.as_str()) {
            total += weight * LENGTH_WEIGHT;
            if weight > REASON_THRESHOLD {
                reasons.push(format!("You prefer {} books", bucket.as_str()));
            }
        }
    }

    // Similarity to liked books
    let max_liked_similarity = max_similarity(book, &profile.liked_books);
    total += max_liked_similarity * SIMILARITY_WEIGHT;
    if max_liked_similarity > LIKED_REASON_THRESHOLD {
        reasons.push("Similar to books you've liked".to_string());
    }

    // Penalty for resembling disliked books. The reason text is kept as
    // shipped even though it accompanies a penalty; product has been
    // asked to clarify the wording.
    let max_disliked_similarity = max_similarity(book, &profile.disliked_books);
    if max_disliked_similarity > DISLIKED_PENALTY_THRESHOLD {
        total -= max_disliked_similarity * DISLIKE_PENALTY;
        reasons.push("Different from books you disliked".to_string());
    }

    tracing::trace!(
        book_id = %book.id,
        score = total,
        reason_count = reasons.len(),
        "Scored candidate"
    );

    Ok(BookScore {
        book: book.clone(),
        score: total.max(0.0),
        reasons,
    })
}

fn max_similarity(book: &Book, others: &[Book]) -> f64 {
    others
        .iter()
        .map(|other| similarity(book, other))
        .fold(0.0, f64::max)
}
