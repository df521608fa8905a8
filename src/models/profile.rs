use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Book, Interaction};

/// A user's aggregated taste model, derived from the interaction log.
///
/// Always recomputed from the full log (see `engine::build_user_profile`),
/// never mutated incrementally, so it is a pure function of the log.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Genre -> accumulated preference weight
    pub genre_preferences: HashMap<String, f64>,
    /// Author -> accumulated preference weight
    pub author_preferences: HashMap<String, f64>,
    /// Decade label (e.g. "1990s") -> accumulated preference weight
    pub year_preferences: HashMap<String, f64>,
    /// Length bucket label -> accumulated preference weight
    pub length_preferences: HashMap<String, f64>,
    /// Books from positive-weight interactions
    pub liked_books: Vec<Book>,
    /// Books from negative-weight interactions (skips included)
    pub disliked_books: Vec<Book>,
    /// The full log this profile was built from, kept for seen-exclusion
    pub interaction_history: Vec<Interaction>,
}

impl UserProfile {
    /// Creates an empty profile
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of interactions backing this profile
    pub fn interaction_count(&self) -> usize {
        self.interaction_history.len()
    }

    /// Whether the user has already interacted with this book
    pub fn has_seen(&self, book_id: &str) -> bool {
        self.interaction_history
            .iter()
            .any(|interaction| interaction.book_id == book_id)
    }
}
