use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::Book;

/// A user action recorded against a book
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InteractionAction {
    Like,
    Dislike,
    Favorite,
    Read,
    Skip,
}

impl InteractionAction {
    /// Base weight an action contributes to the taste profile.
    /// Positive actions count toward liked books, negative toward disliked.
    pub fn weight(&self) -> f64 {
        match self {
            InteractionAction::Favorite => 2.0,
            InteractionAction::Read => 1.5,
            InteractionAction::Like => 1.0,
            InteractionAction::Skip => -0.3,
            InteractionAction::Dislike => -1.0,
        }
    }
}

/// One entry in the append-only interaction log.
///
/// Carries a snapshot of the book as it looked at interaction time so
/// the profile stays reproducible even if the candidate pool changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    pub book_id: String,
    pub action: InteractionAction,
    /// Epoch milliseconds
    pub timestamp: i64,
    pub book: Book,
}

impl Interaction {
    /// Creates an interaction with an explicit timestamp
    pub fn new(book: Book, action: InteractionAction, timestamp: i64) -> Self {
        Self {
            book_id: book.id.clone(),
            action,
            timestamp,
            book,
        }
    }

    /// Creates an interaction stamped with the current time
    pub fn now(book: Book, action: InteractionAction) -> Self {
        Self::new(book, action, Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: "b1".to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: String::new(),
            genres: vec!["Science Fiction".to_string()],
            published_year: Some(1965),
        }
    }

    #[test]
    fn test_action_weights() {
        assert_eq!(InteractionAction::Favorite.weight(), 2.0);
        assert_eq!(InteractionAction::Read.weight(), 1.5);
        assert_eq!(InteractionAction::Like.weight(), 1.0);
        assert_eq!(InteractionAction::Skip.weight(), -0.3);
        assert_eq!(InteractionAction::Dislike.weight(), -1.0);
    }

    #[test]
    fn test_action_serialization() {
        let like = serde_json::to_string(&InteractionAction::Like).unwrap();
        let favorite = serde_json::to_string(&InteractionAction::Favorite).unwrap();
        assert_eq!(like, "\"like\"");
        assert_eq!(favorite, "\"favorite\"");
    }

    #[test]
    fn test_new_interaction_copies_book_id() {
        let interaction = Interaction::new(sample_book(), InteractionAction::Like, 1000);
        assert_eq!(interaction.book_id, "b1");
        assert_eq!(interaction.timestamp, 1000);
    }
}
