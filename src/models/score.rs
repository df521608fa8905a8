use serde::{Deserialize, Serialize};

use super::Book;

/// The result of matching one candidate book against a profile.
///
/// Ephemeral: produced per scoring call, never persisted. A score of -1
/// is the "already seen" sentinel; consumers filter to non-negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookScore {
    pub book: Book,
    pub score: f64,
    /// Human-readable explanations, in the order they were triggered
    pub reasons: Vec<String>,
}
