use crate::models::{Interaction, UserProfile};

/// Multiplicative decay applied per interaction of age rank.
/// The most recent interaction weighs 1.0, the next 0.95, and so on —
/// decay is by position in the recency-sorted log, not by wall clock.
pub const RECENCY_DECAY: f64 = 0.95;

/// Folds the interaction log into a weighted taste profile.
///
/// Each interaction contributes `action_weight * RECENCY_DECAY^rank` to
/// every taste dimension its book carries (genres, author, decade,
/// length bucket). Positive-weight interactions land the book in
/// `liked_books`, negative-weight ones in `disliked_books`.
///
/// An empty log yields an all-empty profile. Books missing an attribute
/// simply do not contribute to that dimension.
pub fn build_user_profile(interactions: &[Interaction]) -> UserProfile {
    let mut profile = UserProfile {
        interaction_history: interactions.to_vec(),
        ..UserProfile::default()
    };

    // Most recent first; rank drives the decay
    let mut sorted: Vec<&Interaction> = interactions.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    for (rank, interaction) in sorted.iter().enumerate() {
        let recency_weight = RECENCY_DECAY.powi(rank as i32);
        let action_weight = interaction.action.weight();
        let weight = recency_weight * action_weight;
        let book = &interaction.book;

        for genre in &book.genres {
            if !genre.is_empty() {
                *profile
                    .genre_preferences
                    .entry(genre.clone())
                    .or_insert(0.0) += weight;
            }
        }

        if !book.author.is_empty() {
            *profile
                .author_preferences
                .entry(book.author.clone())
                .or_insert(0.0) += weight;
        }

        if let Some(decade) = book.decade_label() {
            *profile.year_preferences.entry(decade).or_insert(0.0) += weight;
        }

        if let Some(bucket) = book.length_bucket() {
            *profile
                .length_preferences
                .entry(bucket.as_str().to_string())
                .or_insert(0.0) += weight;
        }

        if action_weight > 0.0 {
            profile.liked_books.push(book.clone());
        } else if action_weight < 0.0 {
            profile.disliked_books.push(book.clone());
        }
    }

    tracing::debug!(
        interactions = interactions.len(),
        genres = profile.genre_preferences.len(),
        liked = profile.liked_books.len(),
        disliked = profile.disliked_books.len(),
        "Built user profile"
    );

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, InteractionAction};

    fn book(id: &str, genres: &[&str]) -> Book {
        Book {
            id: id.to_string(),
            title: id.to_string(),
            author: String::new(),
            description: String::new(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            published_year: None,
        }
    }

    #[test]
    fn test_empty_log_yields_empty_profile() {
        let profile = build_user_profile(&[]);
        assert!(profile.genre_preferences.is_empty());
        assert!(profile.author_preferences.is_empty());
        assert!(profile.year_preferences.is_empty());
        assert!(profile.length_preferences.is_empty());
        assert!(profile.liked_books.is_empty());
        assert!(profile.disliked_books.is_empty());
        assert!(profile.interaction_history.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let interactions = vec![
            Interaction::new(book("b1", &["Fantasy"]), InteractionAction::Like, 100),
            Interaction::new(book("b2", &["Mystery"]), InteractionAction::Dislike, 50),
        ];
        let first = build_user_profile(&interactions);
        let second = build_user_profile(&interactions);
        assert_eq!(first, second);
    }

    #[test]
    fn test_recency_weight_decreases_with_rank() {
        // Two likes on the same genre: the more recent contributes 1.0,
        // the older 0.95
        let interactions = vec![
            Interaction::new(book("b1", &["Fantasy"]), InteractionAction::Like, 200),
            Interaction::new(book("b2", &["Fantasy"]), InteractionAction::Like, 100),
        ];
        let profile = build_user_profile(&interactions);
        let fantasy = profile.genre_preferences["Fantasy"];
        assert!((fantasy - (1.0 + RECENCY_DECAY)).abs() < 1e-9);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = Interaction::new(book("b1", &["Fantasy"]), InteractionAction::Like, 200);
        let b = Interaction::new(book("b2", &["Fantasy"]), InteractionAction::Read, 100);

        let forward = build_user_profile(&[a.clone(), b.clone()]);
        let reversed = build_user_profile(&[b, a]);
        assert_eq!(forward.genre_preferences, reversed.genre_preferences);
    }

    #[test]
    fn test_favorite_like_dislike_scenario() {
        let interactions = vec![
            Interaction::new(book("b1", &["Fantasy"]), InteractionAction::Favorite, 100),
            Interaction::new(book("b2", &["Fantasy"]), InteractionAction::Like, 50),
            Interaction::new(book("b3", &["Romance"]), InteractionAction::Dislike, 10),
        ];
        let profile = build_user_profile(&interactions);

        // favorite at rank 0 (2.0) + like at rank 1 (1.0 * 0.95)
        let fantasy = profile.genre_preferences["Fantasy"];
        assert!((fantasy - (2.0 + RECENCY_DECAY)).abs() < 1e-9);
        assert!(fantasy > 0.0);

        // dislike at rank 2: -1.0 * 0.95^2
        let romance = profile.genre_preferences["Romance"];
        assert!(romance < 0.0);

        assert_eq!(profile.liked_books.len(), 2);
        assert_eq!(profile.disliked_books.len(), 1);
        assert_eq!(profile.disliked_books[0].id, "b3");
    }

    #[test]
    fn test_skip_counts_as_disliked() {
        let interactions = vec![Interaction::new(
            book("b1", &["Horror"]),
            InteractionAction::Skip,
            10,
        )];
        let profile = build_user_profile(&interactions);
        assert_eq!(profile.disliked_books.len(), 1);
        assert!(profile.genre_preferences["Horror"] < 0.0);
    }

    #[test]
    fn test_accumulates_author_year_and_length() {
        let mut b = book("b1", &["Fantasy"]);
        b.author = "Ursula K. Le Guin".to_string();
        b.published_year = Some(1968);
        b.description = "x".repeat(450);

        let profile = build_user_profile(&[Interaction::new(b, InteractionAction::Like, 1)]);
        assert_eq!(profile.author_preferences["Ursula K. Le Guin"], 1.0);
        assert_eq!(profile.year_preferences["1960s"], 1.0);
        assert_eq!(profile.length_preferences["medium"], 1.0);
    }

    #[test]
    fn test_missing_attributes_contribute_nothing() {
        // No author, no year, no description, no genres
        let profile = build_user_profile(&[Interaction::new(
            book("b1", &[]),
            InteractionAction::Like,
            1,
        )]);
        assert!(profile.genre_preferences.is_empty());
        assert!(profile.author_preferences.is_empty());
        assert!(profile.year_preferences.is_empty());
        assert!(profile.length_preferences.is_empty());
        assert_eq!(profile.liked_books.len(), 1);
    }
}
