pub mod profile;
pub mod recommend;
pub mod scorer;
pub mod similarity;

pub use profile::{build_user_profile, RECENCY_DECAY};
pub use recommend::{personalized_recommendations, MIN_INTERACTIONS};
pub use scorer::score_book;
pub use similarity::similarity;
