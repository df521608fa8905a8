pub mod book;
pub mod interaction;
pub mod profile;
pub mod score;

pub use book::{Book, LengthBucket};
pub use interaction::{Interaction, InteractionAction};
pub use profile::UserProfile;
pub use score::BookScore;
