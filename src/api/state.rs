use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Book, Interaction};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
    /// Default recommendation count when a request names no limit
    pub max_recommendations: usize,
}

/// Inner state that can be modified.
///
/// The candidate pool and interaction log are both kept in insertion
/// order: pool order breaks score ties and drives cold-start picks, and
/// the log is append-only by contract.
pub struct AppStateInner {
    pub books: Vec<Book>,
    pub interactions: Vec<Interaction>,
}

impl AppStateInner {
    pub fn find_book(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == book_id)
    }
}

impl AppState {
    /// Creates a new empty application state
    pub fn new(max_recommendations: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                books: Vec::new(),
                interactions: Vec::new(),
            })),
            max_recommendations,
        }
    }
}
