use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Description length (in characters) below which a book is "short"
const SHORT_MAX: usize = 300;
/// Upper bound (exclusive) for the "medium" bucket
const MEDIUM_MAX: usize = 600;
/// Upper bound (exclusive) for the "long" bucket
const LONG_MAX: usize = 1000;

/// A candidate book as returned by the external metadata source.
///
/// The engine only requires this shape; where the record came from
/// (search API, persistent store) is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Stable, globally unique identifier
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    /// Genre labels, insertion-ordered, no duplicates expected
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub published_year: Option<i32>,
}

/// Coarse description-length bucket used as a taste dimension
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LengthBucket {
    Short,
    Medium,
    Long,
    VeryLong,
}

impl LengthBucket {
    /// Buckets a description by character count (300/600/1000 thresholds)
    pub fn from_description(description: &str) -> Self {
        let len = description.chars().count();
        if len < SHORT_MAX {
            LengthBucket::Short
        } else if len < MEDIUM_MAX {
            LengthBucket::Medium
        } else if len < LONG_MAX {
            LengthBucket::Long
        } else {
            LengthBucket::VeryLong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthBucket::Short => "short",
            LengthBucket::Medium => "medium",
            LengthBucket::Long => "long",
            LengthBucket::VeryLong => "very-long",
        }
    }
}

impl Display for LengthBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Book {
    /// Decade label for the publication year, e.g. 1994 -> "1990s".
    /// `None` when the book has no known year.
    pub fn decade_label(&self) -> Option<String> {
        self.published_year
            .map(|year| format!("{}s", year.div_euclid(10) * 10))
    }

    /// Length bucket for the description; `None` when there is no description
    pub fn length_bucket(&self) -> Option<LengthBucket> {
        if self.description.is_empty() {
            None
        } else {
            Some(LengthBucket::from_description(&self.description))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with_description(description: &str) -> Book {
        Book {
            id: "b1".to_string(),
            title: "Test".to_string(),
            author: String::new(),
            description: description.to_string(),
            genres: vec![],
            published_year: None,
        }
    }

    #[test]
    fn test_decade_label() {
        let mut book = book_with_description("");
        book.published_year = Some(1994);
        assert_eq!(book.decade_label(), Some("1990s".to_string()));

        book.published_year = Some(2000);
        assert_eq!(book.decade_label(), Some("2000s".to_string()));

        book.published_year = None;
        assert_eq!(book.decade_label(), None);
    }

    #[test]
    fn test_length_bucket_thresholds() {
        assert_eq!(
            LengthBucket::from_description(&"x".repeat(299)),
            LengthBucket::Short
        );
        assert_eq!(
            LengthBucket::from_description(&"x".repeat(300)),
            LengthBucket::Medium
        );
        assert_eq!(
            LengthBucket::from_description(&"x".repeat(600)),
            LengthBucket::Long
        );
        assert_eq!(
            LengthBucket::from_description(&"x".repeat(1000)),
            LengthBucket::VeryLong
        );
    }

    #[test]
    fn test_empty_description_has_no_bucket() {
        let book = book_with_description("");
        assert_eq!(book.length_bucket(), None);
    }

    #[test]
    fn test_length_bucket_serialization() {
        let json = serde_json::to_string(&LengthBucket::VeryLong).unwrap();
        assert_eq!(json, "\"very-long\"");
    }
}
