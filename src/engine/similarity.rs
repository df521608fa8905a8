use std::collections::HashSet;

use crate::models::Book;

/// Year gap at which the proximity factor bottoms out
const YEAR_PROXIMITY_RANGE: f64 = 20.0;
/// Description-length gap (characters) at which the proximity factor bottoms out
const LENGTH_PROXIMITY_RANGE: f64 = 1000.0;

/// Computes a [0,1] similarity between two books.
///
/// Four factors, each counted only when both books carry the attribute:
/// genre Jaccard overlap, exact author match (skipped entirely on
/// mismatch, not counted as zero), publication-year proximity, and
/// description-length proximity. The result is the mean of the factors
/// that applied, or 0.0 when none did.
pub fn similarity(a: &Book, b: &Book) -> f64 {
    let mut total = 0.0;
    let mut factors = 0u32;

    if !a.genres.is_empty() && !b.genres.is_empty() {
        let genres_a: HashSet<&str> = a.genres.iter().map(String::as_str).collect();
        let genres_b: HashSet<&str> = b.genres.iter().map(String::as_str).collect();
        let intersection = genres_a.intersection(&genres_b).count();
        let union = genres_a.union(&genres_b).count();
        total += clamp_unit(intersection as f64 / union as f64);
        factors += 1;
    }

    if !a.author.is_empty() && a.author == b.author {
        total += 1.0;
        factors += 1;
    }

    if let (Some(year_a), Some(year_b)) = (a.published_year, b.published_year) {
        let gap = (year_a - year_b).abs() as f64;
        total += clamp_unit(1.0 - gap / YEAR_PROXIMITY_RANGE);
        factors += 1;
    }

    if !a.description.is_empty() && !b.description.is_empty() {
        let len_a = a.description.chars().count() as f64;
        let len_b = b.description.chars().count() as f64;
        total += clamp_unit(1.0 - (len_a - len_b).abs() / LENGTH_PROXIMITY_RANGE);
        factors += 1;
    }

    if factors == 0 {
        0.0
    } else {
        total / factors as f64
    }
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
