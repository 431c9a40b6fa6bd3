//! Movie row and listing filter.

use cinelog_core::listing::{SortColumn, SortDirection};
use cinelog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movies` table.
///
/// Serializes to the public movie view; timestamps are kept out of it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
    pub image_url: String,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

/// Filter and ordering for a movie listing.
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Case-insensitive substring matched against title or director.
    pub search: Option<String>,
    pub sort: SortColumn,
    pub direction: SortDirection,
}

/// A director and the number of movies credited to them.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct DirectorCount {
    pub director: String,
    pub movie_count: i64,
}
