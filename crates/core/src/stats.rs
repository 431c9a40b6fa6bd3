//! Catalog-wide statistics.

use serde::Serialize;

use crate::movie::round_to;

/// Aggregate figures over the whole catalog, ignoring any filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_records: i64,
    /// The sanitized page size the client asked for, echoed back.
    pub current_page_size: i64,
    pub average_rating: f64,
    pub top_director: Option<String>,
    pub top_director_count: i64,
}

impl CatalogStats {
    /// Assemble stats from raw store aggregates.
    ///
    /// `average_rating` is `None` for an empty catalog and is reported as
    /// `0.0`; otherwise it is rounded to two decimals.
    pub fn from_aggregates(
        total_records: i64,
        current_page_size: i64,
        average_rating: Option<f64>,
        top_director: Option<(String, i64)>,
    ) -> Self {
        let (top_director, top_director_count) = match top_director {
            Some((name, count)) => (Some(name), count),
            None => (None, 0),
        };
        Self {
            total_records,
            current_page_size,
            average_rating: average_rating.map_or(0.0, |avg| round_to(avg, 2)),
            top_director,
            top_director_count,
        }
    }
}
