//! Response bodies for the movie API.
//!
//! Movies serialize directly as their public view
//! (`{id, title, director, year, rating, image_url}`); these types cover
//! the bodies that wrap or summarize them.

use cinelog_core::listing::Pagination;
use cinelog_db::models::movie::Movie;
use serde::Serialize;

/// One page of a movie listing plus its pagination metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub page: i64,
    pub page_size: i64,
    pub total_filtered: i64,
    pub total_pages: i64,
}

impl MoviePage {
    pub fn new(movies: Vec<Movie>, pagination: Pagination) -> Self {
        Self {
            movies,
            page: pagination.page,
            page_size: pagination.page_size,
            total_filtered: pagination.total_filtered,
            total_pages: pagination.total_pages,
        }
    }
}

