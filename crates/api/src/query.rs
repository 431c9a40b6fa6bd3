//! Query parameter types for the movie API.
//!
//! Query strings are extracted as raw key/value pairs and each parameter is
//! read on its own, so one malformed or repeated key never discards the
//! others. Values stay raw strings; `cinelog_core::listing` applies the
//! fallbacks.

use cinelog_core::listing::{parse_page_size, ListingQuery};

/// First value of `key`, if present. Later repeats are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// `GET /api/movies?page=&pageSize=&q=&sort=&dir=`
#[derive(Debug, Default)]
pub struct ListMoviesParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl ListMoviesParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_value(pairs, "page"),
            page_size: first_value(pairs, "pageSize"),
            q: first_value(pairs, "q"),
            sort: first_value(pairs, "sort"),
            dir: first_value(pairs, "dir"),
        }
    }

    pub fn to_listing(&self) -> ListingQuery {
        ListingQuery::from_raw(
            self.page.as_deref(),
            self.page_size.as_deref(),
            self.q.as_deref(),
            self.sort.as_deref(),
            self.dir.as_deref(),
        )
    }
}

/// `GET /api/stats?pageSize=`
#[derive(Debug, Default)]
pub struct StatsParams {
    pub page_size: Option<String>,
}

impl StatsParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page_size: first_value(pairs, "pageSize"),
        }
    }

    /// The sanitized page size, echoed back in the stats body.
    pub fn page_size(&self) -> i64 {
        parse_page_size(self.page_size.as_deref())
    }
}
