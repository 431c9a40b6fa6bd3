//! Listing parameters for the movie catalog (search, sort, pagination).
//!
//! Every raw query-string value is sanitized here; invalid input never
//! produces an error, it falls back to the documented default instead.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Page sizes a client may request.
pub const ALLOWED_PAGE_SIZES: [i64; 4] = [5, 10, 20, 50];

/// Page size used when the requested one is missing or not allowed.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

pub const DEFAULT_PAGE: i64 = 1;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Column a listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Title,
    Director,
    Year,
    Rating,
}

impl SortColumn {
    /// Parse a `sort` parameter; unknown or missing values select `Title`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("director") => Self::Director,
            Some("year") => Self::Year,
            Some("rating") => Self::Rating,
            _ => Self::Title,
        }
    }

    /// Column name in the `movies` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Director => "director",
            Self::Year => "year",
            Self::Rating => "rating",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a `dir` parameter case-insensitively; anything but `desc` is `Asc`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(dir) if dir.trim().eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Parameter parsing
// ---------------------------------------------------------------------------

/// Parse a `page` parameter: values below 1 clamp to 1, garbage is 1.
///
/// An all-digit value too large for `i64` saturates; it is clamped to the
/// last page later anyway.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim) else {
        return DEFAULT_PAGE;
    };
    let page = raw.parse::<i64>().ok().or_else(|| {
        let digits = raw.strip_prefix('+').unwrap_or(raw);
        (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(i64::MAX)
    });
    page.map_or(DEFAULT_PAGE, |p| p.max(1))
}

/// Parse a `pageSize` parameter against [`ALLOWED_PAGE_SIZES`].
pub fn parse_page_size(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|size| ALLOWED_PAGE_SIZES.contains(size))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

/// Parse a `q` parameter; blank input means no filter.
pub fn parse_search(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
}

/// Sanitized listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Requested page, not yet clamped to the result size.
    pub page: i64,
    pub page_size: i64,
    pub search: Option<String>,
    pub sort: SortColumn,
    pub direction: SortDirection,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            sort: SortColumn::default(),
            direction: SortDirection::default(),
        }
    }
}

impl ListingQuery {
    pub fn from_raw(
        page: Option<&str>,
        page_size: Option<&str>,
        q: Option<&str>,
        sort: Option<&str>,
        dir: Option<&str>,
    ) -> Self {
        Self {
            page: parse_page(page),
            page_size: parse_page_size(page_size),
            search: parse_search(q),
            sort: SortColumn::parse(sort),
            direction: SortDirection::parse(dir),
        }
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Resolved page window over a filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
    pub total_filtered: i64,
    pub total_pages: i64,
}

impl Pagination {
    /// Clamp `requested_page` into `1..=total_pages`, where an empty result
    /// still has one (empty) page.
    pub fn resolve(requested_page: i64, page_size: i64, total_filtered: i64) -> Self {
        let page_size = page_size.max(1);
        let total_filtered = total_filtered.max(0);
        let total_pages = ((total_filtered + page_size - 1) / page_size).max(1);
        Self {
            page: requested_page.clamp(1, total_pages),
            page_size,
            total_filtered,
            total_pages,
        }
    }

    /// Row offset of the first record on the page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

// ---------------------------------------------------------------------------
// Search pattern
// ---------------------------------------------------------------------------

/// Build an `ILIKE` pattern matching `term` as a literal substring.
///
/// `\`, `%` and `_` are escaped with a backslash (the PostgreSQL default
/// `ESCAPE` character).
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
