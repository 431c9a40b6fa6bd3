//! Movie field rules: constants, coercion of untyped payload values, and
//! the write-time validator shared by create and update.
//!
//! This module lives in `core` (zero internal deps) so the repository layer
//! and the seeder apply exactly the same coercions as the HTTP handlers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CoreError, FieldErrors};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Image shown for movies saved without an image URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/120x180?text=No+Image";

/// Maximum length (in characters) of `title` and `director`.
pub const MAX_NAME_LEN: usize = 120;

/// Column width of `image_url`.
pub const MAX_IMAGE_URL_LEN: usize = 500;

/// Earliest accepted release year (the first motion picture).
pub const MIN_YEAR: i64 = 1888;

/// Latest accepted release year.
pub const MAX_YEAR: i64 = 2100;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

// ---------------------------------------------------------------------------
// Clean record
// ---------------------------------------------------------------------------

/// A fully normalized movie ready to be written to the store.
///
/// Produced by [`validate_movie`] for create/update and by the seeder for
/// bundled data. Updates always replace every field with a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
    pub image_url: String,
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Trimmed string value of `key`. Missing keys and non-string values are empty.
pub fn text_field(payload: &Map<String, Value>, key: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Substitute the placeholder for an empty (already trimmed) image URL.
pub fn image_url_or_placeholder(url: String) -> String {
    if url.is_empty() {
        PLACEHOLDER_IMAGE_URL.to_string()
    } else {
        url
    }
}

/// Interpret a JSON value as a whole number.
///
/// Accepts integers, floats without a fractional part, and strings holding
/// an integer (surrounding whitespace ignored).
pub fn whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Interpret a JSON value as a finite real number.
pub fn real_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|r| r.is_finite())
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Normalize and check an untyped movie payload.
///
/// Every field is checked independently and all violations are reported
/// together in [`CoreError::Validation`]. On success the rating is rounded
/// to one decimal and an empty image URL becomes [`PLACEHOLDER_IMAGE_URL`].
pub fn validate_movie(payload: &Map<String, Value>) -> Result<MovieDraft, CoreError> {
    let mut errors = FieldErrors::new();

    let title = text_field(payload, "title");
    check_name(&mut errors, "title", "Title", &title);

    let director = text_field(payload, "director");
    check_name(&mut errors, "director", "Director", &director);

    let image_url = image_url_or_placeholder(text_field(payload, "image_url"));

    let year = match payload.get("year").and_then(whole_number) {
        None => {
            errors.insert("year", "Year must be a whole number.");
            None
        }
        Some(y) if !(MIN_YEAR..=MAX_YEAR).contains(&y) => {
            errors.insert(
                "year",
                format!("Year must be between {MIN_YEAR} and {MAX_YEAR}."),
            );
            None
        }
        // In range, so the narrowing cannot truncate.
        Some(y) => Some(y as i32),
    };

    let rating = match payload.get("rating").and_then(real_number) {
        None => {
            errors.insert("rating", "Rating must be a number.");
            None
        }
        Some(r) if !(MIN_RATING..=MAX_RATING).contains(&r) => {
            errors.insert("rating", "Rating must be between 0 and 10.");
            None
        }
        Some(r) => Some(round_to(r, 1)),
    };

    match (year, rating) {
        (Some(year), Some(rating)) if errors.is_empty() => Ok(MovieDraft {
            title,
            director,
            year,
            rating,
            image_url,
        }),
        _ => Err(CoreError::Validation(errors)),
    }
}

fn check_name(errors: &mut FieldErrors, field: &'static str, label: &str, value: &str) {
    if value.is_empty() {
        errors.insert(field, format!("{label} is required."));
    } else if value.chars().count() > MAX_NAME_LEN {
        errors.insert(
            field,
            format!("{label} must be {MAX_NAME_LEN} characters or less."),
        );
    }
}
