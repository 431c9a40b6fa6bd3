//! Derivation of movie drafts from the bundled seed dataset.
//!
//! Seed entries are trusted far less than API payloads: anything malformed
//! is skipped silently rather than reported.

use serde_json::{Map, Value};

use crate::movie::{
    image_url_or_placeholder, real_number, text_field, whole_number, MovieDraft,
    MAX_IMAGE_URL_LEN, MAX_NAME_LEN,
};

/// Year used for seed entries without a `year` key.
pub const DEFAULT_SEED_YEAR: i32 = 2000;

/// Rating used for seed entries without a `rating` key.
pub const DEFAULT_SEED_RATING: f64 = 0.0;

/// Parse the contents of a seed file into drafts.
///
/// Returns `None` when the text is not a JSON array. Entries that cannot be
/// derived are dropped.
pub fn parse_seed_file(contents: &str) -> Option<Vec<MovieDraft>> {
    let entries = match serde_json::from_str::<Value>(contents).ok()? {
        Value::Array(entries) => entries,
        _ => return None,
    };
    Some(
        entries
            .iter()
            .filter_map(|entry| entry.as_object().and_then(derive_seed_movie))
            .collect(),
    )
}

/// Derive a draft from one seed entry, or `None` to skip it.
///
/// A missing `year` or `rating` falls back to its default, but a present
/// value that cannot be coerced skips the entry. Image URLs may come from
/// `image_url` or the legacy `image` key.
pub fn derive_seed_movie(raw: &Map<String, Value>) -> Option<MovieDraft> {
    let title = text_field(raw, "title");
    let director = text_field(raw, "director");
    if title.is_empty() || director.is_empty() {
        return None;
    }

    let year = match raw.get("year") {
        None => DEFAULT_SEED_YEAR,
        Some(value) => i32::try_from(whole_number(value)?).ok()?,
    };
    let rating = match raw.get("rating") {
        None => DEFAULT_SEED_RATING,
        Some(value) => real_number(value)?,
    };

    let mut image_url = text_field(raw, "image_url");
    if image_url.is_empty() {
        image_url = text_field(raw, "image");
    }
    let image_url = image_url_or_placeholder(image_url);

    let fits = title.chars().count() <= MAX_NAME_LEN
        && director.chars().count() <= MAX_NAME_LEN
        && image_url.chars().count() <= MAX_IMAGE_URL_LEN;
    if !fits {
        return None;
    }

    Some(MovieDraft {
        title,
        director,
        year,
        rating,
        image_url,
    })
}
