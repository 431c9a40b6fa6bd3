//! Handlers for the movie catalog.
//!
//! Provides endpoints for listing (search, sort, pagination), fetching,
//! creating, replacing and deleting movies.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::listing::Pagination;
use cinelog_core::movie::validate_movie;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::MovieFilter;
use cinelog_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{MovieId, MoviePayload};
use crate::query::ListMoviesParams;
use crate::response::MoviePage;
use crate::state::AppState;

fn movie_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// GET /api/movies
///
/// List one page of movies. Unusable query parameters fall back to their
/// defaults, and a page past the end is clamped to the last page.
pub async fn list_movies(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let pairs = pairs.map(|Query(p)| p).unwrap_or_default();
    let listing = ListMoviesParams::from_pairs(&pairs).to_listing();

    let filter = MovieFilter {
        search: listing.search,
        sort: listing.sort,
        direction: listing.direction,
    };

    let total_filtered = MovieRepo::count(&state.pool, &filter).await?;
    let pagination = Pagination::resolve(listing.page, listing.page_size, total_filtered);
    let movies =
        MovieRepo::list(&state.pool, &filter, pagination.limit(), pagination.offset()).await?;

    Ok(Json(MoviePage::new(movies, pagination)))
}

/// GET /api/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    MovieId(id): MovieId,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| movie_not_found(id))?;

    Ok(Json(movie))
}

/// POST /api/movies
///
/// Validate the payload and insert it. Returns 201 with the stored movie.
pub async fn create_movie(
    State(state): State<AppState>,
    MoviePayload(payload): MoviePayload,
) -> AppResult<impl IntoResponse> {
    let draft = validate_movie(&payload)?;
    let movie = MovieRepo::create(&state.pool, &draft).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/movies/{id}
///
/// Replace every field of a movie. The payload is validated before the id
/// is looked up, so an invalid payload for a missing movie is a 400.
pub async fn update_movie(
    State(state): State<AppState>,
    MovieId(id): MovieId,
    MoviePayload(payload): MoviePayload,
) -> AppResult<impl IntoResponse> {
    let draft = validate_movie(&payload)?;
    let movie = MovieRepo::replace(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| movie_not_found(id))?;

    tracing::info!(movie_id = id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    MovieId(id): MovieId,
) -> AppResult<impl IntoResponse> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(movie_not_found(id));
    }

    tracing::info!(movie_id = id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
