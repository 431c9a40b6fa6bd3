//! Handler for catalog-wide statistics.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use cinelog_core::stats::CatalogStats;
use cinelog_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::query::StatsParams;
use crate::state::AppState;

/// GET /api/stats
///
/// Total count, average rating and most prolific director over the whole
/// catalog. `pageSize` is only sanitized and echoed back.
pub async fn get_stats(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let pairs = pairs.map(|Query(p)| p).unwrap_or_default();
    let page_size = StatsParams::from_pairs(&pairs).page_size();

    let total_records = MovieRepo::count_all(&state.pool).await?;
    let average_rating = MovieRepo::average_rating(&state.pool).await?;
    let top_director = MovieRepo::top_director(&state.pool)
        .await?
        .map(|top| (top.director, top.movie_count));

    Ok(Json(CatalogStats::from_aggregates(
        total_records,
        page_size,
        average_rating,
        top_director,
    )))
}
