pub mod health;
pub mod movies;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /movies          list, create
/// /movies/{id}     get, replace, delete
/// /stats           catalog statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .route("/stats", get(handlers::stats::get_stats))
}

/// Root-level page serving the catalog UI.
pub fn ui_router() -> Router<AppState> {
    Router::new().route("/", get(handlers::ui::index))
}
