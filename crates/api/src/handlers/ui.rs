use axum::response::Html;

/// GET / -- static catalog page; all data is fetched from `/api`.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
