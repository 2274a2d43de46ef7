use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// The single-screen upload page; it talks to the JSON API only.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
