//! The embedded single-page UI.

use axum::response::Html;

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
