use crate::routes::AppState;
use axum::{extract::State, http::HeaderMap, response::{Html, IntoResponse}};

pub async fn health(State(state): State<AppState>, headers: HeaderMap) -> axum::response::Response {
    if wants_html(&headers) {
        Html(crate::views::health::health_html(state.client.base_url())).into_response()
    } else {
        "ok".into_response()
    }
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(axum::http::header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("text/html"))
        .unwrap_or(false)
}
