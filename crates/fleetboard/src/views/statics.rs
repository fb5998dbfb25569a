// ── Embedded static assets ──
//
// The stylesheet and script ship inside the binary so offline mode works
// with no filesystem or network dependencies at runtime.

use axum::http::header;
use axum::response::IntoResponse;

pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/fleetboard.css"),
    )
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        include_str!("../../static/fleetboard.js"),
    )
}
