//! Operational HTTP endpoints.
//!
//! - `/healthz`       : liveness
//! - `<metrics_path>` : Prometheus text format

use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}};

use sipstat_core::exposition::CONTENT_TYPE;

use crate::app_state::AppState;
use crate::scrape;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = scrape::scrape(&state).await;

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, CONTENT_TYPE)],
        body,
    )
        .into_response()
}
