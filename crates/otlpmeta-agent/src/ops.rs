//! Operational HTTP endpoints.
//!
//! - `/healthz`     : liveness
//! - `/metrics`     : Prometheus text format
//! - `/v1/exporter` : resolved exporter metadata (JSON, no header values)

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.registry().render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn exporter(State(state): State<AppState>) -> Response {
    match state.exporter_view() {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "exporter view failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.code()).into_response()
        }
    }
}
