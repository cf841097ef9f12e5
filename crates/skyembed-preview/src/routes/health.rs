//! Liveness endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// XRPC root this instance resolves handles and records against.
    xrpc_root: String,
}

/// Report that the process is accepting requests.
///
/// Answers `ok` without calling the lookup service, so an XRPC outage shows
/// up as preview 400s rather than as this instance being pulled from
/// rotation. The configured XRPC root is echoed for deploy checks.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        xrpc_root: state.config.xrpc_root.clone(),
    })
}
