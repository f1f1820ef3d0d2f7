use axum::{routing::get, Json, Router};
use factory_health_core::MachineType;
use serde::Serialize;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of machine types the scoring table covers.
    pub machine_types: usize,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        machine_types: MachineType::ALL.len(),
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
