//! Liveness check for process supervisors.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::schemas::HealthStatus;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(health), components(schemas(HealthStatus)))]
pub struct HealthApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

/// Report build version and the reply settings the assistant runs with.
#[utoipa::path(
    get,
    path = "/health",
    tag = "status",
    responses(
        (status = 200, description = "Server is healthy", body = HealthStatus)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    let config = &state.config;
    Json(HealthStatus {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        think_delay_ms: u64::try_from(config.think_delay.as_millis()).unwrap_or(u64::MAX),
        max_body_bytes: config.max_body_bytes,
    })
}
