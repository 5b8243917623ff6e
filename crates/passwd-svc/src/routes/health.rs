//! Liveness and monitoring endpoints.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;
use passwd_common::MetricsSnapshot;
use passwd_common::constants::messages;

#[derive(Serialize)]
pub struct PingResponse {
    message: &'static str,
}

/// Legacy liveness probe
pub async fn ping() -> Json<PingResponse> {
    tracing::info!("Received ping message");
    Json(PingResponse {
        message: messages::PONG,
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    bcrypt_cost: u32,
    max_length: usize,
}

/// Basic health check (is the server running, and with which limits?)
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        bcrypt_cost: state.config.hashing.cost,
        max_length: state.config.generator.max_length,
    })
}

/// Metrics endpoint (for monitoring)
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.stats.snapshot())
}
