//! Health Check

use axum::{Json, Router, routing::get};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /healthcheck
pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}

pub fn health_router() -> Router {
    Router::new().route("/healthcheck", get(healthcheck))
}
