//! Service banner and health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

const ENDPOINTS: &[&str] = &[
    "/health - Health check endpoint",
    "/api/auth/register - Register a new user",
    "/api/auth/login - Login",
    "/api/configuration/{key} - Configuration lookup (auth required)",
    "/api/openai/summarize - Health analysis of text (auth required)",
];

/// Service banner
#[derive(Debug, Serialize, ToSchema)]
pub struct BannerResponse {
    pub message: String,
    pub status: String,
    pub endpoints: Vec<String>,
    pub version: String,
}

/// Health check response. Always 200; the database field reports the pool.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "UP")]
    pub status: String,
    #[schema(example = "connected")]
    pub database: String,
    pub timestamp: DateTime<Utc>,
}

/// Create banner and health routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Service banner", body = BannerResponse))
)]
pub async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Health Card Backend API".to_string(),
        status: "running".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint with database connectivity check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.database.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            "disconnected"
        }
    };

    Json(HealthResponse {
        status: "UP".to_string(),
        database: database.to_string(),
        timestamp: Utc::now(),
    })
}
