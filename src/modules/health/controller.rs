use axum::Json;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");
const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize, ToSchema)]
pub struct RootStatusResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub service: String,
}

/// Service identity and liveness
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = RootStatusResponse)),
    tag = "Health"
)]
pub async fn root_status() -> Json<RootStatusResponse> {
    Json(RootStatusResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}

/// Liveness including a database reachability probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Health detail", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "unavailable",
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        database: database.to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
