use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{health_check, root_status};

pub fn init_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root_status))
        .route("/health", get(health_check))
}
