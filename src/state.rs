use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::config::mastery::MasteryConfig;
use crate::config::rate_limit::RateLimitConfig;

/// Shared application state: the connection pool plus every configuration
/// value, loaded once at startup. Handlers receive it by clone; nothing
/// reads the environment after this point.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub mastery_config: MasteryConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
        mastery_config: MasteryConfig::from_env(),
    }
}
