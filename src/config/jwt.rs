use std::env;

/// Token-signing configuration.
///
/// Reserved for token issuance once a login endpoint ships; today nothing
/// signs or verifies tokens, the values are only loaded and carried in
/// [`crate::state::AppState`].
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret_key: String,
    pub algorithm: String,
    /// Access token lifetime in minutes.
    pub access_token_expire_minutes: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("SECRET_KEY")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            algorithm: env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string()),
            access_token_expire_minutes: env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60 * 24 * 7), // 7 days
        }
    }
}
