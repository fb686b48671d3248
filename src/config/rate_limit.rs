use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::PeerIpKeyExtractor;

/// Rate limit thresholds for login attempts.
///
/// Loaded at startup and carried in [`crate::state::AppState`]; no route is
/// throttled yet. The governor builder below is how the limiter gets
/// constructed when the auth surface grows an endpoint worth protecting.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    /// Attempts allowed within one window
    pub login_attempts: u32,
    /// Window length in seconds
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            login_attempts: 5,
            window_seconds: 300,
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            login_attempts: std::env::var("RATE_LIMIT_LOGIN_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            window_seconds: std::env::var("RATE_LIMIT_WINDOW_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }

    /// Create a GovernorConfig keyed by peer IP for auth endpoints.
    pub fn auth_governor_config(
        &self,
    ) -> GovernorConfig<PeerIpKeyExtractor, ::governor::middleware::NoOpMiddleware> {
        let replenish_seconds = (self.window_seconds / u64::from(self.login_attempts.max(1))).max(1);
        GovernorConfigBuilder::default()
            .per_second(replenish_seconds)
            .burst_size(self.login_attempts)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .expect("Failed to build auth rate limiter config")
    }
}
