//! Configuration modules.
//!
//! Each submodule owns one concern and loads it from environment variables
//! with `from_env()`. Everything is read once at startup and handed to the
//! application as part of the immutable [`crate::state::AppState`]; there is
//! no ambient settings global.
//!
//! # Modules
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: secret key and algorithm reserved for token issuance
//! - [`mastery`]: Bayesian Knowledge Tracing default parameters
//! - [`rate_limit`]: login-attempt rate limit thresholds

pub mod cors;
pub mod database;
pub mod jwt;
pub mod mastery;
pub mod rate_limit;
