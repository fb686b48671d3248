use std::env;

/// Default Bayesian Knowledge Tracing parameters.
///
/// Loaded at startup and carried in [`crate::state::AppState`]. The mastery
/// model itself is unimplemented: no inference or update rule consumes these
/// values yet, and the per-skill `bkt_params` columns stay at their schema
/// defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct MasteryConfig {
    /// P(L0): probability the skill is known before any practice
    pub initial_knowledge: f64,
    /// P(T): probability of learning the skill on one opportunity
    pub learn_rate: f64,
    /// P(S): probability of slipping on a known skill
    pub slip: f64,
    /// P(G): probability of guessing right on an unknown skill
    pub guess: f64,
    /// Domain probability above which a skill counts as mastered
    pub mastery_threshold: f64,
}

impl Default for MasteryConfig {
    fn default() -> Self {
        Self {
            initial_knowledge: 0.1,
            learn_rate: 0.3,
            slip: 0.1,
            guess: 0.2,
            mastery_threshold: 0.7,
        }
    }
}

impl MasteryConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            initial_knowledge: env_f64("BKT_P_L0", defaults.initial_knowledge),
            learn_rate: env_f64("BKT_P_T", defaults.learn_rate),
            slip: env_f64("BKT_P_S", defaults.slip),
            guess: env_f64("BKT_P_G", defaults.guess),
            mastery_threshold: env_f64("BKT_MASTERY_THRESHOLD", defaults.mastery_threshold),
        }
    }
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
