use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Hint-intensity tier recorded on a session. No algorithm computes these
/// yet; the column is written by nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaffoldLevel {
    /// Reflection prompt
    Level1,
    /// Guided hint
    Level2,
    /// Simplified analogy
    Level3,
}

impl ScaffoldLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaffoldLevel::Level1 => "LEVEL_1",
            ScaffoldLevel::Level2 => "LEVEL_2",
            ScaffoldLevel::Level3 => "LEVEL_3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    Syntax,
    Procedure,
    Concept,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Syntax => "SYNTAX",
            ErrorType::Procedure => "PROCEDURE",
            ErrorType::Concept => "CONCEPT",
        }
    }
}

/// One student working one problem. Owns its step attempts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Session {
    pub id: Uuid,
    pub student_id: Uuid,
    pub problem_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub current_step: i32,
    /// Stored as one of the [`ScaffoldLevel`] tags, when set.
    pub scaffold_level: Option<String>,
    pub is_completed: bool,
    pub sentiment_scores: Value,
}

/// One answer to one solution step. Owns at most one error diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StepAttempt {
    pub id: Uuid,
    pub session_id: Uuid,
    pub step_number: i32,
    pub student_answer: String,
    pub is_correct: bool,
    pub attempted_at: DateTime<Utc>,
    pub latency_seconds: f64,
    pub scaffold_provided: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ErrorDiagnosis {
    pub id: Uuid,
    pub step_attempt_id: Uuid,
    /// Stored as one of the [`ErrorType`] tags.
    pub error_type: String,
    pub error_details: String,
    pub affected_concept: String,
    /// 1 (cosmetic) to 5 (fundamental misconception).
    pub severity: i32,
}
