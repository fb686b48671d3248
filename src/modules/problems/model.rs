use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemType {
    Math,
    Code,
}

impl ProblemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::Math => "MATH",
            ProblemType::Code => "CODE",
        }
    }
}

/// Programming language of a code problem's template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    Python,
    Cpp,
    Java,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "PYTHON",
            Language::Cpp => "CPP",
            Language::Java => "JAVA",
        }
    }
}

/// A problem authored by exactly one teacher. Owns its content body, test
/// cases, and sessions; all of them go with it.
///
/// `skill_id` is a plain skill slug, not a foreign key: deleting a skill
/// leaves the problems filed under it in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Problem {
    pub id: Uuid,
    pub skill_id: String,
    /// Stored as one of the [`ProblemType`] tags.
    pub r#type: String,
    /// 1 (easiest) to 5 (hardest).
    pub difficulty: i32,
    pub solution_steps: Value,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// The at-most-one content body of a problem.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProblemContent {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub text: Option<String>,
    pub latex: Option<String>,
    pub image_url: Option<String>,
    pub code_template: Option<String>,
    /// Stored as one of the [`Language`] tags; null for math problems.
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TestCase {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub input: String,
    pub expected_output: String,
    pub description: String,
    /// Hidden cases are evaluated but never shown to the student.
    pub is_hidden: bool,
}
