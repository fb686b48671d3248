//! Skill graph models.
//!
//! Skills form a dependency graph whose edges live in `skill_dependencies`.
//! The stored graph is not guaranteed acyclic; nothing in the schema
//! forbids cycles, and no traversal exists yet that would have to care.
//! Per-student progress lives in `skill_states`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Progress status of one student on one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillStatus {
    Locked,
    Available,
    InProgress,
    Mastered,
}

impl SkillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillStatus::Locked => "LOCKED",
            SkillStatus::Available => "AVAILABLE",
            SkillStatus::InProgress => "IN_PROGRESS",
            SkillStatus::Mastered => "MASTERED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LOCKED" => Some(SkillStatus::Locked),
            "AVAILABLE" => Some(SkillStatus::Available),
            "IN_PROGRESS" => Some(SkillStatus::InProgress),
            "MASTERED" => Some(SkillStatus::Mastered),
            _ => None,
        }
    }
}

/// A node in the skill graph, keyed by a human-readable slug ("algebra-1").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// A directed edge: `skill_id` depends on `depends_on_skill_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SkillDependency {
    pub id: Uuid,
    pub skill_id: String,
    pub depends_on_skill_id: String,
}

/// Per-student progress on one skill.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SkillState {
    pub id: Uuid,
    pub student_id: Uuid,
    pub skill_id: String,
    /// Mastery probability in [0, 1], enforced by the schema.
    pub domain_probability: f64,
    /// Stored as one of the [`SkillStatus`] tags.
    pub status: String,
    pub problems_attempted: i32,
    pub problems_solved: i32,
    pub last_activity: Option<DateTime<Utc>>,
    /// Per-skill overrides of the mastery-model defaults. Nothing consumes
    /// these yet.
    pub bkt_params: Value,
}
