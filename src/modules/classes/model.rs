use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A teacher's class. Owned by its teacher: deleting the teacher deletes the
/// class and, through it, every membership row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Code students redeem to join the class. Globally unique.
    pub invitation_code: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Membership of one student in one class.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClassStudent {
    pub id: Uuid,
    pub class_id: Uuid,
    pub student_id: Uuid,
    pub joined_at: DateTime<Utc>,
}
