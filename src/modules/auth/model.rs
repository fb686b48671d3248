//! Account models and registration DTOs.
//!
//! The stored user hierarchy (base `users` row plus a `students` or
//! `teachers` subtype row) surfaces in the application as a single
//! [`Account`] with a role tag and a role-specific [`Profile`] payload.
//! There is no inheritance, only discriminator-driven dispatch at
//! construction and response time.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// The two supported account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Student,
    Teacher,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Teacher => "TEACHER",
        }
    }

    /// Parses the stored/submitted role tag. Anything outside the two known
    /// variants is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "STUDENT" => Some(UserRole::Student),
            "TEACHER" => Some(UserRole::Teacher),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account: the common projection plus the role payload.
///
/// The password hash never leaves the service layer; it is not part of this
/// type.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub profile: Profile,
}

/// Role-specific payload of an [`Account`].
#[derive(Debug, Clone)]
pub enum Profile {
    Student(StudentProfile),
    Teacher(TeacherProfile),
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentProfile {
    pub teacher_id: Option<Uuid>,
    pub total_problems_solved: i32,
    pub average_scaffold_level: f64,
    pub bkt_parameters: Value,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeacherProfile {
    pub notion_token: Option<String>,
    pub notion_page_ids: Value,
    pub alert_preferences: Value,
}

/// Registration request body.
///
/// `role` stays a plain string through deserialization so an unrecognized
/// value fails validation (422 with a message) instead of body parsing.
#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(custom(function = validate_email_format))]
    #[schema(example = "alice@test.com")]
    pub email: String,
    #[validate(custom(function = validate_password_strength))]
    #[schema(example = "pass1234")]
    pub password: String,
    #[validate(custom(function = validate_role))]
    #[schema(example = "STUDENT")]
    pub role: String,
}

// Credentials must never reach the logs, so Debug redacts the password.
impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Email must be `local@domain` with exactly one `@`, a non-empty local
/// part, and a domain containing at least one dot.
fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next();

    let valid = match domain {
        Some(domain) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(validation_error(
            "email_format",
            "Email must have the form local@domain with a dotted domain",
        ))
    }
}

/// Passwords are 8 to 100 characters and contain at least one letter and
/// one digit.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let length = password.chars().count();
    if length < 8 {
        return Err(validation_error(
            "password_length",
            "Password must be at least 8 characters",
        ));
    }
    if length > 100 {
        return Err(validation_error(
            "password_length",
            "Password must be at most 100 characters",
        ));
    }
    if !password.chars().any(|c| c.is_alphabetic()) {
        return Err(validation_error(
            "password_letter",
            "Password must contain at least one letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(validation_error(
            "password_digit",
            "Password must contain at least one digit",
        ));
    }
    Ok(())
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if UserRole::parse(role).is_some() {
        Ok(())
    } else {
        Err(validation_error(
            "role",
            "Role must be STUDENT or TEACHER",
        ))
    }
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Student-shaped registration/lookup response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub teacher_id: Option<Uuid>,
    pub total_problems_solved: i32,
    pub average_scaffold_level: f64,
}

/// Teacher-shaped registration/lookup response.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherResponse {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub notion_token: Option<String>,
}

/// Role-shaped user projection. Serializes flat (no variant tag); neither
/// shape carries `password` or `password_hash` under any name.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum UserResponse {
    Student(StudentResponse),
    Teacher(TeacherResponse),
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        match account.profile {
            Profile::Student(profile) => UserResponse::Student(StudentResponse {
                id: account.id,
                email: account.email,
                role: account.role,
                created_at: account.created_at,
                last_login: account.last_login,
                teacher_id: profile.teacher_id,
                total_problems_solved: profile.total_problems_solved,
                average_scaffold_level: profile.average_scaffold_level,
            }),
            Profile::Teacher(profile) => UserResponse::Teacher(TeacherResponse {
                id: account.id,
                email: account.email,
                role: account.role,
                created_at: account.created_at,
                last_login: account.last_login,
                notion_token: profile.notion_token,
            }),
        }
    }
}
