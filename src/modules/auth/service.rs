use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::password::{hash_password, verify_password};

use super::model::{Account, Profile, RegisterRequest, StudentProfile, TeacherProfile, UserRole};

/// Common projection of a freshly inserted `users` row.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    created_at: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
}

pub struct AuthService;

impl AuthService {
    /// Registers a new account.
    ///
    /// The email is lowercased before the uniqueness check and storage, so
    /// registration is case-insensitive on email. The pre-check keeps the
    /// common duplicate case cheap; the `users.email` unique constraint is
    /// the authoritative guard, and a violation raised by a concurrent
    /// registration maps to the same duplicate-email error. The base row and
    /// the role's subtype row are written in one transaction, so any failure
    /// in between rolls both back.
    #[instrument(skip(db, dto), fields(role = %dto.role))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequest) -> Result<Account, AppError> {
        let role = UserRole::parse(&dto.role).ok_or_else(|| {
            AppError::unprocessable(anyhow::anyhow!("Role must be STUDENT or TEACHER"))
        })?;
        let email = dto.email.to_lowercase();

        let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            warn!("Registration attempt with an already registered email");
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already registered"
            )));
        }

        let password_hash = hash_password(&dto.password)?;

        let mut tx = db.begin().await?;

        let user = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING id, email, created_at, last_login",
        )
        .bind(&email)
        .bind(&password_hash)
        .bind(role.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(duplicate_email_or_internal)?;

        let profile = match role {
            UserRole::Student => Profile::Student(
                sqlx::query_as::<_, StudentProfile>(
                    "INSERT INTO students (id)
                     VALUES ($1)
                     RETURNING teacher_id, total_problems_solved, average_scaffold_level,
                               bkt_parameters",
                )
                .bind(user.id)
                .fetch_one(&mut *tx)
                .await?,
            ),
            UserRole::Teacher => Profile::Teacher(
                sqlx::query_as::<_, TeacherProfile>(
                    "INSERT INTO teachers (id)
                     VALUES ($1)
                     RETURNING notion_token, notion_page_ids, alert_preferences",
                )
                .bind(user.id)
                .fetch_one(&mut *tx)
                .await?,
            ),
        };

        tx.commit().await?;

        info!(user.id = %user.id, "User registered");

        Ok(Account {
            id: user.id,
            email: user.email,
            role,
            created_at: user.created_at,
            last_login: user.last_login,
            profile,
        })
    }

    /// Looks up an account by credentials.
    ///
    /// Returns `Ok(None)` both for an unknown email and for a wrong
    /// password; the two cases are indistinguishable to the caller.
    #[instrument(skip(db, password))]
    pub async fn authenticate_user(
        db: &PgPool,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithHash {
            id: Uuid,
            email: String,
            role: String,
            created_at: DateTime<Utc>,
            last_login: Option<DateTime<Utc>>,
            password_hash: String,
        }

        let email = email.to_lowercase();

        let user = sqlx::query_as::<_, UserWithHash>(
            "SELECT id, email, role, created_at, last_login, password_hash
             FROM users WHERE email = $1",
        )
        .bind(&email)
        .fetch_optional(db)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        if !verify_password(password, &user.password_hash)? {
            return Ok(None);
        }

        let role = UserRole::parse(&user.role).ok_or_else(|| {
            AppError::internal(anyhow::anyhow!(
                "Unknown role tag {} stored for user {}",
                user.role,
                user.id
            ))
        })?;
        let profile = Self::load_profile(db, user.id, role).await?;

        Ok(Some(Account {
            id: user.id,
            email: user.email,
            role,
            created_at: user.created_at,
            last_login: user.last_login,
            profile,
        }))
    }

    async fn load_profile(db: &PgPool, id: Uuid, role: UserRole) -> Result<Profile, AppError> {
        let profile = match role {
            UserRole::Student => Profile::Student(
                sqlx::query_as::<_, StudentProfile>(
                    "SELECT teacher_id, total_problems_solved, average_scaffold_level,
                            bkt_parameters
                     FROM students WHERE id = $1",
                )
                .bind(id)
                .fetch_one(db)
                .await?,
            ),
            UserRole::Teacher => Profile::Teacher(
                sqlx::query_as::<_, TeacherProfile>(
                    "SELECT notion_token, notion_page_ids, alert_preferences
                     FROM teachers WHERE id = $1",
                )
                .bind(id)
                .fetch_one(db)
                .await?,
            ),
        };

        Ok(profile)
    }
}

/// Maps a unique-constraint violation on insert (the check-then-act race
/// with a concurrent registration) to the same error the pre-check
/// produces; everything else stays an internal failure.
fn duplicate_email_or_internal(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return AppError::bad_request(anyhow::anyhow!("Email already registered"));
    }
    AppError::database(anyhow::Error::from(e))
}
