use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use sqlx::PgPool;
use uuid::Uuid;

use elenchos::config::cors::CorsConfig;
use elenchos::config::jwt::JwtConfig;
use elenchos::config::mastery::MasteryConfig;
use elenchos::config::rate_limit::RateLimitConfig;
use elenchos::router::init_router;
use elenchos::state::AppState;
use elenchos::utils::password::hash_password;

#[allow(dead_code)]
pub async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
        mastery_config: MasteryConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Inserts a base user row plus its role subtype row, bypassing the HTTP
/// surface. `role` is "STUDENT" or "TEACHER".
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str, role: &str) -> Uuid {
    let hashed = hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (email, password_hash, role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(email.to_lowercase())
    .bind(hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    match role {
        "STUDENT" => {
            sqlx::query("INSERT INTO students (id) VALUES ($1)")
                .bind(id)
                .execute(pool)
                .await
                .unwrap();
        }
        "TEACHER" => {
            sqlx::query("INSERT INTO teachers (id) VALUES ($1)")
                .bind(id)
                .execute(pool)
                .await
                .unwrap();
        }
        other => panic!("Invalid role: {}", other),
    }

    id
}

#[allow(dead_code)]
pub async fn create_test_teacher(pool: &PgPool) -> Uuid {
    create_test_user(pool, &generate_unique_email(), "teachpass1", "TEACHER").await
}

#[allow(dead_code)]
pub async fn create_test_student(pool: &PgPool, teacher_id: Option<Uuid>) -> Uuid {
    let id = create_test_user(pool, &generate_unique_email(), "studpass1", "STUDENT").await;

    if let Some(teacher_id) = teacher_id {
        sqlx::query("UPDATE students SET teacher_id = $1 WHERE id = $2")
            .bind(teacher_id)
            .bind(id)
            .execute(pool)
            .await
            .unwrap();
    }

    id
}

#[allow(dead_code)]
pub async fn create_test_skill(pool: &PgPool, slug: &str) -> String {
    sqlx::query_scalar(
        "INSERT INTO skills (id, name, category) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(slug)
    .bind(format!("Skill {}", slug))
    .bind("algebra")
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_skill_state(pool: &PgPool, student_id: Uuid, skill_id: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO skill_states (student_id, skill_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(student_id)
    .bind(skill_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_problem(pool: &PgPool, teacher_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO problems (skill_id, type, difficulty, created_by)
         VALUES ($1, 'MATH', 2, $2) RETURNING id",
    )
    .bind("algebra-1")
    .bind(teacher_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_problem_content(pool: &PgPool, problem_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO problem_contents (problem_id, text) VALUES ($1, $2) RETURNING id",
    )
    .bind(problem_id)
    .bind("Solve for x: 2x + 3 = 7")
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_test_case(pool: &PgPool, problem_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO test_cases (problem_id, input, expected_output, description)
         VALUES ($1, '2', '4', 'doubles the input') RETURNING id",
    )
    .bind(problem_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_session(pool: &PgPool, student_id: Uuid, problem_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO sessions (student_id, problem_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(student_id)
    .bind(problem_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_step_attempt(pool: &PgPool, session_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO step_attempts (session_id, step_number, student_answer, is_correct, latency_seconds)
         VALUES ($1, 1, 'x = 2', false, 2.5) RETURNING id",
    )
    .bind(session_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_error_diagnosis(pool: &PgPool, step_attempt_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO error_diagnoses (step_attempt_id, error_type, error_details, affected_concept, severity)
         VALUES ($1, 'PROCEDURE', 'subtracted instead of dividing', 'linear-equations', 3)
         RETURNING id",
    )
    .bind(step_attempt_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_class(pool: &PgPool, teacher_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO classes (teacher_id, name, invitation_code) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(teacher_id)
    .bind("Algebra 101")
    .bind(format!("invite-{}", Uuid::new_v4()))
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn add_student_to_class(pool: &PgPool, class_id: Uuid, student_id: Uuid) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO class_students (class_id, student_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(class_id)
    .bind(student_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Counts rows in `table` where `column` equals the given UUID.
#[allow(dead_code)]
pub async fn count_where(pool: &PgPool, table: &str, column: &str, id: Uuid) -> i64 {
    sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {} WHERE {} = $1",
        table, column
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .unwrap()
}
