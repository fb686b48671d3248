use utoipa::OpenApi;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    RegisterRequest, StudentResponse, TeacherResponse, UserResponse, UserRole,
};
use crate::modules::classes::model::{Class, ClassStudent};
use crate::modules::health::controller::{HealthResponse, RootStatusResponse};
use crate::modules::problems::model::{Language, Problem, ProblemContent, ProblemType, TestCase};
use crate::modules::sessions::model::{
    ErrorDiagnosis, ErrorType, ScaffoldLevel, Session, StepAttempt,
};
use crate::modules::skills::model::{Skill, SkillDependency, SkillState, SkillStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::health::controller::root_status,
        crate::modules::health::controller::health_check,
    ),
    components(
        schemas(
            RegisterRequest,
            UserResponse,
            StudentResponse,
            TeacherResponse,
            UserRole,
            ErrorResponse,
            RootStatusResponse,
            HealthResponse,
            Class,
            ClassStudent,
            Skill,
            SkillDependency,
            SkillState,
            SkillStatus,
            Problem,
            ProblemContent,
            TestCase,
            ProblemType,
            Language,
            Session,
            StepAttempt,
            ErrorDiagnosis,
            ScaffoldLevel,
            ErrorType,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration"),
        (name = "Health", description = "Liveness and service identity")
    ),
    info(
        title = "Elenchos API",
        version = "0.1.0",
        description = "Educational platform backend: student/teacher registration and the learning data model.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
