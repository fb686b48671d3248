//! # Elenchos API
//!
//! Backend for an educational platform: student/teacher registration with
//! password hashing, and the relational data model for classes, problems,
//! practice sessions, and the skill-mastery graph.
//!
//! ## Overview
//!
//! The functionally complete surface today is registration and the
//! credential-lookup utility behind it:
//!
//! - **Registration**: `POST /api/v1/auth/register` validates input, hashes
//!   the password with bcrypt, and persists a role-shaped account (STUDENT
//!   or TEACHER) atomically.
//! - **Data model**: the full learning schema ships as migrations with its
//!   ownership rules: cascade deletes on every parent-owns-children edge,
//!   `SET NULL` on the one nullable back-reference (student → teacher).
//! - **Health**: `GET /` and `GET /health` report service identity and
//!   database reachability.
//!
//! The mastery model (Bayesian Knowledge Tracing), scaffolding logic, and
//! skill-graph traversal exist only as configuration defaults and schema
//! columns; no algorithm consumes them yet.
//!
//! ## Architecture
//!
//! The codebase follows a modular layout:
//!
//! ```text
//! src/
//! ├── config/           # Env-driven configuration (database, CORS, JWT,
//! │                     # rate limits, mastery-model defaults)
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Registration flow + authenticate utility
//! │   ├── health/      # Liveness endpoints
//! │   ├── classes/     # Class and membership models
//! │   ├── problems/    # Problem, content, and test case models
//! │   ├── sessions/    # Session, step attempt, and diagnosis models
//! │   └── skills/      # Skill graph and per-student state models
//! └── utils/           # Errors, password hashing
//! ```
//!
//! Feature modules with behavior follow a consistent structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic
//! - `model.rs`: data models and DTOs
//! - `router.rs`: axum router configuration
//!
//! ## Accounts
//!
//! A stored user is one `users` row plus a role subtype row (`students` or
//! `teachers`). In the application this surfaces as a single
//! [`modules::auth::model::Account`] with a role tag and a role-specific
//! payload. Discriminator dispatch, no inheritance.
//!
//! ## Security considerations
//!
//! - Passwords are hashed with bcrypt; the plaintext is never stored or
//!   logged, and no response shape carries the hash.
//! - Unknown email and wrong password are indistinguishable to
//!   authentication callers.
//! - Internal failures answer with a generic body; storage-layer error text
//!   stays in the logs.

pub mod config;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
