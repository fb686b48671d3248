pub mod auth;
pub mod classes;
pub mod health;
pub mod problems;
pub mod sessions;
pub mod skills;

pub use self::auth::model::{Account, UserRole};
