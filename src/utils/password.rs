use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Hashes a plaintext password with bcrypt. The output embeds its own salt
/// and cost parameters, so verification needs no separate salt store.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
