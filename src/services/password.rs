use std::sync::OnceLock;

use crate::utils::AppError;

static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Bcrypt hash of `password` with the given work factor, computed off the async workers
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| AppError::Hashing(e.to_string()))
}

/// Checks `password` against a stored bcrypt hash.
/// A malformed hash is an error, not a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))?
        .map_err(|e| AppError::Hashing(e.to_string()))
}

/// Hash compared against when a login names no known account, so the miss
/// path pays the same bcrypt cost as a wrong password
pub async fn dummy_hash(cost: u32) -> Result<&'static str, AppError> {
    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash.as_str());
    }
    let hash = hash_password("buddyup-no-such-account", cost).await?;
    Ok(DUMMY_HASH.get_or_init(|| hash).as_str())
}

#[cfg(test)]
pub fn dummy_hash_ready() -> bool {
    DUMMY_HASH.get().is_some()
}
