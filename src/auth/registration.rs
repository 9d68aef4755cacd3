//! Account registration for Tally.
//!
//! Creates the credential and profile rows for a new account inside a
//! single transaction: either both rows are persisted or neither is.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use crate::auth::{hash_password, PasswordError};
use crate::db::{CredentialRepository, Profile, ProfileRepository};
use crate::TallyError;

/// Registration-specific errors.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Email already registered.
    #[error("email already registered")]
    EmailExists,

    /// Password hashing failed.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

impl From<TallyError> for RegistrationError {
    fn from(e: TallyError) -> Self {
        match e {
            TallyError::Duplicate(_) => RegistrationError::EmailExists,
            other => RegistrationError::Database(other.to_string()),
        }
    }
}

/// Register a new account.
///
/// This function:
/// 1. Hashes the password
/// 2. Inserts the login row and the users row in one transaction
/// 3. Rolls the whole transaction back if either insert fails
///
/// Returns the newly created profile on success.
pub async fn register(
    pool: &SqlitePool,
    email: &str,
    name: &str,
    password: &str,
) -> Result<Profile, RegistrationError> {
    let hash = hash_password(password)?;
    let joined = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| RegistrationError::Database(e.to_string()))?;

    CredentialRepository::insert(&mut *tx, email, &hash).await?;

    // The profile row reuses the input email, not a value echoed back
    // from the credential insert.
    let profile = ProfileRepository::insert(&mut *tx, email, name, &joined).await?;

    tx.commit()
        .await
        .map_err(|e| RegistrationError::Database(e.to_string()))?;

    info!(email, user_id = profile.id, "Registered new account");
    Ok(profile)
}
