//! Sign-in workflow for Tally.
//!
//! Verifies a submitted password against the stored credential hash and
//! returns the matching profile. Read-only across both stores.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};

use crate::auth::verify_password;
use crate::db::{CredentialRepository, Profile, ProfileRepository};
use crate::TallyError;

/// Sign-in specific errors.
#[derive(Error, Debug)]
pub enum SignInError {
    /// Unknown email or wrong password.
    ///
    /// The two cases are deliberately indistinguishable so responses do
    /// not reveal whether an account exists.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

impl From<TallyError> for SignInError {
    fn from(e: TallyError) -> Self {
        SignInError::Database(e.to_string())
    }
}

/// Sign a user in.
///
/// This function:
/// 1. Looks up the credential by email
/// 2. Verifies the password against the stored Argon2 hash
/// 3. Fetches and returns the matching profile
///
/// No side effects; failed attempts mutate nothing.
pub async fn sign_in(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<Profile, SignInError> {
    let credentials = CredentialRepository::new(pool);

    let credential = credentials
        .find_by_email(email)
        .await?
        .ok_or(SignInError::InvalidCredentials)?;

    verify_password(password, &credential.hash).map_err(|_| {
        warn!(email, "Sign-in failed: password verification");
        SignInError::InvalidCredentials
    })?;

    let profiles = ProfileRepository::new(pool);
    let profile = profiles.get_by_email(email).await?.ok_or_else(|| {
        // A credential without a profile means the registration
        // transaction invariant was broken outside this process.
        SignInError::Database(format!("profile row missing for {email}"))
    })?;

    info!(email, user_id = profile.id, "User signed in");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::registration::register;
    use crate::Database;

    #[tokio::test]
    async fn test_sign_in_success() {
        let db = Database::open_in_memory().await.unwrap();

        let created = register(db.pool(), "a@x.com", "Alice", "pw1")
            .await
            .unwrap();

        let profile = sign_in(db.pool(), "a@x.com", "pw1").await.unwrap();
        assert_eq!(profile.id, created.id);
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.entries, 0);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let db = Database::open_in_memory().await.unwrap();

        register(db.pool(), "a@x.com", "Alice", "pw1").await.unwrap();

        let result = sign_in(db.pool(), "a@x.com", "wrong").await;
        assert!(matches!(result, Err(SignInError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_sign_in_unknown_email() {
        let db = Database::open_in_memory().await.unwrap();

        let result = sign_in(db.pool(), "nobody@x.com", "pw1").await;
        assert!(matches!(result, Err(SignInError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_look_alike() {
        let db = Database::open_in_memory().await.unwrap();

        register(db.pool(), "a@x.com", "Alice", "pw1").await.unwrap();

        let unknown = sign_in(db.pool(), "nobody@x.com", "pw1")
            .await
            .unwrap_err();
        let wrong = sign_in(db.pool(), "a@x.com", "wrong").await.unwrap_err();

        // Same message for both failure modes
        assert_eq!(unknown.to_string(), wrong.to_string());
    }
}
