//! Credential store for Tally.
//!
//! Wraps the `login` table: one row per registered email, holding the
//! Argon2 hash of the account password.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::{Result, TallyError};

/// Credential entity pairing an email with a password hash.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Credential {
    /// Unique credential ID.
    pub id: i64,
    /// Account email (unique).
    pub email: String,
    /// Password hash (Argon2 PHC string).
    #[serde(skip_serializing)]
    pub hash: String,
}

/// Repository for credential lookups and inserts.
pub struct CredentialRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CredentialRepository<'a> {
    /// Create a new CredentialRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a credential by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Credential>> {
        let result = sqlx::query_as::<_, Credential>(
            "SELECT id, email, hash FROM login WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| TallyError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Insert a new credential row.
    ///
    /// Takes any SQLite executor so the registration workflow can run it
    /// inside its own transaction. Fails with [`TallyError::Duplicate`]
    /// when the email is already registered.
    pub async fn insert<'e, E>(executor: E, email: &str, hash: &str) -> Result<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO login (email, hash) VALUES (?, ?)")
            .bind(email)
            .bind(hash)
            .execute(executor)
            .await
            .map_err(map_insert_error)?;

        Ok(())
    }
}

/// Map an insert failure, surfacing unique-constraint violations.
pub(crate) fn map_insert_error(e: sqlx::Error) -> TallyError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            TallyError::Duplicate("email".to_string())
        }
        _ => TallyError::Database(e.to_string()),
    }
}
