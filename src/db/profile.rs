//! Profile store for Tally.
//!
//! Wraps the `users` table: display name, join date, and the per-user
//! usage counter (`entries`).

use serde::Serialize;
use sqlx::SqlitePool;

use super::credential::map_insert_error;
use crate::{Result, TallyError};

/// Profile entity representing a registered user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Profile {
    /// Unique profile ID.
    pub id: i64,
    /// Account email (unique, matches a login row).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Registration timestamp.
    pub joined: String,
    /// Usage counter, incremented by the entries endpoint.
    pub entries: i64,
}

/// Repository for profile CRUD and counter operations.
pub struct ProfileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProfileRepository<'a> {
    /// Create a new ProfileRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new profile row with `entries = 0`.
    ///
    /// Takes any SQLite executor so the registration workflow can run it
    /// inside its own transaction. Returns the created profile.
    pub async fn insert<'e, E>(executor: E, email: &str, name: &str, joined: &str) -> Result<Profile>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let profile = sqlx::query_as::<_, Profile>(
            "INSERT INTO users (email, name, joined) VALUES (?, ?, ?)
             RETURNING id, email, name, joined, entries",
        )
        .bind(email)
        .bind(name)
        .bind(joined)
        .fetch_one(executor)
        .await
        .map_err(map_insert_error)?;

        Ok(profile)
    }

    /// Get a profile by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Profile>> {
        let result = sqlx::query_as::<_, Profile>(
            "SELECT id, email, name, joined, entries FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| TallyError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a profile by email.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Profile>> {
        let result = sqlx::query_as::<_, Profile>(
            "SELECT id, email, name, joined, entries FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| TallyError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Atomically increment the entry counter and return the new value.
    ///
    /// The increment happens in a single SQL UPDATE so concurrent callers
    /// serialize in the storage engine. Returns `None` when no row has
    /// the given id.
    pub async fn increment_entries(&self, id: i64) -> Result<Option<i64>> {
        let entries: Option<i64> = sqlx::query_scalar(
            "UPDATE users SET entries = entries + 1 WHERE id = ? RETURNING entries",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| TallyError::Database(e.to_string()))?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn insert_test_profile(db: &Database, email: &str, name: &str) -> Profile {
        ProfileRepository::insert(db.pool(), email, name, "2026-01-01 00:00:00")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get_by_id() {
        let db = Database::open_in_memory().await.unwrap();

        let created = insert_test_profile(&db, "a@x.com", "Alice").await;
        assert_eq!(created.email, "a@x.com");
        assert_eq!(created.name, "Alice");
        assert_eq!(created.entries, 0);

        let repo = ProfileRepository::new(db.pool());
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Alice");
        assert_eq!(fetched.joined, "2026-01-01 00:00:00");
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let db = Database::open_in_memory().await.unwrap();

        insert_test_profile(&db, "a@x.com", "Alice").await;

        let repo = ProfileRepository::new(db.pool());
        let fetched = repo.get_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(fetched.name, "Alice");

        assert!(repo.get_by_email("nobody@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = Database::open_in_memory().await.unwrap();

        let repo = ProfileRepository::new(db.pool());
        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_increment_entries() {
        let db = Database::open_in_memory().await.unwrap();

        let profile = insert_test_profile(&db, "a@x.com", "Alice").await;

        let repo = ProfileRepository::new(db.pool());
        assert_eq!(repo.increment_entries(profile.id).await.unwrap(), Some(1));
        assert_eq!(repo.increment_entries(profile.id).await.unwrap(), Some(2));

        let fetched = repo.get_by_id(profile.id).await.unwrap().unwrap();
        assert_eq!(fetched.entries, 2);
    }

    #[tokio::test]
    async fn test_increment_entries_missing_id() {
        let db = Database::open_in_memory().await.unwrap();

        let repo = ProfileRepository::new(db.pool());
        assert_eq!(repo.increment_entries(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_duplicate_email() {
        let db = Database::open_in_memory().await.unwrap();

        insert_test_profile(&db, "a@x.com", "Alice").await;

        let result =
            ProfileRepository::insert(db.pool(), "a@x.com", "Bob", "2026-01-02 00:00:00").await;
        assert!(matches!(result, Err(TallyError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_hash_not_serialized() {
        // Profile serialization exposes no credential material
        let profile = Profile {
            id: 1,
            email: "a@x.com".to_string(),
            name: "Alice".to_string(),
            joined: "2026-01-01 00:00:00".to_string(),
            entries: 0,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("hash"));
        assert!(json.contains("\"entries\":0"));
    }
}
