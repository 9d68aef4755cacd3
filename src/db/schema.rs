//! Database schema and migrations for Tally.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Login table for credential records
    r#"
-- Credentials: one row per registered email
CREATE TABLE login (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    email  TEXT NOT NULL UNIQUE,
    hash   TEXT NOT NULL            -- Argon2 hash
);
"#,
    // v2: Users table for profile records
    r#"
-- Profiles: joined to login by email; consistency is maintained by the
-- registration transaction, not by a foreign-key constraint
CREATE TABLE users (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    email    TEXT NOT NULL UNIQUE,
    name     TEXT NOT NULL,
    joined   TEXT NOT NULL DEFAULT (datetime('now')),
    entries  INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_users_email ON users(email);
"#,
];
