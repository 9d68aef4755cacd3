//! Request DTOs for the Web API.

use serde::Deserialize;

/// Sign-in request.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    /// Account email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Plaintext password.
    pub password: String,
}

/// Entry-increment request.
#[derive(Debug, Deserialize)]
pub struct EntriesRequest {
    /// Profile ID whose counter to increment.
    pub id: i64,
}
