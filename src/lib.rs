//! Tally - Minimal authentication and usage-counter backend
//!
//! Registers accounts with Argon2-hashed credentials, signs users in,
//! and tracks a per-user usage counter over SQLite.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, register, sign_in, verify_password, PasswordError, RegistrationError,
    SignInError,
};
pub use config::Config;
pub use db::{Credential, CredentialRepository, Database, Profile, ProfileRepository};
pub use error::{Result, TallyError};
pub use web::WebServer;
