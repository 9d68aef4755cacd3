//! Web API request handlers.

mod auth;
mod user;

pub use auth::{register, signin, AppState};
pub use user::{get_profile, increment_entries};
