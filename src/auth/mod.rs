//! Authentication module for Tally.
//!
//! Password hashing plus the sign-in and registration workflows.

mod password;
pub mod registration;
pub mod signin;

pub use password::{hash_password, verify_password, PasswordError};
pub use registration::{register, RegistrationError};
pub use signin::{sign_in, SignInError};
