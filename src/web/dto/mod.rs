//! Data transfer objects for the Web API.

mod request;
mod response;

pub use request::{EntriesRequest, RegisterRequest, SignInRequest};
pub use response::{ApiResponse, EntriesResponse, ProfileResponse};
