//! Response DTOs for the Web API.

use serde::Serialize;

use crate::db::Profile;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Profile information in responses.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Profile ID.
    pub id: i64,
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Registration timestamp.
    pub joined: String,
    /// Usage counter.
    pub entries: i64,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            name: profile.name,
            joined: profile.joined,
            entries: profile.entries,
        }
    }
}

/// Entry-increment response.
#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    /// New counter value after the increment.
    pub entries: i64,
}
