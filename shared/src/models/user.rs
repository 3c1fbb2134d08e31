//! User profile model

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// The current user's profile
///
/// Persisted as a single record under the `userData` key. Field names
/// stay camelCase on the wire so existing stored profiles keep loading.
/// Overwritten on every save and removed entirely on logout; no history
/// is retained.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub work_phone: String,
    pub username: String,
    pub country: String,
    pub organization: String,
    pub role: Role,
    /// Bcrypt hash carried over from signup; never the raw password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl UserProfile {
    /// Display name used to prefill the certification form
    ///
    /// Empty when either name part is missing, matching the form's
    /// prefill behavior.
    pub fn full_name(&self) -> Option<String> {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            None
        } else {
            Some(format!("{} {}", self.first_name, self.last_name))
        }
    }
}
