//! Inspector verification application model

use serde::{Deserialize, Serialize};

use crate::models::ApplicationStatus;

/// An application to be verified as a seed inspector
///
/// Reviewed by agency users, who mutate the status in place. No
/// transition rules are enforced; a rejected application can be approved
/// again, exactly as the source system allows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectorApplication {
    pub id: u32,
    pub full_name: String,
    pub organization: String,
    pub license_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ApplicationStatus,
}

impl InspectorApplication {
    /// Case-insensitive match against name, organization, or license
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.full_name.to_lowercase().contains(&term)
            || self.organization.to_lowercase().contains(&term)
            || self.license_number.to_lowercase().contains(&term)
    }
}
