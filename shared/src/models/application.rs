//! Certification application models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Prefix for derived certificate identifiers
pub const CERTIFICATE_ID_PREFIX: &str = "CERT-";

/// Build the certificate identifier for a given sequence number
pub fn certificate_id_for(sequence: u64) -> String {
    format!("{}{}", CERTIFICATE_ID_PREFIX, sequence)
}

/// Review status of a certification application
///
/// Lowercase on the wire, matching the stored application list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A farmer's stored certification application
///
/// Appended to the persisted `certificationApplications` list and never
/// updated or deleted afterwards. Both `id` and `certificate_id` are
/// derived from the list length at append time; the identifier is not
/// guaranteed unique across concurrent writers (a documented gap of the
/// system, see the repository).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationApplication {
    pub id: u64,
    pub farmer_name: String,
    pub seed_type: String,
    pub quantity_kg: Decimal,
    pub farm_location: String,
    pub planting_date: NaiveDate,
    pub seed_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ApplicationStatus,
    pub certificate_id: String,
    pub submitted_at: DateTime<Utc>,
}

/// Fields collected by the certification form, before an id is assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub farmer_name: String,
    pub seed_type: String,
    pub quantity_kg: Decimal,
    pub farm_location: String,
    pub planting_date: NaiveDate,
    pub seed_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewApplication {
    /// Materialize the stored record for a given sequence number
    pub fn into_stored(self, sequence: u64, submitted_at: DateTime<Utc>) -> CertificationApplication {
        CertificationApplication {
            id: sequence,
            farmer_name: self.farmer_name,
            seed_type: self.seed_type,
            quantity_kg: self.quantity_kg,
            farm_location: self.farm_location,
            planting_date: self.planting_date,
            seed_source: self.seed_source,
            description: self.description,
            status: ApplicationStatus::Pending,
            certificate_id: certificate_id_for(sequence),
            submitted_at,
        }
    }
}
