//! Seed submission models for the role dashboards

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a seed submission
///
/// UPPERCASE on the wire, matching the dashboard data the system was
/// seeded with. Distinct from [`crate::ApplicationStatus`]: submissions
/// also have a draft stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmissionStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Draft => write!(f, "DRAFT"),
            SubmissionStatus::Pending => write!(f, "PENDING"),
            SubmissionStatus::Approved => write!(f, "APPROVED"),
            SubmissionStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Biological details attached to a submission
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BioData {
    pub seed_name: String,
    pub production_date: Option<NaiveDate>,
    pub batch_number: String,
}

/// A laboratory test result attached to a submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabReport {
    pub id: String,
    pub date: NaiveDate,
    pub result: String,
}

impl LabReport {
    pub fn new(date: NaiveDate, result: impl Into<String>) -> Self {
        Self {
            id: format!("LR{}", report_suffix()),
            date,
            result: result.into(),
        }
    }
}

/// A field observation report filed by an inspector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReport {
    pub id: String,
    pub date: NaiveDate,
    pub observations: String,
}

impl SeedReport {
    pub fn new(date: NaiveDate, observations: impl Into<String>) -> Self {
        Self {
            id: format!("SR{}", report_suffix()),
            date,
            observations: observations.into(),
        }
    }
}

// Short random suffix in the style of the original report ids.
fn report_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..7].to_string()
}

/// A farmer's seed batch as seen by the dashboards
///
/// One shared repository holds these; the farmer, inspector, and agency
/// views all observe the same record. The inspector reference is weak
/// (by name only) and there is no enforced relation to a
/// [`crate::CertificationApplication`], both as observed in the source
/// system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSubmission {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_name: Option<String>,
    pub seed_type: String,
    pub variety: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_kg: Option<Decimal>,
    pub submission_date: DateTime<Utc>,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub lab_reports: Vec<LabReport>,
    #[serde(default)]
    pub seed_reports: Vec<SeedReport>,
    pub bio_data: BioData,
}

impl SeedSubmission {
    /// Whether this submission carries an issued certificate
    pub fn is_certified(&self) -> bool {
        self.status == SubmissionStatus::Approved && self.certificate_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&SubmissionStatus::Approved).unwrap();
        assert_eq!(json, r#""APPROVED""#);
    }

    #[test]
    fn test_report_id_shape() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let lab = LabReport::new(date, "Germination 95%");
        let seed = SeedReport::new(date, "No visible pests");
        assert!(lab.id.starts_with("LR") && lab.id.len() == 9);
        assert!(seed.id.starts_with("SR") && seed.id.len() == 9);
    }

    #[test]
    fn test_certified_requires_both_status_and_id() {
        let date = Utc::now();
        let mut sub = SeedSubmission {
            id: "1001".to_string(),
            farmer_id: None,
            farmer_name: None,
            seed_type: "Maize".to_string(),
            variety: "Highland F1".to_string(),
            location: "Nairobi, Kenya".to_string(),
            quantity_kg: None,
            submission_date: date,
            status: SubmissionStatus::Approved,
            inspector: None,
            certificate_id: None,
            rejection_reason: None,
            lab_reports: vec![],
            seed_reports: vec![],
            bio_data: BioData::default(),
        };
        assert!(!sub.is_certified());
        sub.certificate_id = Some("CERT-001".to_string());
        assert!(sub.is_certified());
    }
}
