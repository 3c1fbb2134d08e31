//! Sample data the repositories are seeded with at bootstrap
//!
//! One merged set of seed submissions replaces the per-dashboard copies
//! the system used to hold, so every view observes the same records.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use shared::models::{
    ApplicationStatus, BioData, InspectorApplication, LabReport, SeedReport, SeedSubmission,
    SubmissionStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

/// Seed submissions visible to all three dashboards
pub fn sample_submissions() -> Vec<SeedSubmission> {
    vec![
        SeedSubmission {
            id: "1001".to_string(),
            farmer_id: Some("F001".to_string()),
            farmer_name: Some("Alice Brown".to_string()),
            seed_type: "Maize".to_string(),
            variety: "Highland F1".to_string(),
            location: "Nairobi, Kenya".to_string(),
            quantity_kg: Some(Decimal::from(500)),
            submission_date: timestamp(2025, 3, 15, 8, 30),
            status: SubmissionStatus::Approved,
            inspector: Some("John Smith".to_string()),
            certificate_id: Some("CERT-001".to_string()),
            rejection_reason: None,
            lab_reports: vec![
                LabReport {
                    id: "LR001".to_string(),
                    date: date(2025, 3, 10),
                    result: "Germination 95%".to_string(),
                },
                LabReport {
                    id: "LR002".to_string(),
                    date: date(2025, 3, 12),
                    result: "Purity 98%".to_string(),
                },
            ],
            seed_reports: vec![SeedReport {
                id: "SR001".to_string(),
                date: date(2025, 3, 11),
                observations: "Good physical condition, no visible pests.".to_string(),
            }],
            bio_data: BioData {
                seed_name: "Highland Maize".to_string(),
                production_date: Some(date(2024, 12, 1)),
                batch_number: "MAZ-001".to_string(),
            },
        },
        SeedSubmission {
            id: "1002".to_string(),
            farmer_id: Some("F002".to_string()),
            farmer_name: Some("Bob White".to_string()),
            seed_type: "Wheat".to_string(),
            variety: "Red Ruby".to_string(),
            location: "Eldoret, Kenya".to_string(),
            quantity_kg: Some(Decimal::from(300)),
            submission_date: timestamp(2025, 4, 1, 14, 45),
            status: SubmissionStatus::Pending,
            inspector: None,
            certificate_id: None,
            rejection_reason: None,
            lab_reports: vec![],
            seed_reports: vec![],
            bio_data: BioData {
                seed_name: "Ruby Wheat".to_string(),
                production_date: Some(date(2025, 1, 15)),
                batch_number: "WHT-002".to_string(),
            },
        },
        SeedSubmission {
            id: "1003".to_string(),
            farmer_id: Some("F003".to_string()),
            farmer_name: Some("Charlie Green".to_string()),
            seed_type: "Rice".to_string(),
            variety: "Basmati Gold".to_string(),
            location: "Mwea, Kenya".to_string(),
            quantity_kg: Some(Decimal::from(400)),
            submission_date: timestamp(2025, 3, 28, 10, 15),
            status: SubmissionStatus::Rejected,
            inspector: Some("Sarah Johnson".to_string()),
            certificate_id: None,
            rejection_reason: Some("Germination rate below standards".to_string()),
            lab_reports: vec![LabReport {
                id: "LR003".to_string(),
                date: date(2025, 3, 25),
                result: "Germination 70%".to_string(),
            }],
            seed_reports: vec![],
            bio_data: BioData {
                seed_name: "Gold Basmati".to_string(),
                production_date: Some(date(2024, 11, 20)),
                batch_number: "RCE-003".to_string(),
            },
        },
        SeedSubmission {
            id: "1004".to_string(),
            farmer_id: None,
            farmer_name: None,
            seed_type: "Soybean".to_string(),
            variety: "Early Harvest".to_string(),
            location: "Kisumu, Kenya".to_string(),
            quantity_kg: None,
            submission_date: timestamp(2025, 4, 5, 9, 0),
            status: SubmissionStatus::Approved,
            inspector: Some("Mike Williams".to_string()),
            certificate_id: Some("CERT-002".to_string()),
            rejection_reason: None,
            lab_reports: vec![LabReport {
                id: "LR004".to_string(),
                date: date(2025, 4, 1),
                result: "Purity 99%".to_string(),
            }],
            seed_reports: vec![],
            bio_data: BioData {
                seed_name: "Early Soy".to_string(),
                production_date: Some(date(2025, 1, 10)),
                batch_number: "SOY-004".to_string(),
            },
        },
        SeedSubmission {
            id: "1005".to_string(),
            farmer_id: None,
            farmer_name: None,
            seed_type: "Cotton".to_string(),
            variety: "White Star".to_string(),
            location: "Kitui, Kenya".to_string(),
            quantity_kg: None,
            submission_date: timestamp(2025, 4, 8, 16, 30),
            status: SubmissionStatus::Draft,
            inspector: None,
            certificate_id: None,
            rejection_reason: None,
            lab_reports: vec![],
            seed_reports: vec![],
            bio_data: BioData {
                seed_name: "Star Cotton".to_string(),
                production_date: Some(date(2025, 2, 1)),
                batch_number: "COT-005".to_string(),
            },
        },
    ]
}

/// Inspector applications awaiting agency review
pub fn sample_inspector_applications() -> Vec<InspectorApplication> {
    vec![
        InspectorApplication {
            id: 1,
            full_name: "John Doe".to_string(),
            organization: "SeedCert Inc.".to_string(),
            license_number: "LIC123".to_string(),
            years_of_experience: None,
            certifications: None,
            address: None,
            description: None,
            status: ApplicationStatus::Pending,
        },
        InspectorApplication {
            id: 2,
            full_name: "Jane Smith".to_string(),
            organization: "AgriCheck".to_string(),
            license_number: "LIC456".to_string(),
            years_of_experience: None,
            certifications: None,
            address: None,
            description: None,
            status: ApplicationStatus::Approved,
        },
        InspectorApplication {
            id: 3,
            full_name: "Mike Johnson".to_string(),
            organization: "SeedSafe".to_string(),
            license_number: "LIC789".to_string(),
            years_of_experience: None,
            certifications: None,
            address: None,
            description: None,
            status: ApplicationStatus::Rejected,
        },
    ]
}
