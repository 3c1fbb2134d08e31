//! Farmer dashboard: seed report drafts, submission, and certificates

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use shared::models::{BioData, LabReport, SeedSubmission, SubmissionStatus};

use crate::error::AppResult;
use crate::repository::SubmissionRepository;
use crate::services::check;
use crate::stats::{summarize_submissions, StatusSummary};

/// Farmer view over the shared submission register
pub struct FarmerService {
    submissions: Arc<dyn SubmissionRepository>,
}

/// Seed report form fields
///
/// An absent `id` means a new report; a present one edits the existing
/// submission in place.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeedReportForm {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "Seed type is required"))]
    pub seed_type: String,
    #[validate(length(min = 1, message = "Variety is required"))]
    pub variety: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(default)]
    pub bio_data: BioData,
}

impl FarmerService {
    pub fn new(submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { submissions }
    }

    /// Save the form as a draft
    pub fn save_draft(&self, form: SeedReportForm) -> AppResult<SeedSubmission> {
        self.save(form, SubmissionStatus::Draft)
    }

    /// Submit the form for verification
    pub fn submit_for_verification(&self, form: SeedReportForm) -> AppResult<SeedSubmission> {
        self.save(form, SubmissionStatus::Pending)
    }

    fn save(&self, form: SeedReportForm, status: SubmissionStatus) -> AppResult<SeedSubmission> {
        check(&form)?;
        let id = form.id.unwrap_or_else(|| self.submissions.next_id());
        // Saving rebuilds the record from the form; attached reports do
        // not survive an edit, as in the system this replaces.
        let submission = SeedSubmission {
            id,
            farmer_id: None,
            farmer_name: None,
            seed_type: form.seed_type,
            variety: form.variety,
            location: form.location,
            quantity_kg: None,
            submission_date: Utc::now(),
            status,
            inspector: None,
            certificate_id: None,
            rejection_reason: None,
            lab_reports: vec![],
            seed_reports: vec![],
            bio_data: form.bio_data,
        };
        tracing::info!(id = %submission.id, status = %status, "seed report saved");
        self.submissions.upsert(submission)
    }

    /// Attach a lab report to one of the farmer's submissions
    pub fn attach_lab_report(&self, id: &str, report: LabReport) -> AppResult<SeedSubmission> {
        self.submissions.add_lab_report(id, report)
    }

    pub fn list(&self) -> Vec<SeedSubmission> {
        self.submissions.list()
    }

    pub fn get(&self, id: &str) -> AppResult<SeedSubmission> {
        self.submissions.get(id)
    }

    /// Submissions carrying an issued certificate
    pub fn certificates(&self) -> Vec<SeedSubmission> {
        self.submissions
            .list()
            .into_iter()
            .filter(SeedSubmission::is_certified)
            .collect()
    }

    /// Status counters for the dashboard header
    pub fn stats(&self) -> StatusSummary {
        summarize_submissions(&self.submissions.list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySubmissionRepository;
    use crate::seed::sample_submissions;

    fn service() -> FarmerService {
        FarmerService::new(Arc::new(InMemorySubmissionRepository::new(
            sample_submissions(),
        )))
    }

    fn form(id: Option<&str>) -> SeedReportForm {
        SeedReportForm {
            id: id.map(str::to_string),
            seed_type: "Sorghum".to_string(),
            variety: "Dryland King".to_string(),
            location: "Machakos, Kenya".to_string(),
            bio_data: BioData::default(),
        }
    }

    #[test]
    fn test_new_draft_gets_next_sequential_id() {
        let service = service();
        let draft = service.save_draft(form(None)).unwrap();
        assert_eq!(draft.id, "1006");
        assert_eq!(draft.status, SubmissionStatus::Draft);
    }

    #[test]
    fn test_submit_for_verification_is_pending() {
        let service = service();
        let submitted = service.submit_for_verification(form(None)).unwrap();
        assert_eq!(submitted.status, SubmissionStatus::Pending);
    }

    #[test]
    fn test_editing_resets_attached_reports() {
        let service = service();
        assert!(!service.get("1001").unwrap().lab_reports.is_empty());
        let edited = service.save_draft(form(Some("1001"))).unwrap();
        assert!(edited.lab_reports.is_empty());
        assert_eq!(service.list().len(), sample_submissions().len());
    }

    #[test]
    fn test_certificates_are_approved_with_id() {
        let service = service();
        let certificates = service.certificates();
        assert_eq!(certificates.len(), 2);
        assert!(certificates.iter().all(SeedSubmission::is_certified));
    }

    #[test]
    fn test_stats_count_seeded_statuses() {
        let stats = service().stats();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.approved, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.draft, 1);
    }

    #[test]
    fn test_blank_form_is_rejected() {
        let service = service();
        let mut blank = form(None);
        blank.seed_type.clear();
        assert!(service.save_draft(blank).is_err());
    }
}
