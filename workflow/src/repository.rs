//! Repositories: the single source of truth behind every dashboard
//!
//! The certification record store persists through [`LocalStore`]; the
//! seed submission register is memory-only, matching the system it
//! replaces, but is shared by the farmer, inspector, and agency views
//! instead of each holding a private copy.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use shared::models::{
    CertificationApplication, LabReport, NewApplication, SeedReport, SeedSubmission,
    SubmissionStatus,
};

use crate::error::{AppError, AppResult};
use crate::storage::{keys, LocalStore};

/// Append-only store of certification applications
pub trait ApplicationRepository: Send + Sync {
    /// Append a new application, deriving its sequential certificate id
    ///
    /// The id is `CERT-<len + 1>` at append time. Length-derived ids can
    /// collide if records were ever removed or the store is shared
    /// between sessions; that gap is inherited from the system this
    /// replaces and deliberately not fixed here.
    fn append(&self, input: NewApplication) -> AppResult<CertificationApplication>;

    /// Exact certificate-id lookup
    fn find_by_certificate_id(&self, certificate_id: &str) -> AppResult<CertificationApplication>;

    /// All stored applications, in append order
    fn list(&self) -> Vec<CertificationApplication>;
}

/// [`ApplicationRepository`] over the local JSON store
pub struct LocalApplicationRepository {
    store: Arc<LocalStore>,
}

impl LocalApplicationRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

impl ApplicationRepository for LocalApplicationRepository {
    fn append(&self, input: NewApplication) -> AppResult<CertificationApplication> {
        let mut applications = self
            .store
            .get::<Vec<CertificationApplication>>(keys::CERTIFICATION_APPLICATIONS)
            .unwrap_or_default();
        let sequence = applications.len() as u64 + 1;
        let stored = input.into_stored(sequence, Utc::now());
        applications.push(stored.clone());
        self.store.set(keys::CERTIFICATION_APPLICATIONS, &applications)?;
        tracing::info!(
            certificate_id = %stored.certificate_id,
            farmer = %stored.farmer_name,
            "certification application appended"
        );
        Ok(stored)
    }

    fn find_by_certificate_id(&self, certificate_id: &str) -> AppResult<CertificationApplication> {
        self.list()
            .into_iter()
            .find(|app| app.certificate_id == certificate_id)
            .ok_or_else(|| AppError::NotFound("Certificate".to_string()))
    }

    fn list(&self) -> Vec<CertificationApplication> {
        self.store
            .get::<Vec<CertificationApplication>>(keys::CERTIFICATION_APPLICATIONS)
            .unwrap_or_default()
    }
}

/// Shared register of seed submissions
pub trait SubmissionRepository: Send + Sync {
    fn list(&self) -> Vec<SeedSubmission>;

    fn get(&self, id: &str) -> AppResult<SeedSubmission>;

    /// Insert a new submission or replace the one with the same id
    fn upsert(&self, submission: SeedSubmission) -> AppResult<SeedSubmission>;

    fn add_lab_report(&self, id: &str, report: LabReport) -> AppResult<SeedSubmission>;

    fn add_seed_report(&self, id: &str, report: SeedReport) -> AppResult<SeedSubmission>;

    fn set_status(&self, id: &str, status: SubmissionStatus) -> AppResult<SeedSubmission>;

    /// Next sequential submission id (last id + 1, starting at 1001)
    fn next_id(&self) -> String;
}

/// Memory-only [`SubmissionRepository`], seeded at bootstrap
pub struct InMemorySubmissionRepository {
    submissions: Mutex<Vec<SeedSubmission>>,
}

impl InMemorySubmissionRepository {
    pub fn new(seed: Vec<SeedSubmission>) -> Self {
        Self {
            submissions: Mutex::new(seed),
        }
    }

    fn with_submission<T>(
        &self,
        id: &str,
        apply: impl FnOnce(&mut SeedSubmission) -> T,
    ) -> AppResult<T> {
        let mut submissions = self.submissions.lock().unwrap_or_else(|e| e.into_inner());
        let submission = submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound("Seed submission".to_string()))?;
        Ok(apply(submission))
    }
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn list(&self) -> Vec<SeedSubmission> {
        self.submissions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn get(&self, id: &str) -> AppResult<SeedSubmission> {
        self.submissions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Seed submission".to_string()))
    }

    fn upsert(&self, submission: SeedSubmission) -> AppResult<SeedSubmission> {
        let mut submissions = self.submissions.lock().unwrap_or_else(|e| e.into_inner());
        match submissions.iter_mut().find(|s| s.id == submission.id) {
            Some(existing) => *existing = submission.clone(),
            None => submissions.push(submission.clone()),
        }
        tracing::debug!(id = %submission.id, status = %submission.status, "submission upserted");
        Ok(submission)
    }

    fn add_lab_report(&self, id: &str, report: LabReport) -> AppResult<SeedSubmission> {
        self.with_submission(id, |submission| {
            submission.lab_reports.push(report);
            submission.clone()
        })
    }

    fn add_seed_report(&self, id: &str, report: SeedReport) -> AppResult<SeedSubmission> {
        self.with_submission(id, |submission| {
            submission.seed_reports.push(report);
            submission.clone()
        })
    }

    fn set_status(&self, id: &str, status: SubmissionStatus) -> AppResult<SeedSubmission> {
        // No transition rules: any status may follow any other.
        self.with_submission(id, |submission| {
            submission.status = status;
            submission.clone()
        })
    }

    fn next_id(&self) -> String {
        let submissions = self.submissions.lock().unwrap_or_else(|e| e.into_inner());
        let last = submissions
            .last()
            .and_then(|s| s.id.parse::<u64>().ok())
            .unwrap_or(1000);
        (last + 1).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::BioData;

    fn submission(id: &str) -> SeedSubmission {
        SeedSubmission {
            id: id.to_string(),
            farmer_id: None,
            farmer_name: None,
            seed_type: "Maize".to_string(),
            variety: "Highland F1".to_string(),
            location: "Nairobi, Kenya".to_string(),
            quantity_kg: None,
            submission_date: Utc::now(),
            status: SubmissionStatus::Draft,
            inspector: None,
            certificate_id: None,
            rejection_reason: None,
            lab_reports: vec![],
            seed_reports: vec![],
            bio_data: BioData::default(),
        }
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let repo = InMemorySubmissionRepository::new(vec![submission("1001")]);
        let mut updated = submission("1001");
        updated.status = SubmissionStatus::Pending;
        repo.upsert(updated).unwrap();
        assert_eq!(repo.list().len(), 1);
        assert_eq!(repo.get("1001").unwrap().status, SubmissionStatus::Pending);
    }

    #[test]
    fn test_next_id_counts_from_last() {
        let repo = InMemorySubmissionRepository::new(vec![]);
        assert_eq!(repo.next_id(), "1001");
        repo.upsert(submission("1004")).unwrap();
        assert_eq!(repo.next_id(), "1005");
    }

    #[test]
    fn test_status_can_move_backwards() {
        // Re-approving a rejected submission is allowed by design.
        let repo = InMemorySubmissionRepository::new(vec![submission("1001")]);
        repo.set_status("1001", SubmissionStatus::Rejected).unwrap();
        let restored = repo.set_status("1001", SubmissionStatus::Approved).unwrap();
        assert_eq!(restored.status, SubmissionStatus::Approved);
    }

    #[test]
    fn test_reports_attach_to_matching_submission() {
        let repo =
            InMemorySubmissionRepository::new(vec![submission("1001"), submission("1002")]);
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        repo.add_lab_report("1002", LabReport::new(date, "Germination 95%"))
            .unwrap();
        assert!(repo.get("1001").unwrap().lab_reports.is_empty());
        assert_eq!(repo.get("1002").unwrap().lab_reports.len(), 1);
    }

    #[test]
    fn test_unknown_submission_is_not_found() {
        let repo = InMemorySubmissionRepository::new(vec![]);
        assert!(repo.get("9999").unwrap_err().is_not_found());
    }
}
