//! Inspector dashboard: submission search and report filing

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use shared::models::{LabReport, SeedReport, SeedSubmission};
use shared::validation::validate_required;

use crate::error::{AppError, AppResult};
use crate::repository::SubmissionRepository;
use crate::stats::{summarize_submissions, total_lab_reports, total_seed_reports, StatusSummary};

/// Inspector view over the shared submission register
pub struct InspectorService {
    submissions: Arc<dyn SubmissionRepository>,
}

/// Dashboard header figures
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InspectorSummary {
    pub statuses: StatusSummary,
    pub lab_reports: usize,
    pub seed_reports: usize,
}

impl InspectorService {
    pub fn new(submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { submissions }
    }

    /// Case-insensitive search over farmer name, seed type, and farmer id
    ///
    /// An empty term returns everything.
    pub fn search(&self, term: &str) -> Vec<SeedSubmission> {
        let term = term.to_lowercase();
        self.submissions
            .list()
            .into_iter()
            .filter(|submission| {
                term.is_empty()
                    || submission
                        .farmer_name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&term))
                    || submission.seed_type.to_lowercase().contains(&term)
                    || submission
                        .farmer_id
                        .as_deref()
                        .is_some_and(|id| id.to_lowercase().contains(&term))
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> AppResult<SeedSubmission> {
        self.submissions.get(id)
    }

    /// File a lab test result against a submission
    pub fn file_lab_report(
        &self,
        submission_id: &str,
        date: NaiveDate,
        result: &str,
    ) -> AppResult<SeedSubmission> {
        validate_required(result).map_err(|message| AppError::validation("result", message))?;
        let updated = self
            .submissions
            .add_lab_report(submission_id, LabReport::new(date, result))?;
        tracing::info!(submission_id, "lab report filed");
        Ok(updated)
    }

    /// File a field observation report against a submission
    pub fn file_seed_report(
        &self,
        submission_id: &str,
        date: NaiveDate,
        observations: &str,
    ) -> AppResult<SeedSubmission> {
        validate_required(observations)
            .map_err(|message| AppError::validation("observations", message))?;
        let updated = self
            .submissions
            .add_seed_report(submission_id, SeedReport::new(date, observations))?;
        tracing::info!(submission_id, "seed report filed");
        Ok(updated)
    }

    /// Header figures: status counters plus filed report totals
    pub fn summary(&self) -> InspectorSummary {
        let submissions = self.submissions.list();
        InspectorSummary {
            statuses: summarize_submissions(&submissions),
            lab_reports: total_lab_reports(&submissions),
            seed_reports: total_seed_reports(&submissions),
        }
    }
}
