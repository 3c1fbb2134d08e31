//! Agency dashboard: inspector application review and seed monitoring

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::models::{ApplicationStatus, InspectorApplication, SeedSubmission};
use shared::validation::validate_license_number;

use crate::error::{AppError, AppResult};
use crate::repository::SubmissionRepository;
use crate::services::check;
use crate::stats::{summarize_inspector_applications, summarize_submissions};

/// Agency view: inspector applications plus the shared seed register
///
/// The application register is memory-only and seeded at bootstrap, as
/// the dashboard it replaces held its review list in component state.
pub struct AgencyService {
    submissions: Arc<dyn SubmissionRepository>,
    applications: Mutex<Vec<InspectorApplication>>,
}

/// Status filter for the application review list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl ApplicationFilter {
    fn admits(self, status: ApplicationStatus) -> bool {
        match self {
            ApplicationFilter::All => true,
            ApplicationFilter::Pending => status == ApplicationStatus::Pending,
            ApplicationFilter::Approved => status == ApplicationStatus::Approved,
            ApplicationFilter::Rejected => status == ApplicationStatus::Rejected,
        }
    }
}

/// Verification form fields for a would-be inspector
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerificationInput {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Organization is required"))]
    pub organization: String,
    pub license_number: String,
    #[serde(default)]
    pub years_of_experience: Option<u8>,
    #[serde(default)]
    pub certifications: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Header counters for the agency dashboard
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AgencySummary {
    pub pending_applications: usize,
    pub monitored_seeds: usize,
    pub approved_seeds: usize,
    /// Donut chart figure; `None` when nothing has been reviewed yet
    pub approval_percentage: Option<u8>,
}

impl AgencyService {
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        applications: Vec<InspectorApplication>,
    ) -> Self {
        Self {
            submissions,
            applications: Mutex::new(applications),
        }
    }

    /// File a verification form as a pending application
    pub fn submit_application(&self, input: VerificationInput) -> AppResult<InspectorApplication> {
        check(&input)?;
        validate_license_number(&input.license_number)
            .map_err(|message| AppError::validation("licenseNumber", message))?;

        let mut applications = self.applications.lock().unwrap_or_else(|e| e.into_inner());
        let application = InspectorApplication {
            id: applications.iter().map(|a| a.id).max().unwrap_or(0) + 1,
            full_name: input.full_name,
            organization: input.organization,
            license_number: input.license_number,
            years_of_experience: input.years_of_experience,
            certifications: input.certifications,
            address: input.address,
            description: input.description,
            status: ApplicationStatus::Pending,
        };
        applications.push(application.clone());
        tracing::info!(id = application.id, "inspector application filed");
        Ok(application)
    }

    /// Applications matching the filter and search term
    pub fn applications(&self, filter: ApplicationFilter, term: &str) -> Vec<InspectorApplication> {
        self.applications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|app| filter.admits(app.status) && app.matches(term))
            .cloned()
            .collect()
    }

    pub fn approve_application(&self, id: u32) -> AppResult<InspectorApplication> {
        self.set_application_status(id, ApplicationStatus::Approved)
    }

    pub fn reject_application(&self, id: u32) -> AppResult<InspectorApplication> {
        self.set_application_status(id, ApplicationStatus::Rejected)
    }

    fn set_application_status(
        &self,
        id: u32,
        status: ApplicationStatus,
    ) -> AppResult<InspectorApplication> {
        // Review decisions mutate in place; no transition rules apply.
        let mut applications = self.applications.lock().unwrap_or_else(|e| e.into_inner());
        let application = applications
            .iter_mut()
            .find(|app| app.id == id)
            .ok_or_else(|| AppError::NotFound("Inspector application".to_string()))?;
        application.status = status;
        tracing::info!(id, status = %status, "inspector application reviewed");
        Ok(application.clone())
    }

    /// Monitored seed submissions matching a search term
    ///
    /// Matches farmer name and seed type, case-insensitively; an empty
    /// term returns everything.
    pub fn monitor_seeds(&self, term: &str) -> Vec<SeedSubmission> {
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
            })
            .collect()
    }

    /// Submissions carrying an issued certificate
    pub fn certificates(&self) -> Vec<SeedSubmission> {
        self.submissions
            .list()
            .into_iter()
            .filter(SeedSubmission::is_certified)
            .collect()
    }

    /// Header counters and the approval donut figure
    pub fn summary(&self) -> AgencySummary {
        let submissions = self.submissions.list();
        let submission_stats = summarize_submissions(&submissions);
        let application_stats = summarize_inspector_applications(
            self.applications
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .iter(),
        );
        AgencySummary {
            pending_applications: application_stats.pending,
            monitored_seeds: submission_stats.total,
            approved_seeds: submission_stats.approved,
            approval_percentage: submission_stats.approval_percentage(),
        }
    }
}
