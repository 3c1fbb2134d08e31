//! Certification form and certificate viewer
//!
//! Submitting the form appends to the persisted application list and
//! navigates straight to the issued certificate. Viewing an unknown
//! certificate redirects to login rather than erroring, preserving the
//! system's handling of stale links.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use shared::models::{CertificationApplication, NewApplication, UserProfile};
use shared::validation::validate_quantity;

use crate::error::{AppError, AppResult};
use crate::repository::ApplicationRepository;
use crate::router::Route;
use crate::services::check;
use crate::storage::{keys, LocalStore};

/// Certification application workflow
pub struct CertificationService {
    repo: Arc<dyn ApplicationRepository>,
    store: Arc<LocalStore>,
}

/// Certification form fields
///
/// `farmer_name` is optional: when absent the stored profile's full
/// name is used, matching the form's prefill.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInput {
    #[serde(default)]
    pub farmer_name: Option<String>,
    #[validate(length(min = 1, message = "Seed type is required"))]
    pub seed_type: String,
    pub quantity_kg: Decimal,
    #[validate(length(min = 1, message = "Farm location is required"))]
    pub farm_location: String,
    pub planting_date: NaiveDate,
    #[validate(length(min = 1, message = "Seed source is required"))]
    pub seed_source: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of a successful form submission
#[derive(Debug)]
pub struct SubmittedApplication {
    pub application: CertificationApplication,
    /// Where the form navigates next: the issued certificate
    pub next: Route,
}

/// Outcome of resolving a certificate id
#[derive(Debug)]
pub enum CertificateView {
    Found(CertificationApplication),
    /// Unknown id; the viewer redirects instead of showing an error
    RedirectToLogin,
}

impl CertificationService {
    pub fn new(repo: Arc<dyn ApplicationRepository>, store: Arc<LocalStore>) -> Self {
        Self { repo, store }
    }

    /// Validate, append, and navigate to the issued certificate
    pub fn submit(&self, input: ApplicationInput) -> AppResult<SubmittedApplication> {
        check(&input)?;
        validate_quantity(input.quantity_kg)
            .map_err(|message| AppError::validation("quantityKg", message))?;

        let farmer_name = match input.farmer_name.filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => self
                .store
                .get::<UserProfile>(keys::USER_DATA)
                .and_then(|profile| profile.full_name())
                .ok_or_else(|| AppError::validation("farmerName", "Farmer name is required"))?,
        };

        let application = self.repo.append(NewApplication {
            farmer_name,
            seed_type: input.seed_type,
            quantity_kg: input.quantity_kg,
            farm_location: input.farm_location,
            planting_date: input.planting_date,
            seed_source: input.seed_source,
            description: input.description,
        })?;

        let next = Route::Certificate(application.certificate_id.clone());
        Ok(SubmittedApplication { application, next })
    }

    /// Resolve a certificate id for display
    pub fn view(&self, certificate_id: &str) -> AppResult<CertificateView> {
        match self.repo.find_by_certificate_id(certificate_id) {
            Ok(application) => Ok(CertificateView::Found(application)),
            Err(err) if err.is_not_found() => {
                tracing::warn!(certificate_id, "unknown certificate, redirecting to login");
                Ok(CertificateView::RedirectToLogin)
            }
            Err(err) => Err(err),
        }
    }

    /// All applications, in submission order
    pub fn list(&self) -> Vec<CertificationApplication> {
        self.repo.list()
    }
}
