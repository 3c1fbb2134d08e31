//! Digital Seed Certification System - Workflow Engine
//!
//! Role-based certification workflow for farmers, inspectors, and
//! certification agencies: sequential certificate issuance over a
//! persisted application list, a shared seed submission register, and
//! the navigation policy that ties the screens together.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod repository;
pub mod router;
pub mod seed;
pub mod services;
pub mod session;
pub mod stats;
pub mod storage;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, AppResult};

use repository::{InMemorySubmissionRepository, LocalApplicationRepository};
use services::agency::AgencyService;
use services::auth::AuthService;
use services::certification::CertificationService;
use services::farmer::FarmerService;
use services::inspector::InspectorService;
use session::ProfileService;
use storage::LocalStore;

/// Application state shared across all role views
pub struct App {
    pub store: Arc<LocalStore>,
    pub config: Arc<Config>,
    pub profile: ProfileService,
    pub auth: AuthService,
    pub certification: CertificationService,
    pub farmer: FarmerService,
    pub inspector: InspectorService,
    pub agency: AgencyService,
}

impl App {
    /// Load configuration from the environment and wire the services
    pub fn bootstrap() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        telemetry::init();
        let config = Config::load()?;
        tracing::info!(environment = %config.environment, "starting seed certification workflow");
        Self::with_config(config)
    }

    /// Wire the services against an explicit configuration
    pub fn with_config(config: Config) -> AppResult<Self> {
        let config = Arc::new(config);
        let store = Arc::new(LocalStore::open(&config.storage.data_dir)?);

        let applications = Arc::new(LocalApplicationRepository::new(store.clone()));
        let submissions = Arc::new(InMemorySubmissionRepository::new(seed::sample_submissions()));

        Ok(Self {
            profile: ProfileService::new(store.clone()),
            auth: AuthService::new(store.clone(), config.auth.bcrypt_cost),
            certification: CertificationService::new(applications, store.clone()),
            farmer: FarmerService::new(submissions.clone()),
            inspector: InspectorService::new(submissions.clone()),
            agency: AgencyService::new(submissions, seed::sample_inspector_applications()),
            store,
            config,
        })
    }
}
