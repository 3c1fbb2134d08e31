//! Tracing setup for embedding shells
//!
//! The workflow core is a library; the hosting UI calls [`init`] once at
//! startup. Filtering follows `RUST_LOG` when set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed_certification_workflow=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
