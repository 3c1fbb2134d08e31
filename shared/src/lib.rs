//! Shared types and models for the Digital Seed Certification System
//!
//! This crate contains the domain model shared between the workflow core
//! and any embedding UI shell: user profiles, certification applications,
//! seed submissions, and the validation helpers that guard them.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
