//! Per-role services of the certification workflow

pub mod agency;
pub mod auth;
pub mod certification;
pub mod farmer;
pub mod inspector;

use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run derive-based validation and surface the first failing field
pub(crate) fn check(input: &impl Validate) -> AppResult<()> {
    input.validate().map_err(|errors| {
        let (field, field_errors) = match errors.field_errors().into_iter().next() {
            Some(entry) => entry,
            None => return AppError::validation("input", "invalid input"),
        };
        let message = field_errors
            .first()
            .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| format!("invalid value for {field}"));
        AppError::validation(field, message)
    })
}
