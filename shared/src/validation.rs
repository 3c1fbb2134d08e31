//! Validation utilities for the Digital Seed Certification System

use rust_decimal::Decimal;

use crate::models::CERTIFICATE_ID_PREFIX;

// ============================================================================
// Form Field Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength (minimum 8 characters, as the forms enforce)
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate a required text field is present after trimming
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Field is required");
    }
    Ok(())
}

/// Validate seed quantity in kilograms is positive
pub fn validate_quantity(quantity_kg: Decimal) -> Result<(), &'static str> {
    if quantity_kg <= Decimal::ZERO {
        return Err("Quantity must be greater than zero");
    }
    Ok(())
}

// ============================================================================
// Identifier Validations
// ============================================================================

/// Validate a certificate identifier has the derived `CERT-<n>` shape
///
/// Lookups accept any string; this helper exists for callers that want
/// to reject obviously malformed identifiers before hitting the store.
pub fn validate_certificate_id(id: &str) -> Result<(), &'static str> {
    let Some(sequence) = id.strip_prefix(CERTIFICATE_ID_PREFIX) else {
        return Err("Certificate id must start with 'CERT-'");
    };
    if sequence.is_empty() || !sequence.chars().all(|c| c.is_ascii_digit()) {
        return Err("Certificate id must end with a sequence number");
    }
    Ok(())
}

/// Validate an inspector license number (non-empty alphanumeric)
pub fn validate_license_number(license: &str) -> Result<(), &'static str> {
    if license.trim().is_empty() {
        return Err("License number is required");
    }
    if !license.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("License number must be alphanumeric");
    }
    Ok(())
}
