//! Authentication screens: login, signup, and password reset
//!
//! Identity here is nothing more than the stored profile. Login applies
//! a routing heuristic to the email text without checking credentials,
//! exactly as the system always behaved; signup at least hashes the
//! chosen password before the draft is persisted.

use std::sync::Arc;

use serde::Deserialize;
use validator::Validate;

use shared::models::UserProfile;
use shared::types::Role;
use shared::validation::validate_email;

use crate::error::{AppError, AppResult};
use crate::router::{route_for_login, Route};
use crate::services::check;
use crate::storage::{keys, LocalStore};

/// Authentication service
pub struct AuthService {
    store: Arc<LocalStore>,
    bcrypt_cost: u32,
}

/// Login form fields
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Signup form fields
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupInput {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub agree_to_terms: bool,
}

impl AuthService {
    pub fn new(store: Arc<LocalStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Validate the form and route by the email heuristic
    pub fn login(&self, input: LoginInput) -> AppResult<Route> {
        check(&input)?;
        let route = route_for_login(&input.email);
        tracing::info!(target_path = %route.path(), "login routed");
        Ok(route)
    }

    /// Register: hash the password, persist the signup draft, go to profile
    ///
    /// The draft lands under `tempUser`; the profile screen builds the
    /// real `userData` record on its first save.
    pub fn signup(&self, input: SignupInput) -> AppResult<Route> {
        check(&input)?;
        if !input.agree_to_terms {
            return Err(AppError::validation(
                "agreeToTerms",
                "Terms must be accepted",
            ));
        }

        let password_hash = bcrypt::hash(&input.password, self.bcrypt_cost)?;
        let draft = UserProfile {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone_number: input.phone_number,
            role: Role::Unset,
            password_hash: Some(password_hash),
            ..Default::default()
        };
        self.store.set(keys::TEMP_USER, &draft)?;
        tracing::info!(email = %draft.email, "signup draft stored");
        Ok(Route::Profile)
    }

    /// Acknowledge a password reset request
    ///
    /// Nothing is sent anywhere; the request is only validated and
    /// logged. The screen shows a confirmation regardless.
    pub fn request_password_reset(&self, email: &str) -> AppResult<()> {
        validate_email(email).map_err(|message| AppError::validation("email", message))?;
        tracing::info!(email, "password reset requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> (tempfile::TempDir, AuthService) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(LocalStore::open(dir.path()).unwrap());
        // Minimum cost keeps the hashing fast under test.
        (dir, AuthService::new(store, 4))
    }

    fn signup_input() -> SignupInput {
        SignupInput {
            first_name: "Alice".to_string(),
            last_name: "Kamara".to_string(),
            email: "alice@farmer.sl".to_string(),
            phone_number: "44123456".to_string(),
            password: "seedling-1".to_string(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn test_login_routes_by_email_without_credentials() {
        let (_dir, service) = service();
        let route = service
            .login(LoginInput {
                email: "alice@farmer.sl".to_string(),
                password: "whatever8".to_string(),
                remember_me: false,
            })
            .unwrap();
        assert_eq!(route, Route::FarmerDashboard);
    }

    #[test]
    fn test_login_rejects_short_password() {
        let (_dir, service) = service();
        let err = service
            .login(LoginInput {
                email: "alice@farmer.sl".to_string(),
                password: "short".to_string(),
                remember_me: false,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_signup_stores_hashed_draft() {
        let (_dir, service) = service();
        assert_eq!(service.signup(signup_input()).unwrap(), Route::Profile);

        let draft: UserProfile = service.store.get(keys::TEMP_USER).unwrap();
        assert_eq!(draft.role, Role::Unset);
        let hash = draft.password_hash.unwrap();
        assert_ne!(hash, "seedling-1");
        assert!(bcrypt::verify("seedling-1", &hash).unwrap());
    }

    #[test]
    fn test_signup_requires_terms() {
        let (_dir, service) = service();
        let mut input = signup_input();
        input.agree_to_terms = false;
        assert!(service.signup(input).is_err());
    }

    #[test]
    fn test_password_reset_validates_email() {
        let (_dir, service) = service();
        assert!(service.request_password_reset("alice@farmer.sl").is_ok());
        assert!(service.request_password_reset("not-an-email").is_err());
    }
}
