//! Session and profile management
//!
//! The stored profile is the whole notion of "being logged in": saving
//! it writes the single `userData` record, logging out removes it, and
//! every redirect decision re-reads it.

use std::sync::Arc;

use shared::models::UserProfile;
use shared::types::Role;

use crate::error::AppResult;
use crate::router::{route_after_profile_save, route_for_role_selection, RedirectState, Route};
use crate::storage::{keys, LocalStore};

/// Profile lifecycle over the local store
pub struct ProfileService {
    store: Arc<LocalStore>,
}

impl ProfileService {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    /// The stored profile, if any
    pub fn load(&self) -> Option<UserProfile> {
        self.store.get(keys::USER_DATA)
    }

    /// Current redirect state, re-evaluated from storage on every call
    pub fn redirect_state(&self) -> RedirectState {
        RedirectState::from_profile(self.load().as_ref())
    }

    /// Persist the profile form and return where to go next
    pub fn save(&self, profile: UserProfile) -> AppResult<Route> {
        let role = profile.role;
        self.store.set(keys::USER_DATA, &profile)?;
        tracing::info!(role = %role, "profile saved");
        Ok(route_after_profile_save(role))
    }

    /// Pick a role: mutate the stored profile and redirect accordingly
    ///
    /// Works from a blank profile too, so role selection before the
    /// first profile save still persists.
    pub fn select_role(&self, role: Role) -> AppResult<Route> {
        let mut profile = self.load().unwrap_or_default();
        profile.role = role;
        self.store.set(keys::USER_DATA, &profile)?;
        tracing::info!(role = %role, "role selected");
        Ok(route_for_role_selection(role))
    }

    /// Clear the stored profile and return to login
    pub fn logout(&self) -> AppResult<Route> {
        self.store.remove(keys::USER_DATA)?;
        tracing::info!("user logged out");
        Ok(Route::Login)
    }
}
