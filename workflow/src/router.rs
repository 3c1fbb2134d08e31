//! Role-based navigation and redirect policy
//!
//! The entire redirect behavior of the system, collected into one
//! closed route enum and a handful of pure transition functions. The
//! UI shell asks these functions where to go; nothing here touches
//! storage or performs the navigation itself.

use shared::models::UserProfile;
use shared::types::Role;

/// Every navigable screen in the system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    ForgotPassword,
    Verification(Role),
    Profile,
    Agency,
    Inspector,
    Certificate(String),
    CertificationForm,
    /// Generic dashboard for buyer/distributor/unset roles. A navigation
    /// target only: it has no registered path, so resolving it falls
    /// through the wildcard back to login, as the system always has.
    Dashboard,
    /// Farmer landing after the login heuristic; also unregistered.
    FarmerDashboard,
}

impl Route {
    /// Path this route navigates to
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::Verification(role) => format!("/verification/{}", role.as_str()),
            Route::Profile => "/profile".to_string(),
            Route::Agency => "/agency".to_string(),
            Route::Inspector => "/inspector".to_string(),
            Route::Certificate(id) => format!("/certificate/{}", id),
            Route::CertificationForm => "/certification".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::FarmerDashboard => "/farmer/dashboard".to_string(),
        }
    }

    /// Resolve a path to its registered route
    ///
    /// Anything unregistered, including `/dashboard` and
    /// `/farmer/dashboard`, falls back to [`Route::Login`].
    pub fn resolve(path: &str) -> Route {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            [""] | ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["forgot-password"] => Route::ForgotPassword,
            ["verification", role] => Route::Verification(Role::parse_tag(role)),
            ["profile"] => Route::Profile,
            ["agency"] => Route::Agency,
            ["inspector"] => Route::Inspector,
            ["certificate", id] => Route::Certificate((*id).to_string()),
            ["certification"] => Route::CertificationForm,
            _ => Route::Login,
        }
    }
}

/// Where the current session stands, derived from the stored profile
///
/// Never persisted: re-entering the profile screen re-evaluates this
/// from the stored role each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectState {
    Unauthenticated,
    RoleUnset,
    Farmer,
    Inspector,
    Agency,
    Other,
}

impl RedirectState {
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        match profile {
            None => RedirectState::Unauthenticated,
            Some(profile) => match profile.role {
                Role::Farmer => RedirectState::Farmer,
                Role::Inspector => RedirectState::Inspector,
                Role::Agency => RedirectState::Agency,
                Role::Unset => RedirectState::RoleUnset,
                Role::Buyer | Role::Distributor => RedirectState::Other,
            },
        }
    }
}

/// Transition taken when a role is picked from the profile dropdown
///
/// The agency role skips verification outright and lands straight on
/// its dashboard; inspectors must pass through verification first. This
/// asymmetric trust policy is part of the system's behavior.
pub fn route_for_role_selection(role: Role) -> Route {
    match role {
        Role::Farmer => Route::CertificationForm,
        Role::Inspector => Route::Verification(Role::Inspector),
        Role::Agency => Route::Agency,
        Role::Buyer | Role::Distributor | Role::Unset => Route::Dashboard,
    }
}

/// Transition taken after saving the profile form
pub fn route_after_profile_save(role: Role) -> Route {
    match role {
        Role::Farmer => Route::CertificationForm,
        Role::Inspector => Route::Inspector,
        Role::Agency => Route::Agency,
        Role::Buyer | Role::Distributor | Role::Unset => Route::Dashboard,
    }
}

/// Login routing heuristic on the raw email text
///
/// No credential check backs this; an email matching none of the
/// patterns lands on the profile screen as the default state.
pub fn route_for_login(email: &str) -> Route {
    if email.contains("@farmer") {
        Route::FarmerDashboard
    } else if email.contains("@inspector") {
        Route::Inspector
    } else if email.contains("@agency") {
        Route::Agency
    } else {
        Route::Profile
    }
}

/// Entry policy for the verification screen
///
/// Agencies are forwarded to their dashboard before the form renders.
pub fn verification_entry(role: Role) -> Route {
    if role == Role::Agency {
        Route::Agency
    } else {
        Route::Verification(role)
    }
}

/// Transition after submitting a verification form, when one applies
pub fn route_after_verification_submit(role: Role) -> Option<Route> {
    match role {
        Role::Inspector => Some(Route::Inspector),
        _ => None,
    }
}

/// Policy for a certificate id that resolves to nothing
pub fn route_for_missing_certificate() -> Route {
    Route::Login
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_paths_round_trip() {
        for route in [
            Route::Login,
            Route::Signup,
            Route::ForgotPassword,
            Route::Verification(Role::Inspector),
            Route::Profile,
            Route::Agency,
            Route::Inspector,
            Route::Certificate("CERT-1".to_string()),
            Route::CertificationForm,
        ] {
            assert_eq!(Route::resolve(&route.path()), route);
        }
    }

    #[test]
    fn test_wildcard_falls_back_to_login() {
        assert_eq!(Route::resolve("/"), Route::Login);
        assert_eq!(Route::resolve("/no-such-screen"), Route::Login);
        assert_eq!(Route::resolve("/certificate/CERT-1/extra"), Route::Login);
    }

    #[test]
    fn test_dashboard_targets_are_unregistered() {
        assert_eq!(Route::resolve("/dashboard"), Route::Login);
        assert_eq!(Route::resolve("/farmer/dashboard"), Route::Login);
    }

    #[test]
    fn test_agency_selection_skips_verification() {
        assert_eq!(route_for_role_selection(Role::Agency), Route::Agency);
        assert_eq!(verification_entry(Role::Agency), Route::Agency);
    }

    #[test]
    fn test_inspector_selection_requires_verification() {
        assert_eq!(
            route_for_role_selection(Role::Inspector),
            Route::Verification(Role::Inspector)
        );
    }

    #[test]
    fn test_login_heuristic() {
        assert_eq!(route_for_login("alice@farmer.sl"), Route::FarmerDashboard);
        assert_eq!(route_for_login("kim@inspector.org"), Route::Inspector);
        assert_eq!(route_for_login("root@agency.gov"), Route::Agency);
        assert_eq!(route_for_login("someone@example.com"), Route::Profile);
    }

    #[test]
    fn test_redirect_state_follows_stored_role() {
        assert_eq!(
            RedirectState::from_profile(None),
            RedirectState::Unauthenticated
        );
        let mut profile = UserProfile::default();
        assert_eq!(
            RedirectState::from_profile(Some(&profile)),
            RedirectState::RoleUnset
        );
        profile.role = Role::Buyer;
        assert_eq!(
            RedirectState::from_profile(Some(&profile)),
            RedirectState::Other
        );
    }
}
