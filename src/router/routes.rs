//! Route metadata contract consumed by the navigation guard.
//!
//! Views themselves live elsewhere; this module carries only the facts the
//! guard decides on — path, title, auth requirement, and the optional role
//! whitelist — plus the application's static route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

/// Where unauthenticated visitors to protected destinations land.
pub const LOGIN_PATH: &str = "/signin";

/// Generic landing page for authenticated users.
pub const HOME_PATH: &str = "/";

/// Dedicated landing view for rider and super-admin accounts.
pub const RIDER_PROFILE_PATH: &str = "/rider/profile";

/// Pages that only make sense signed out; authenticated visitors are
/// forwarded to their role's landing page instead.
pub const PUBLIC_ONLY_PAGES: [&str; 4] =
    ["/signin", "/signup", "/password-reset", "/rider/signup"];

// =============================================================================
// ROUTE META
// =============================================================================

/// Per-destination metadata declared by the route table.
///
/// An undeclared auth requirement is permissive; the [`RouteMeta::protected`]
/// and [`RouteMeta::public`] constructors make the requirement explicit at
/// declaration sites.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteMeta {
    pub path: String,
    pub title: Option<String>,
    pub requires_auth: bool,
    /// When declared, only sessions whose role is in the list may enter.
    pub allowed_roles: Option<Vec<Role>>,
}

impl RouteMeta {
    /// A destination anyone may enter.
    #[must_use]
    pub fn public(path: impl Into<String>) -> Self {
        Self { path: path.into(), title: None, requires_auth: false, allowed_roles: None }
    }

    /// A destination requiring an authenticated session.
    #[must_use]
    pub fn protected(path: impl Into<String>) -> Self {
        Self { path: path.into(), title: None, requires_auth: true, allowed_roles: None }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_allowed_roles(mut self, roles: impl Into<Vec<Role>>) -> Self {
        self.allowed_roles = Some(roles.into());
        self
    }

    /// True for pages that only make sense signed out.
    #[must_use]
    pub fn is_public_only(&self) -> bool {
        PUBLIC_ONLY_PAGES.contains(&self.path.as_str())
    }
}

// =============================================================================
// ROUTE TABLE
// =============================================================================

/// The application's destinations and their guard-relevant metadata.
#[must_use]
pub fn app_routes() -> Vec<RouteMeta> {
    vec![
        RouteMeta::protected("/").with_title("Dashboard"),
        RouteMeta::protected("/calendar").with_title("Calendar"),
        RouteMeta::protected("/profile").with_title("Profile"),
        RouteMeta::protected("/riders").with_title("Riders"),
        RouteMeta::protected("/purchase").with_title("Purchase"),
        RouteMeta::protected("/admin/products").with_title("Product Management"),
        RouteMeta::protected("/admin/orders")
            .with_title("Order History")
            .with_allowed_roles([Role::Admin, Role::SuperAdmin]),
        RouteMeta::protected("/admin/registration-approval")
            .with_title("Registration Approval")
            .with_allowed_roles([Role::Admin, Role::SuperAdmin]),
        RouteMeta::protected("/admin/riders")
            .with_title("All Riders")
            .with_allowed_roles([Role::Admin, Role::SuperAdmin]),
        RouteMeta::protected("/rider/profile")
            .with_title("Rider Profile")
            .with_allowed_roles([Role::Rider, Role::SuperAdmin]),
        RouteMeta::protected("/admin/admins").with_title("Admin Management"),
        RouteMeta::protected("/super-admin/branches").with_title("Branch Overview"),
        RouteMeta::protected("/admin/analytics").with_title("System Analytics"),
        RouteMeta::protected("/admin/stats-reports").with_title("Stats & Reports"),
        RouteMeta::protected("/branch-admin").with_title("Branch Dashboard"),
        RouteMeta::protected("/branch-admin/orders").with_title("Order History"),
        RouteMeta::protected("/branch-admin/pending-approvals")
            .with_title("Pending Approvals")
            .with_allowed_roles([Role::Admin, Role::SuperAdmin]),
        RouteMeta::protected("/branch-admin/create-rider")
            .with_title("Create Rider")
            .with_allowed_roles([Role::Admin, Role::SuperAdmin]),
        RouteMeta::public("/signin").with_title("Signin"),
        RouteMeta::public("/signup").with_title("Signup"),
        RouteMeta::public("/password-reset").with_title("Reset Password"),
        RouteMeta::public("/rider/signup").with_title("Rider Signup"),
        RouteMeta::public("/home"),
        RouteMeta::public("/error-404").with_title("404 Error"),
    ]
}
