//! Navigation guard deciding allow/redirect per attempted transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! Invoked once before each destination commits. Bootstrap starts hydration
//! and the first navigation can fire before it completes; awaiting hydration
//! here is what prevents a false unauthenticated redirect on deep-link or
//! refresh. The guard itself never fails — a broken hydration simply reads as
//! "not authenticated" and protected destinations bounce to the login page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::auth::AuthStore;
use crate::util::title::{APP_NAME, set_document_title};

use super::routes::{HOME_PATH, LOGIN_PATH, RIDER_PROFILE_PATH, RouteMeta};

// =============================================================================
// DECISION
// =============================================================================

/// Outcome of a guard pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Commit the attempted destination.
    Allow,
    /// Navigate to this path instead.
    Redirect(&'static str),
}

/// The decision table, kept pure for unit testing.
///
/// Protected destinations require an authenticated session, then an optional
/// role whitelist; a missing or unrecognized role never passes a declared
/// whitelist. Public-only pages bounce authenticated visitors to their
/// role's landing page.
#[must_use]
pub fn decide(authenticated: bool, role: Option<Role>, to: &RouteMeta) -> RouteDecision {
    if to.requires_auth {
        if !authenticated {
            return RouteDecision::Redirect(LOGIN_PATH);
        }
        if let Some(allowed) = &to.allowed_roles {
            let permitted = role.is_some_and(|role| allowed.contains(&role));
            if !permitted {
                return RouteDecision::Redirect(HOME_PATH);
            }
        }
        RouteDecision::Allow
    } else if authenticated && to.is_public_only() {
        let landing = match role {
            Some(Role::Rider | Role::SuperAdmin) => RIDER_PROFILE_PATH,
            _ => HOME_PATH,
        };
        RouteDecision::Redirect(landing)
    } else {
        RouteDecision::Allow
    }
}

/// Title shown for a destination: `"GasoPay | {title}"`, or the bare
/// application name when the route declares none.
#[must_use]
pub fn document_title(to: &RouteMeta) -> String {
    match &to.title {
        Some(title) => format!("{APP_NAME} | {title}"),
        None => APP_NAME.to_owned(),
    }
}

// =============================================================================
// GUARD
// =============================================================================

/// Per-navigation interception point over a shared [`AuthStore`].
#[derive(Clone)]
pub struct RouteGuard {
    store: AuthStore,
}

impl RouteGuard {
    #[must_use]
    pub fn new(store: AuthStore) -> Self {
        Self { store }
    }

    /// Decide whether the attempted transition may commit.
    ///
    /// Awaits hydration first when the session is not yet initialized, then
    /// applies the decision table. Also sets the document title from the
    /// destination's metadata. Infallible: hydration problems degrade to an
    /// unauthenticated decision.
    pub async fn authorize(&self, to: &RouteMeta) -> RouteDecision {
        if !self.store.is_initialized() {
            self.store.load_from_storage().await;
        }

        set_document_title(&document_title(to));

        let decision = decide(self.store.is_authenticated(), self.store.role(), to);
        log::debug!("guard: {} -> {:?}", to.path, decision);
        decision
    }
}

// =============================================================================
// BROWSER INTEGRATION
// =============================================================================

/// Run the guard for a destination and apply any redirect through a
/// router-provided navigate closure.
#[cfg(feature = "hydrate")]
pub fn install_guard<F>(guard: RouteGuard, to: RouteMeta, navigate: F)
where
    F: Fn(&str, leptos_router::NavigateOptions) + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        if let RouteDecision::Redirect(target) = guard.authorize(&to).await {
            navigate(target, leptos_router::NavigateOptions::default());
        }
    });
}
