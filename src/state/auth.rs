//! Auth-session store for the current admin user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single in-memory authority over the bearer credential, the identity
//! record, and the derived role. The route guard and user-aware views read
//! from it; every mutation is mirrored to durable storage before the mutating
//! call returns, so a reload immediately afterwards observes consistent
//! state.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on one logical thread; the interesting races are between
//! async continuations. Hydration is idempotent and safe to await redundantly
//! (the guard does exactly that on first navigation), and a profile refresh
//! re-checks the credential it was issued with before committing, so a logout
//! during the flight is never clobbered by the late response. Interior
//! borrows are never held across an await point.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::api::{ApiError, ProfileApi};
use crate::net::types::{AuthPayload, Role, User, UserProfile};
use crate::storage::{AUTH_TOKEN_KEY, KeyValueStorage, USER_DATA_KEY};

// =============================================================================
// STATE
// =============================================================================

/// Snapshot of the session state. Cheap to clone for UI consumption.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// False until the first hydration pass completes.
    pub initialized: bool,
    pub profile_loading: bool,
    pub profile_error: Option<ApiError>,
}

// =============================================================================
// STORE
// =============================================================================

/// Clonable handle over the shared session state and its collaborators.
///
/// Constructed explicitly with injectable storage and network seams — no
/// ambient global — so tests substitute in-memory fakes.
#[derive(Clone)]
pub struct AuthStore {
    state: Rc<RefCell<AuthState>>,
    storage: Rc<dyn KeyValueStorage>,
    api: Rc<dyn ProfileApi>,
}

impl AuthStore {
    #[must_use]
    pub fn new(storage: Rc<dyn KeyValueStorage>, api: Rc<dyn ProfileApi>) -> Self {
        Self { state: Rc::new(RefCell::new(AuthState::default())), storage, api }
    }

    // -------------------------------------------------------------------------
    // Derived reads
    // -------------------------------------------------------------------------

    /// A session is authenticated only when credential and identity are both
    /// present; a lone half is treated as unauthenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        let state = self.state.borrow();
        state.token.is_some() && state.user.is_some()
    }

    /// The typed role, `None` when no identity is held or its tag does not
    /// resolve to a member of the enumeration.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.state.borrow().user.as_ref().and_then(|u| Role::parse(&u.role))
    }

    /// The nested rider profile record, when present.
    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        self.state.borrow().user.as_ref().and_then(|u| u.user_profile.clone())
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.borrow().initialized
    }

    #[must_use]
    pub fn profile_loading(&self) -> bool {
        self.state.borrow().profile_loading
    }

    #[must_use]
    pub fn profile_error(&self) -> Option<ApiError> {
        self.state.borrow().profile_error.clone()
    }

    /// Full snapshot for UI layers that render several fields at once.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    // -------------------------------------------------------------------------
    // Hydration
    // -------------------------------------------------------------------------

    /// Reconstruct session state from durable storage.
    ///
    /// No credential: clears all state (repairing a lone persisted identity)
    /// and finishes. Credential present: adopts it, then validates any stored
    /// identity field-by-field — on any failure the identity record is
    /// discarded and removed from storage while the credential survives.
    /// Marks the session initialized unconditionally.
    ///
    /// Idempotent and safe to await redundantly or concurrently with
    /// navigation. Never triggers a network refresh; re-validation is left to
    /// callers. Storage read failures are swallowed and read as "absent".
    pub async fn load_from_storage(&self) {
        let stored_token = match self.storage.get(AUTH_TOKEN_KEY).await {
            Ok(token) => token,
            Err(err) => {
                log::warn!("credential read failed, treating as absent: {err}");
                None
            }
        };

        match stored_token {
            None => {
                log::debug!("no stored credential, starting unauthenticated");
                self.clear_all().await;
            }
            Some(token) => {
                self.state.borrow_mut().token = Some(token);

                let stored_user = match self.storage.get(USER_DATA_KEY).await {
                    Ok(user) => user,
                    Err(err) => {
                        log::warn!("identity read failed, treating as absent: {err}");
                        None
                    }
                };
                if let Some(raw) = stored_user {
                    match parse_stored_user(&raw) {
                        Ok(user) => self.set_user(Some(user)),
                        Err(err) => {
                            log::warn!("discarding stored identity: {err}");
                            self.set_user(None);
                            self.persist_user(None).await;
                        }
                    }
                }
            }
        }

        self.state.borrow_mut().initialized = true;
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adopt credential and identity from a login or registration response,
    /// persist both, and clear any prior refresh error.
    pub async fn login(&self, payload: AuthPayload) {
        {
            let mut state = self.state.borrow_mut();
            state.token = Some(payload.token.clone());
            state.profile_error = None;
        }
        self.set_user(Some(payload.user));
        log::debug!("login: session established, role {:?}", self.role());

        self.persist_token(Some(&payload.token)).await;
        let user = self.user();
        self.persist_user(user.as_ref()).await;
    }

    /// Clear credential, identity, and their persisted copies. Idempotent.
    pub async fn logout(&self) {
        log::debug!("logout: clearing session");
        self.clear_all().await;
    }

    /// Re-validate the identity against `GET /me` using the current
    /// credential.
    ///
    /// No-op without a credential. On success the identity is replaced and
    /// re-persisted — unless the credential changed while the request was in
    /// flight, in which case the stale response is dropped (a logout is the
    /// logical last writer). On failure the error is recorded; a 401 means
    /// the credential itself is invalid and tears down the whole session.
    /// The loading flag is cleared on every path before returning.
    pub async fn fetch_profile(&self) {
        let Some(token) = self.token() else {
            log::debug!("fetch_profile: no credential, skipping");
            return;
        };

        {
            let mut state = self.state.borrow_mut();
            state.profile_loading = true;
            state.profile_error = None;
        }

        match self.api.fetch_me(&token).await {
            Ok(user) => {
                if self.token().as_deref() == Some(token.as_str()) {
                    self.set_user(Some(user));
                    let user = self.user();
                    self.persist_user(user.as_ref()).await;
                } else {
                    log::debug!("fetch_profile: credential changed mid-flight, dropping response");
                }
            }
            Err(err) if err.is_unauthorized() => {
                log::warn!("fetch_profile: credential rejected ({err}), clearing session");
                self.clear_all().await;
            }
            Err(err) => {
                log::error!("fetch_profile failed: {err}");
                self.state.borrow_mut().profile_error = Some(err);
            }
        }

        self.state.borrow_mut().profile_loading = false;
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Adopt an identity, normalizing its role tag first. Unmapped tags
    /// collapse to `unknown` — the session never fabricates a role.
    fn set_user(&self, user: Option<User>) {
        let user = user.map(|mut u| {
            if Role::parse(&u.role).is_none() {
                log::warn!("unmapped role tag {:?}, treating as unknown", u.role);
            }
            u.role = Role::from_api(&u.role).as_str().to_owned();
            u
        });
        self.state.borrow_mut().user = user;
    }

    async fn clear_all(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.token = None;
            state.user = None;
            state.profile_error = None;
            state.profile_loading = false;
        }
        self.persist_token(None).await;
        self.persist_user(None).await;
    }

    /// Mirror the credential to storage. Write failures are logged, not
    /// surfaced: the persisted copy is a cache, not the source of truth.
    async fn persist_token(&self, token: Option<&str>) {
        let result = match token {
            Some(token) => self.storage.set(AUTH_TOKEN_KEY, token).await,
            None => self.storage.remove(AUTH_TOKEN_KEY).await,
        };
        if let Err(err) = result {
            log::warn!("credential persist failed: {err}");
        }
    }

    async fn persist_user(&self, user: Option<&User>) {
        let result = match user {
            Some(user) => match serde_json::to_string(user) {
                Ok(json) => self.storage.set(USER_DATA_KEY, &json).await,
                Err(err) => {
                    log::warn!("identity serialize failed: {err}");
                    return;
                }
            },
            None => self.storage.remove(USER_DATA_KEY).await,
        };
        if let Err(err) = result {
            log::warn!("identity persist failed: {err}");
        }
    }
}

// =============================================================================
// STORED IDENTITY VALIDATION
// =============================================================================

/// Why a persisted identity record was rejected during hydration.
#[derive(Debug, thiserror::Error)]
enum StoredUserError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("required field {0} missing or empty")]
    MissingField(&'static str),

    #[error("unrecognized role tag {0:?}")]
    InvalidRole(String),
}

/// Field-by-field validation of a persisted identity record. There is no
/// schema version on the record; any shape drift lands here and the record is
/// discarded wholesale.
fn parse_stored_user(raw: &str) -> Result<User, StoredUserError> {
    let user: User = serde_json::from_str(raw)?;

    let required: [(&'static str, &str); 5] = [
        ("id", &user.id),
        ("fullname", &user.fullname),
        ("email", &user.email),
        ("phone", &user.phone),
        ("verification_status", &user.verification_status),
    ];
    for (field, value) in required {
        if value.is_empty() {
            return Err(StoredUserError::MissingField(field));
        }
    }

    if Role::parse(&user.role).is_none() {
        return Err(StoredUserError::InvalidRole(user.role.clone()));
    }

    Ok(user)
}
