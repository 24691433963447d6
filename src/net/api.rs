//! Profile refresh against the admin API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Everywhere else the [`ProfileApi`] trait is the seam — tests and native
//! builds substitute their own implementation.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as [`ApiError`] values the session store records; a 401
//! is the one status with semantic weight (credential invalid).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::types::User;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Errors produced by profile refresh calls.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be interpreted as an identity record.
    #[error("response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// True when the failure means the credential itself was rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

// =============================================================================
// PROFILE API TRAIT
// =============================================================================

/// Async seam for the `GET /me` round trip. Enables mocking in tests and
/// swapping transports; futures are `?Send` because the crate targets a
/// single-threaded browser runtime.
#[async_trait::async_trait(?Send)]
pub trait ProfileApi {
    /// Fetch the identity record for the bearer of `token`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, a non-success status, or
    /// an unreadable body.
    async fn fetch_me(&self, token: &str) -> Result<User, ApiError>;
}

// =============================================================================
// RESPONSE NORMALIZATION
// =============================================================================

/// `/me` answers either `{ "user": {...} }` or the bare identity object
/// depending on deployment; both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MeResponse {
    Wrapped { user: User },
    Bare(User),
}

pub(crate) fn parse_me_response(body: &str) -> Result<User, ApiError> {
    let parsed: MeResponse =
        serde_json::from_str(body).map_err(|err| ApiError::Parse(err.to_string()))?;
    Ok(match parsed {
        MeResponse::Wrapped { user } | MeResponse::Bare(user) => user,
    })
}

// =============================================================================
// HTTP BACKEND (browser)
// =============================================================================

/// gloo-net backed [`ProfileApi`] hitting `{base_url}/me`.
#[cfg(feature = "hydrate")]
pub struct HttpProfileApi {
    base_url: String,
}

#[cfg(feature = "hydrate")]
impl HttpProfileApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl ProfileApi for HttpProfileApi {
    async fn fetch_me(&self, token: &str) -> Result<User, ApiError> {
        let url = format!("{}/me", self.base_url.trim_end_matches('/'));
        let resp = gloo_net::http::Request::get(&url)
            .header("Accept", "application/json")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let body = resp
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        parse_me_response(&body)
    }
}
