//! Wire types for the admin API and the role enumeration.
//!
//! DESIGN
//! ======
//! Responses are normalized at this boundary: deployments disagree on the
//! credential field name (`token` vs `access_token`) and on whether `/me`
//! wraps the identity object, so serde does the reconciliation here and the
//! rest of the crate only ever sees the canonical shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// ROLE
// =============================================================================

/// Coarse-grained permission tag gating route access.
///
/// The set is closed: any role tag outside it collapses to [`Role::Unknown`],
/// never to a guessed member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    Admin,
    Rider,
    User,
    Unknown,
}

impl Role {
    /// Exact-match lookup of an API role tag. Returns `None` for any string
    /// outside the enumeration, including case or separator variants.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "super_admin" => Some(Self::SuperAdmin),
            "admin" => Some(Self::Admin),
            "rider" => Some(Self::Rider),
            "user" => Some(Self::User),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Map an API role tag to a member, collapsing unmapped tags to
    /// [`Role::Unknown`].
    #[must_use]
    pub fn from_api(tag: &str) -> Self {
        Self::parse(tag).unwrap_or(Self::Unknown)
    }

    /// The canonical tag for this member, the inverse of [`Role::parse`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Rider => "rider",
            Self::User => "user",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// IDENTITY
// =============================================================================

/// The authenticated actor's profile data as known to the client.
///
/// `role` stays a raw tag on the wire type; the session normalizes it on
/// adoption and exposes the typed [`Role`] as a derived read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub verification_status: String,
    #[serde(default)]
    pub branch_id: Option<i64>,
    #[serde(default)]
    pub branch: Option<Branch>,
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
    #[serde(default)]
    pub balance: Option<String>,
    #[serde(default)]
    pub banned_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Branch association carried on branch-scoped accounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub branch_phone: Option<String>,
}

/// Nested rider profile record. Every field is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub nin: Option<String>,
    #[serde(default)]
    pub guarantors_name: Option<String>,
    #[serde(default)]
    pub guarantors_phone: Option<String>,
    #[serde(default)]
    pub guarantors_address: Option<String>,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub total_pickups: Option<u32>,
    #[serde(default)]
    pub current_debt: Option<f64>,
}

// =============================================================================
// AUTH PAYLOAD
// =============================================================================

/// Normalized login/registration response.
///
/// The login endpoint issues the credential as `token`, the rider
/// registration endpoint as `access_token`; the serde alias accepts either so
/// the session store sees one shape.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthPayload {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}
