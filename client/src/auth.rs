//! Authentication types for the cinema backend
//!
//! The backend issues one bearer token at sign-in; it is the only piece
//! of durable client state. Verify and sign-out carry it in an
//! `Authorization: Bearer` header, everything else goes unauthenticated.

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A bearer token issued by the sign-in endpoint
///
/// `Debug` is redacted so tokens never leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates an `AccessToken` from its raw string form
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for header construction or persistence
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// The signed-in user's identity as reported by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-issued identifier
    pub id: UserId,
    /// Account email
    pub email: String,
}

/// A fully established session: the token plus who it belongs to
///
/// Produced by a successful sign-in; the token goes to persistent
/// storage while the profile feeds session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    /// Bearer token to persist and attach to authenticated calls
    pub token: AccessToken,
    /// Profile of the signed-in user
    pub user: UserProfile,
}

/// Body for `POST /api/auth/sign-in`
#[derive(Clone, Debug, Serialize)]
pub struct SignInRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Body for `POST /api/auth/sign-up`
#[derive(Clone, Debug, Serialize)]
pub struct SignUpRequest {
    /// Full display name
    pub full_name: String,
    /// Account email
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Account password
    pub password: String,
}

/// Response from `GET /api/auth/verify-token`
#[derive(Clone, Debug, Deserialize)]
pub struct VerifyResponse {
    /// Whether the token is still valid
    pub success: bool,
    /// The token's owner, present on success
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Response from `POST /api/auth/sign-in`
#[derive(Clone, Debug, Deserialize)]
pub struct SignInResponse {
    /// Whether the credentials were accepted
    pub success: bool,
    /// Bearer token, present on success
    #[serde(default)]
    pub access_token: Option<AccessToken>,
    /// Profile of the signed-in user, present on success
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Human-readable outcome message
    #[serde(default)]
    pub message: Option<String>,
}

/// Response from `POST /api/auth/sign-up`
///
/// Sign-up has no `success` field; the HTTP status is the signal and
/// the body only carries a confirmation message.
#[derive(Clone, Debug, Deserialize)]
pub struct SignUpResponse {
    /// Human-readable confirmation message
    #[serde(default)]
    pub message: Option<String>,
}
