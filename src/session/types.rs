//! Persisted session credential.

use serde::{Deserialize, Serialize};

/// Storage key under which the credential is kept.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Opaque session token plus its expiry, stored as
/// `{ "token": "...", "expiresIn": <epoch seconds> }`.
///
/// The token is never validated against any server; only its presence and
/// expiry matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredential {
    /// Opaque token value. Never empty in a well-formed credential.
    pub token: String,
    /// Expiry instant in Unix epoch seconds.
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
}

impl SessionCredential {
    /// Parse a stored value. Returns `None` for anything malformed: invalid
    /// JSON, a missing field, or an empty token.
    pub fn parse(raw: &str) -> Option<Self> {
        let credential: Self = serde_json::from_str(raw).ok()?;
        if credential.token.trim().is_empty() {
            return None;
        }
        Some(credential)
    }

    /// Whether the credential is expired at `now` (epoch seconds). Expiry is
    /// inclusive: a credential expiring exactly now is expired.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_in
    }
}
