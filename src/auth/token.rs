// Token types

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Token lifetime assumed when the endpoint omits expires_in
const DEFAULT_LIFETIME_SECS: i64 = 3600;

/// OIDC token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
}

/// A bearer token with its absolute expiry instant
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub secret: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Build a token from the endpoint response, anchoring expiry at the
    /// issuance instant plus the server-reported lifetime
    pub fn from_response(response: &TokenResponse, issued_at: DateTime<Utc>) -> Self {
        let lifetime = response.expires_in.unwrap_or(DEFAULT_LIFETIME_SECS);
        Self {
            secret: response.access_token.clone(),
            expires_at: issued_at + Duration::seconds(lifetime),
        }
    }

    /// A token whose expiry instant equals the current instant is already
    /// expired. The skew moves the boundary earlier.
    pub fn is_expired(&self, now: DateTime<Utc>, skew: Duration) -> bool {
        self.expires_at - skew <= now
    }
}
