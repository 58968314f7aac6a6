use chrono::Duration;
use std::time::Duration as StdDuration;

use crate::error::{Error, Result};

/// Token endpoint used when BOLT_OIDC_URL is not set
const DEFAULT_AUTH_URL: &str = "https://oidc.bolt.eu/token";

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Configuration for the fleet API client.
/// Immutable once the client is constructed.
#[derive(Clone, Debug)]
pub struct FleetConfig {
    /// OAuth client ID for the client-credentials grant
    pub client_id: String,

    /// OAuth client secret for the client-credentials grant
    pub client_secret: String,

    /// Base URL for the fleet API resource endpoints
    pub api_url: String,

    /// OIDC token endpoint URL
    pub auth_url: String,

    /// Refresh this long before the literal expiry instant.
    /// Zero by default: a token is expired exactly when its expiry
    /// instant is at or before the current time.
    pub token_refresh_skew: Duration,

    /// HTTP request timeout for both endpoints
    pub request_timeout: StdDuration,
}

impl FleetConfig {
    /// Build a configuration with default auth URL, skew and timeout
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_url: api_url.into(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_refresh_skew: Duration::zero(),
            request_timeout: StdDuration::from_secs(DEFAULT_REQUEST_TIMEOUT),
        }
    }

    /// Load configuration from the process environment.
    /// Reads BOLT_CLIENT_ID, BOLT_CLIENT_SECRET and BOLT_API_URL (required),
    /// plus optional BOLT_OIDC_URL and BOLT_TOKEN_REFRESH_SKEW (seconds).
    /// No network I/O is performed.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let client_id = require_env("BOLT_CLIENT_ID")?;
        let client_secret = require_env("BOLT_CLIENT_SECRET")?;
        let api_url = require_env("BOLT_API_URL")?;

        let auth_url = std::env::var("BOLT_OIDC_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUTH_URL.to_string());

        let token_refresh_skew = std::env::var("BOLT_TOKEN_REFRESH_SKEW")
            .map(|s| parse_refresh_skew(&s))
            .unwrap_or_else(|_| Duration::zero());

        let request_timeout = std::env::var("BOLT_REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(StdDuration::from_secs)
            .unwrap_or(StdDuration::from_secs(DEFAULT_REQUEST_TIMEOUT));

        Ok(Self {
            client_id,
            client_secret,
            api_url,
            auth_url,
            token_refresh_skew,
            request_timeout,
        })
    }
}

/// Configuration for the Supabase handle.
#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    /// Project URL (https://<project>.supabase.co)
    pub url: String,

    /// Service role key
    pub key: String,
}

impl SupabaseConfig {
    /// Load configuration from SUPABASE_URL and SUPABASE_KEY
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            url: require_env("SUPABASE_URL")?,
            key: require_env("SUPABASE_KEY")?,
        })
    }
}

/// Parse the refresh skew. A negative skew would move the expiry boundary
/// later and let an already-expired token be reused, so anything that is not
/// a non-negative number of seconds falls back to zero.
fn parse_refresh_skew(value: &str) -> Duration {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|seconds| *seconds >= 0)
        .map(Duration::seconds)
        .unwrap_or_else(Duration::zero)
}

/// Read a required environment variable, rejecting empty values
fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} is required", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_missing() {
        std::env::remove_var("BOLT_TEST_MISSING_VAR");
        let err = require_env("BOLT_TEST_MISSING_VAR").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: BOLT_TEST_MISSING_VAR is required"
        );
    }

    #[test]
    fn test_require_env_empty_rejected() {
        std::env::set_var("BOLT_TEST_EMPTY_VAR", "   ");
        assert!(require_env("BOLT_TEST_EMPTY_VAR").is_err());
        std::env::remove_var("BOLT_TEST_EMPTY_VAR");
    }

    #[test]
    fn test_require_env_present() {
        std::env::set_var("BOLT_TEST_PRESENT_VAR", "value");
        assert_eq!(require_env("BOLT_TEST_PRESENT_VAR").unwrap(), "value");
        std::env::remove_var("BOLT_TEST_PRESENT_VAR");
    }

    #[test]
    fn test_parse_refresh_skew() {
        assert_eq!(parse_refresh_skew("60"), Duration::seconds(60));
        assert_eq!(parse_refresh_skew("0"), Duration::zero());
        assert_eq!(parse_refresh_skew(" 300 "), Duration::seconds(300));
    }

    #[test]
    fn test_parse_refresh_skew_rejects_negative_and_garbage() {
        assert_eq!(parse_refresh_skew("-5"), Duration::zero());
        assert_eq!(parse_refresh_skew("abc"), Duration::zero());
        assert_eq!(parse_refresh_skew(""), Duration::zero());
    }

    #[test]
    fn test_new_applies_defaults() {
        let config = FleetConfig::new("id", "secret", "https://api.example.com");
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
        assert_eq!(config.token_refresh_skew, Duration::zero());
        assert_eq!(
            config.request_timeout,
            StdDuration::from_secs(DEFAULT_REQUEST_TIMEOUT)
        );
    }
}
