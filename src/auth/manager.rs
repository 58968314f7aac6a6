use chrono::Utc;
use reqwest::Client;
use tokio::sync::RwLock;

use crate::config::FleetConfig;
use crate::error::{Error, Result};

use super::token::{AccessToken, TokenResponse};

/// Scope requested in the client-credentials exchange
const TOKEN_SCOPE: &str = "fleet-integration:api";

/// Token manager
/// Owns the current access token and refreshes it lazily: an exchange is
/// performed only when a caller needs a token and none is held, or the held
/// token has passed its expiry instant.
pub struct TokenManager {
    config: FleetConfig,
    token: RwLock<Option<AccessToken>>,
}

impl TokenManager {
    pub fn new(config: FleetConfig) -> Self {
        Self {
            config,
            token: RwLock::new(None),
        }
    }

    /// Get a bearer secret valid at the time of the call, exchanging
    /// credentials first when needed. Refreshes are serialized behind the
    /// write lock with a re-check after acquisition, so concurrent callers
    /// trigger at most one exchange.
    pub async fn bearer(&self, client: &Client) -> Result<String> {
        let skew = self.config.token_refresh_skew;

        {
            let token = self.token.read().await;
            if let Some(ref held) = *token {
                if !held.is_expired(Utc::now(), skew) {
                    return Ok(held.secret.clone());
                }
            }
        }

        let mut token = self.token.write().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(ref held) = *token {
            if !held.is_expired(Utc::now(), skew) {
                return Ok(held.secret.clone());
            }
        }

        let fresh = self.exchange(client).await?;
        let secret = fresh.secret.clone();
        *token = Some(fresh);
        Ok(secret)
    }

    /// Perform the OAuth2 client-credentials exchange
    async fn exchange(&self, client: &Client) -> Result<AccessToken> {
        tracing::info!("Requesting new access token from Bolt OIDC");

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("scope", TOKEN_SCOPE),
        ];

        let issued_at = Utc::now();
        let response = client
            .post(&self.config.auth_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "Token exchange failed"
            );
            return Err(Error::Auth(format!(
                "token endpoint returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let data: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::Auth(format!("malformed token response: {}", e)))?;

        if data.access_token.is_empty() {
            return Err(Error::Auth(
                "token response contains no access token".to_string(),
            ));
        }

        let token = AccessToken::from_response(&data, issued_at);
        tracing::info!(
            expires_at = %token.expires_at.to_rfc3339(),
            "Obtained access token"
        );
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tokio_test::block_on;

    /// Manager whose token endpoint is unreachable: any exchange attempt
    /// surfaces as a transport error
    fn manager_with_token(token: Option<AccessToken>) -> TokenManager {
        let mut config = FleetConfig::new("id", "secret", "http://127.0.0.1:1");
        config.auth_url = "http://127.0.0.1:1/token".to_string();

        TokenManager {
            config,
            token: RwLock::new(token),
        }
    }

    #[test]
    fn test_unexpired_token_is_returned_without_exchange() {
        let manager = manager_with_token(Some(AccessToken {
            secret: "held-token".to_string(),
            expires_at: Utc::now() + Duration::seconds(600),
        }));

        let bearer = block_on(manager.bearer(&Client::new())).unwrap();
        assert_eq!(bearer, "held-token");
    }

    #[test]
    fn test_expired_token_forces_exchange() {
        let manager = manager_with_token(Some(AccessToken {
            secret: "stale-token".to_string(),
            expires_at: Utc::now(),
        }));

        let err = block_on(manager.bearer(&Client::new())).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn test_absent_token_forces_exchange() {
        let manager = manager_with_token(None);

        let err = block_on(manager.bearer(&Client::new())).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
