use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::auth::TokenManager;
use crate::config::FleetConfig;
use crate::error::{Error, Result};
use crate::models::fleet::{
    DriversResponse, FleetOrdersResponse, FleetStateLogsResponse, VehiclesResponse,
};
use crate::models::{Driver, FleetOrder, FleetStateLog, Vehicle};
use crate::query::{DriversQuery, FleetOrdersQuery, FleetStateLogsQuery, VehiclesQuery};

/// Client for the Bolt Fleet Integration API
/// Holds an OAuth2 bearer token, refreshes it lazily when expired, and issues
/// authenticated GET requests to the four fleet read endpoints.
pub struct FleetClient {
    /// Shared HTTP client with connection pooling
    http: Client,

    /// Base URL for resource endpoints, without trailing slash
    base_url: String,

    /// Token lifecycle manager
    tokens: TokenManager,
}

impl FleetClient {
    /// Create a client from an explicit configuration. Performs no network I/O.
    pub fn new(config: FleetConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        let base_url = config.api_url.trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            tokens: TokenManager::new(config),
        })
    }

    /// Create a client from the process environment
    pub fn from_env() -> Result<Self> {
        Self::new(FleetConfig::from_env()?)
    }

    /// Get fleet orders for the given companies within a time range
    pub async fn get_fleet_orders(&self, query: &FleetOrdersQuery) -> Result<Vec<FleetOrder>> {
        let response: FleetOrdersResponse = self.get("getFleetOrders", &query.to_pairs()).await?;
        Ok(response.data.orders)
    }

    /// Get vehicles for a company, filtered by portal status
    pub async fn get_vehicles(&self, query: &VehiclesQuery) -> Result<Vec<Vehicle>> {
        let response: VehiclesResponse = self.get("getVehicles", &query.to_pairs()).await?;
        Ok(response.data.vehicles)
    }

    /// Get drivers for a company, filtered by portal status
    pub async fn get_drivers(&self, query: &DriversQuery) -> Result<Vec<Driver>> {
        let response: DriversResponse = self.get("getDrivers", &query.to_pairs()).await?;
        Ok(response.data.drivers)
    }

    /// Get fleet state logs for a company within a time range
    pub async fn get_fleet_state_logs(
        &self,
        query: &FleetStateLogsQuery,
    ) -> Result<Vec<FleetStateLog>> {
        let response: FleetStateLogsResponse =
            self.get("getFleetStateLogs", &query.to_pairs()).await?;
        Ok(response.data.state_logs)
    }

    /// Issue one authenticated GET against a resource path. A valid token is
    /// ensured first, so a request is never sent with an expired token.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T> {
        let bearer = self.tokens.bearer(&self.http).await?;
        let url = format!("{}/{}", self.base_url, path);

        tracing::debug!(url = %url, "Sending fleet API request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&bearer)
            .query(pairs)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                url = %url,
                body = %body,
                "Fleet API request failed"
            );
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
