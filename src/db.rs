// Supabase pass-through handle

use postgrest::Postgrest;

use crate::config::SupabaseConfig;
use crate::error::Result;

/// Pre-configured handle to the Supabase PostgREST endpoint.
/// All query behavior is delegated to the postgrest crate; this type only
/// owns the connection configuration.
pub struct SupabaseClient {
    inner: Postgrest,
}

impl SupabaseClient {
    /// Configure a handle against {url}/rest/v1 using the service role key.
    /// No connection is attempted at construction.
    pub fn new(config: SupabaseConfig) -> Self {
        let endpoint = format!("{}/rest/v1", config.url.trim_end_matches('/'));
        let inner = Postgrest::new(endpoint)
            .insert_header("apikey", &config.key)
            .insert_header("Authorization", format!("Bearer {}", config.key));

        tracing::info!("Supabase client initialized");
        Self { inner }
    }

    /// Create a handle from SUPABASE_URL and SUPABASE_KEY
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(SupabaseConfig::from_env()?))
    }

    /// Start a query against a table. The returned builder is the postgrest
    /// crate's own surface.
    pub fn table(&self, name: &str) -> postgrest::Builder {
        self.inner.from(name)
    }

    /// Access the underlying PostgREST client
    pub fn inner(&self) -> &Postgrest {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_from_env_missing_key_fails_fast() {
        std::env::set_var("SUPABASE_URL", "https://project.supabase.co");
        std::env::remove_var("SUPABASE_KEY");

        match SupabaseClient::from_env() {
            Err(Error::Config(message)) => assert!(message.contains("SUPABASE_KEY")),
            other => panic!("expected Config error, got {:?}", other.map(|_| ())),
        }

        std::env::remove_var("SUPABASE_URL");
    }

    #[test]
    fn test_construction_is_offline() {
        let client = SupabaseClient::new(SupabaseConfig {
            url: "https://project.supabase.co/".to_string(),
            key: "service-role-key".to_string(),
        });

        // Building a query must not perform I/O either
        let _ = client.table("orders").select("*");
    }
}
