// Error handling module
// Defines the error taxonomy surfaced by both clients

use thiserror::Error;

/// Errors that can occur while constructing or using the clients
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment configuration, raised at construction
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token exchange against the OIDC endpoint failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Resource endpoint returned a non-success status
    #[error("Bolt API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Network-level failure reaching either endpoint
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;
