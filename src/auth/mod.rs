// OAuth2 client-credentials token lifecycle

mod manager;
mod token;

pub use manager::TokenManager;
pub use token::{AccessToken, TokenResponse};
