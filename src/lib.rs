// Bolt Fleet Integration API client - Library root

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod fleet;
pub mod models;
pub mod query;

pub use config::{FleetConfig, SupabaseConfig};
pub use db::SupabaseClient;
pub use error::{Error, Result};
pub use fleet::FleetClient;
pub use models::{Driver, FleetOrder, FleetStateLog, PortalStatus, Vehicle};
pub use query::{DriversQuery, FleetOrdersQuery, FleetStateLogsQuery, VehiclesQuery};
