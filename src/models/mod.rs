pub mod fleet;

pub use fleet::{
    Driver, FleetOrder, FleetStateLog, OrderPrice, OrderStop, PortalStatus, Vehicle,
};
