use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==================================================================================================
// Generic
// ==================================================================================================

/// Portal status filter applied to vehicle and driver queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortalStatus {
    Active,
    Inactive,
}

impl PortalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortalStatus::Active => "active",
            PortalStatus::Inactive => "inactive",
        }
    }
}

// ==================================================================================================
// Orders
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStop {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub real_lat: Option<f64>,
    pub real_lng: Option<f64>,
    #[serde(rename = "type")]
    pub stop_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPrice {
    pub booking_fee: Option<f64>,
    pub cancellation_fee: Option<f64>,
    pub cash_discount: Option<f64>,
    pub net_earnings: Option<f64>,
    pub tip: Option<f64>,
    pub commission: Option<f64>,
    pub in_app_discount: Option<f64>,
    pub toll_fee: Option<f64>,
    pub ride_price: Option<f64>,
}

/// A fleet order. The upstream API omits fields freely, so everything
/// is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetOrder {
    pub order_reference: Option<String>,
    pub driver_name: Option<String>,
    pub payment_method: Option<String>,
    pub driver_uuid: Option<String>,
    pub driver_phone: Option<String>,
    pub partner_uuid: Option<String>,
    pub payment_confirmed_timestamp: Option<i64>,
    pub order_created_timestamp: Option<i64>,
    pub order_status: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_license_plate: Option<String>,
    pub price_review_reason: Option<String>,
    pub pickup_address: Option<String>,
    pub ride_distance: Option<f64>,
    pub order_accepted_timestamp: Option<i64>,
    pub order_pickup_timestamp: Option<i64>,
    pub order_drop_off_timestamp: Option<i64>,
    pub order_finished_timestamp: Option<i64>,
    pub order_stops: Option<Vec<OrderStop>>,
    pub order_price: Option<OrderPrice>,
}

// ==================================================================================================
// Vehicles
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub model: String,
    pub year: i32,
    pub reg_number: String,
    pub uuid: Uuid,
    pub state: PortalStatus,
}

// ==================================================================================================
// Drivers
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub driver_uuid: Uuid,
    pub partner_uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub state: PortalStatus,
    pub has_cash_payment: bool,
}

// ==================================================================================================
// Fleet State Logs
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetStateLog {
    pub created: i64,
    pub state: String,
    pub driver_uuid: Uuid,
    pub vehicle_uuid: Uuid,
    pub lat: f64,
    pub lng: f64,
}

// ==================================================================================================
// Response Envelopes
// ==================================================================================================

// Every fleet endpoint wraps its collection as {"data": {"<name>": [...]}}.
// Both levels are tolerated as absent: an absent key decodes to empty.

#[derive(Debug, Deserialize, Default)]
pub struct FleetOrdersResponse {
    #[serde(default)]
    pub data: FleetOrdersData,
}

#[derive(Debug, Deserialize, Default)]
pub struct FleetOrdersData {
    #[serde(default)]
    pub orders: Vec<FleetOrder>,
}

#[derive(Debug, Deserialize, Default)]
pub struct VehiclesResponse {
    #[serde(default)]
    pub data: VehiclesData,
}

#[derive(Debug, Deserialize, Default)]
pub struct VehiclesData {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DriversResponse {
    #[serde(default)]
    pub data: DriversData,
}

#[derive(Debug, Deserialize, Default)]
pub struct DriversData {
    #[serde(default)]
    pub drivers: Vec<Driver>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FleetStateLogsResponse {
    #[serde(default)]
    pub data: FleetStateLogsData,
}

#[derive(Debug, Deserialize, Default)]
pub struct FleetStateLogsData {
    #[serde(default)]
    pub state_logs: Vec<FleetStateLog>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_portal_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PortalStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::from_str::<PortalStatus>("\"inactive\"").unwrap(),
            PortalStatus::Inactive
        );
        assert_eq!(PortalStatus::Active.as_str(), "active");
    }

    #[test]
    fn test_decode_vehicle() {
        let payload = json!({
            "id": 17,
            "model": "Toyota Corolla",
            "year": 2021,
            "reg_number": "ABC-123",
            "uuid": "9f3c5a6e-1b2d-4e5f-8a9b-0c1d2e3f4a5b",
            "state": "active"
        });

        let vehicle: Vehicle = serde_json::from_value(payload).unwrap();
        assert_eq!(vehicle.id, 17);
        assert_eq!(vehicle.state, PortalStatus::Active);
    }

    #[test]
    fn test_decode_order_with_sparse_fields() {
        let payload = json!({
            "order_reference": "ref-1",
            "order_status": "finished",
            "order_price": { "ride_price": 12.5 }
        });

        let order: FleetOrder = serde_json::from_value(payload).unwrap();
        assert_eq!(order.order_reference.as_deref(), Some("ref-1"));
        assert!(order.driver_name.is_none());
        assert_eq!(order.order_price.unwrap().ride_price, Some(12.5));
    }

    #[test]
    fn test_envelope_tolerates_missing_keys() {
        let empty: FleetOrdersResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.data.orders.is_empty());

        let no_collection: VehiclesResponse =
            serde_json::from_value(json!({ "data": {} })).unwrap();
        assert!(no_collection.data.vehicles.is_empty());
    }

    #[test]
    fn test_decode_state_log_envelope() {
        let payload = json!({
            "data": {
                "state_logs": [{
                    "created": 1700000000,
                    "state": "waiting_orders",
                    "driver_uuid": "9f3c5a6e-1b2d-4e5f-8a9b-0c1d2e3f4a5b",
                    "vehicle_uuid": "1a2b3c4d-5e6f-4a8b-9c0d-1e2f3a4b5c6d",
                    "lat": 59.437,
                    "lng": 24.7536
                }]
            }
        });

        let response: FleetStateLogsResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.data.state_logs.len(), 1);
        assert_eq!(response.data.state_logs[0].state, "waiting_orders");
    }
}
