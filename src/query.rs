// Query parameter types for the fleet read endpoints.
// Pair order is fixed so identical calls produce identical request lines.

use chrono::{Duration, Utc};

use crate::models::PortalStatus;

/// Resolve an optional time range to concrete bounds. Missing bounds default
/// to the last 24 hours (start) and now (end). An inverted range is forwarded
/// to the server as-is.
fn resolve_window(start_ts: Option<i64>, end_ts: Option<i64>) -> (i64, i64) {
    let now = Utc::now();
    let start = start_ts.unwrap_or_else(|| (now - Duration::days(1)).timestamp());
    let end = end_ts.unwrap_or_else(|| now.timestamp());
    (start, end)
}

/// Parameters for get_fleet_orders
#[derive(Debug, Clone)]
pub struct FleetOrdersQuery {
    pub offset: u32,
    pub limit: u32,
    pub company_ids: Vec<i64>,
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
}

impl FleetOrdersQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let (start_ts, end_ts) = resolve_window(self.start_ts, self.end_ts);
        let company_ids = self
            .company_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        vec![
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
            ("company_ids", company_ids),
            ("start_ts", start_ts.to_string()),
            ("end_ts", end_ts.to_string()),
            // Orders are windowed on their price-review timestamp upstream
            ("time_range_filter_type", "price_review".to_string()),
        ]
    }
}

/// Parameters for get_vehicles
#[derive(Debug, Clone)]
pub struct VehiclesQuery {
    pub offset: u32,
    pub limit: u32,
    pub company_id: i64,
    pub portal_status: PortalStatus,
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
}

impl VehiclesQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        company_scoped_pairs(
            self.offset,
            self.limit,
            self.company_id,
            Some(self.portal_status),
            self.start_ts,
            self.end_ts,
        )
    }
}

/// Parameters for get_drivers
#[derive(Debug, Clone)]
pub struct DriversQuery {
    pub offset: u32,
    pub limit: u32,
    pub company_id: i64,
    pub portal_status: PortalStatus,
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
}

impl DriversQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        company_scoped_pairs(
            self.offset,
            self.limit,
            self.company_id,
            Some(self.portal_status),
            self.start_ts,
            self.end_ts,
        )
    }
}

/// Parameters for get_fleet_state_logs
#[derive(Debug, Clone)]
pub struct FleetStateLogsQuery {
    pub offset: u32,
    pub limit: u32,
    pub company_id: i64,
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
}

impl FleetStateLogsQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        company_scoped_pairs(
            self.offset,
            self.limit,
            self.company_id,
            None,
            self.start_ts,
            self.end_ts,
        )
    }
}

fn company_scoped_pairs(
    offset: u32,
    limit: u32,
    company_id: i64,
    portal_status: Option<PortalStatus>,
    start_ts: Option<i64>,
    end_ts: Option<i64>,
) -> Vec<(&'static str, String)> {
    let (start_ts, end_ts) = resolve_window(start_ts, end_ts);

    let mut pairs = vec![
        ("offset", offset.to_string()),
        ("limit", limit.to_string()),
        ("company_id", company_id.to_string()),
    ];
    if let Some(status) = portal_status {
        pairs.push(("portal_status", status.as_str().to_string()));
    }
    pairs.push(("start_ts", start_ts.to_string()));
    pairs.push(("end_ts", end_ts.to_string()));
    pairs
}
