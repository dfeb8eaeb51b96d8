//! Wire types for the Pegasus availability API.
//!
//! Request and response shapes follow the mobile app's availability
//! endpoint. Response fields are all optional because the API omits
//! them freely (a date with no flights has no `cheapestFare`).

use serde::{Deserialize, Serialize};

/// One leg of an availability query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchLeg {
    pub arrival_port: String,
    pub departure_port: String,
    /// Date in `YYYY-MM-DD` form.
    pub departure_date: String,
}

/// Request body for the availability endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub flight_search_list: Vec<FlightSearchLeg>,
    pub date_option: u32,
    pub adult_count: u32,
    pub child_count: u32,
    pub infant_count: u32,
    pub soldier_count: u32,
    pub currency: String,
    pub operation_code: String,
    pub ff_redemption: bool,
    pub personnel_flight_search: bool,
}

impl AvailabilityRequest {
    /// A one-way, one-adult query for the given leg.
    pub fn single_adult(
        departure_port: &str,
        arrival_port: &str,
        departure_date: &str,
        currency: &str,
    ) -> Self {
        AvailabilityRequest {
            flight_search_list: vec![FlightSearchLeg {
                arrival_port: arrival_port.to_owned(),
                departure_port: departure_port.to_owned(),
                departure_date: departure_date.to_owned(),
            }],
            date_option: 1,
            adult_count: 1,
            child_count: 0,
            infant_count: 0,
            soldier_count: 0,
            currency: currency.to_owned(),
            operation_code: "TK".to_owned(),
            ff_redemption: false,
            personnel_flight_search: false,
        }
    }
}

/// Top-level availability response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub departure_route_list: Vec<RouteAvailability>,
}

/// Availability for one queried route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAvailability {
    #[serde(default)]
    pub daily_flight_list: Vec<DailyFlight>,
}

/// Cheapest-fare summary for one calendar date.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFlight {
    /// Date in `YYYY-MM-DD` form.
    pub date: Option<String>,
    pub cheapest_fare: Option<CheapestFare>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheapestFare {
    pub amount: Option<f64>,
    pub currency: Option<String>,
}
