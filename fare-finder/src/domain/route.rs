//! Directed route between two airports.

use std::fmt;

use super::airport::AirportCode;

/// One direction of travel: a departure airport and an arrival airport.
///
/// A round trip is searched as two routes, the outbound route and its
/// reversal.
///
/// # Examples
///
/// ```
/// use fare_finder::domain::{AirportCode, Route};
///
/// let ist = AirportCode::parse("IST").unwrap();
/// let lwo = AirportCode::parse("LWO").unwrap();
///
/// let outbound = Route::new(ist, lwo);
/// assert_eq!(outbound.to_string(), "IST->LWO");
/// assert_eq!(outbound.reversed().to_string(), "LWO->IST");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    /// Airport the leg departs from.
    pub departure: AirportCode,

    /// Airport the leg arrives at.
    pub arrival: AirportCode,
}

impl Route {
    /// Create a route from departure to arrival.
    pub fn new(departure: AirportCode, arrival: AirportCode) -> Self {
        Self { departure, arrival }
    }

    /// The opposite direction: arrival becomes departure and vice versa.
    pub fn reversed(&self) -> Self {
        Self {
            departure: self.arrival.clone(),
            arrival: self.departure.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.departure, self.arrival)
    }
}
