//! Pegasus availability API client.
//!
//! This module provides an HTTP client for the Pegasus mobile
//! availability endpoint, which returns cheapest daily fares for a
//! route.
//!
//! Key characteristics of the API:
//! - It is the **mobile app's** backend, so requests must carry the
//!   app's identification headers
//! - A single-date query answers with a spread of nearby dates; the
//!   entry for the requested date has to be selected from the list
//! - A date with no priced flights simply has no `cheapestFare`

mod client;
mod error;
mod types;

pub use client::{PegasusClient, PegasusConfig};
pub use error::PegasusError;
pub use types::{
    AvailabilityRequest, AvailabilityResponse, CheapestFare, DailyFlight, FlightSearchLeg,
    RouteAvailability,
};
