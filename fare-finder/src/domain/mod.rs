//! Domain types for the fare finder.
//!
//! This module contains the core data model of a search run. Types
//! validate their invariants at construction time, so code that
//! receives them can trust their validity.

mod airport;
mod fare;
mod route;
mod trip;
mod window;

pub use airport::{AirportCode, InvalidAirportCode};
pub use fare::{Fare, FareQuote};
pub use route::Route;
pub use trip::TripCandidate;
pub use window::{InvalidWindow, SearchWindow};
