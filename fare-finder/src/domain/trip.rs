//! Round-trip candidate built from two one-way fares.

use chrono::NaiveDate;
use serde::Serialize;

use super::fare::Fare;

/// One valid round-trip pairing: an outbound fare plus a return fare
/// whose stay length satisfied the search window.
///
/// Created during pairing, consumed during ranking; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripCandidate {
    /// Outbound travel date.
    pub departure_date: NaiveDate,
    /// Return travel date.
    pub return_date: NaiveDate,
    /// Cheapest outbound amount.
    pub departure_cost: f64,
    /// Cheapest return amount.
    pub return_cost: f64,
    /// Sum of both legs.
    pub total_cost: f64,
    /// Days between departure and return.
    pub total_stay: i64,
}

impl TripCandidate {
    /// Pair an outbound fare with a return fare.
    ///
    /// The stay length is the absolute day-number difference, so it is
    /// exact across year boundaries. Callers are expected to have
    /// checked the stay against the search window already.
    pub fn from_fares(outbound: &Fare, inbound: &Fare) -> Self {
        Self {
            departure_date: outbound.date,
            return_date: inbound.date,
            departure_cost: outbound.amount,
            return_cost: inbound.amount,
            total_cost: outbound.amount + inbound.amount,
            total_stay: inbound.day_number - outbound.day_number,
        }
    }
}
