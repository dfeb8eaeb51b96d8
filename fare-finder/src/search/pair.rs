//! Outbound and return fare pairing.
//!
//! The combinatorial heart of the search: every outbound fare is
//! considered against every return fare, and the pairs whose stay
//! length fits the window become trip candidates.

use crate::domain::{Fare, SearchWindow, TripCandidate};

/// Pair outbound and return fares into round-trip candidates.
///
/// Stay length is the day difference between return departure and
/// outbound departure; both window bounds are inclusive. The cross
/// product is quadratic, but the date stride keeps both inputs to
/// tens of entries. Candidates appear in outbound-fare order, then
/// return-fare order, which ranking relies on for tie-breaking.
pub fn pair_trips(
    outbound: &[Fare],
    inbound: &[Fare],
    window: &SearchWindow,
) -> Vec<TripCandidate> {
    let mut trips = Vec::new();

    for dep in outbound {
        for ret in inbound {
            let stay = ret.day_number - dep.day_number;
            if window.permits_stay(stay) {
                trips.push(TripCandidate::from_fares(dep, ret));
            }
        }
    }

    trips
}
