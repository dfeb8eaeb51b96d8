//! Round-trip search pipeline.
//!
//! Wires the stages together. Both directions are priced over the
//! same candidate dates, and pairing waits for both to finish.

use tracing::info;

use crate::domain::{Route, SearchWindow, TripCandidate};

use super::config::SearchConfig;
use super::dates::StridedDates;
use super::fetch::{FareSource, fetch_fares};
use super::pair::pair_trips;
use super::rank::rank_trips;

/// Result of a round-trip search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Trip candidates, cheapest first.
    pub trips: Vec<TripCandidate>,

    /// Number of outbound dates that had a priced flight.
    pub outbound_fares: usize,

    /// Number of return dates that had a priced flight.
    pub return_fares: usize,

    /// Number of availability queries issued.
    pub queries_issued: usize,
}

/// Round-trip fare search over a flexible date window.
pub struct RoundTripSearch<'a, S: FareSource> {
    source: &'a S,
    config: &'a SearchConfig,
}

impl<'a, S: FareSource> RoundTripSearch<'a, S> {
    /// Create a new search against the given fare source.
    pub fn new(source: &'a S, config: &'a SearchConfig) -> Self {
        Self { source, config }
    }

    /// Find the cheapest round trips on `route` within `window`.
    ///
    /// Pairing starts only once both directions have finished
    /// fetching. A window with no valid pairing yields an empty trip
    /// list, not an error.
    pub async fn search(&self, route: &Route, window: &SearchWindow) -> SearchOutcome {
        let dates: Vec<_> =
            StridedDates::new(window.start, window.end, self.config.stride()).collect();
        let return_route = route.reversed();

        // Price both directions over the same candidate dates.
        let (outbound, inbound) = tokio::join!(
            fetch_fares(self.source, route, &dates, self.config.max_in_flight),
            fetch_fares(self.source, &return_route, &dates, self.config.max_in_flight)
        );

        info!(
            route = %route,
            dates = dates.len(),
            outbound_fares = outbound.len(),
            return_fares = inbound.len(),
            "Fetched fares for both directions"
        );

        let trips = pair_trips(&outbound, &inbound, window);
        let trips = rank_trips(trips, self.config.top_k);

        SearchOutcome {
            trips,
            outbound_fares: outbound.len(),
            return_fares: inbound.len(),
            queries_issued: dates.len() * 2,
        }
    }
}
