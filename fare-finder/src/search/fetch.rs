//! Concurrent fare fetching.
//!
//! Prices every candidate date in one direction against the external
//! fare source, keeping a bounded number of queries in flight.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{Fare, FareQuote, Route};

use super::dates::CandidateDate;

/// Error from a single fare lookup.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to fetch fares for {route} on {date}: {message}")]
pub struct FetchError {
    pub route: String,
    pub date: NaiveDate,
    pub message: String,
}

impl FetchError {
    pub fn new(route: &Route, date: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            route: route.to_string(),
            date,
            message: message.into(),
        }
    }
}

/// Trait for providing cheapest fares.
///
/// This abstraction allows the search to be tested with mock data.
#[async_trait]
pub trait FareSource {
    /// Get the cheapest fare for a route on a single departure date.
    ///
    /// Returns `Ok(None)` when the source has no priced flight on
    /// that date.
    async fn cheapest_fare(
        &self,
        route: &Route,
        date: NaiveDate,
    ) -> Result<Option<FareQuote>, FetchError>;
}

/// Fetch fares for every candidate date on a route.
///
/// Queries are issued in batches of at most `max_in_flight`. A date
/// whose lookup fails is logged and contributes nothing to the
/// result; the remaining dates are unaffected. The result contains
/// one `Fare` per date with a priced flight, in no particular order.
pub async fn fetch_fares<S: FareSource>(
    source: &S,
    route: &Route,
    dates: &[CandidateDate],
    max_in_flight: usize,
) -> Vec<Fare> {
    let mut fares = Vec::with_capacity(dates.len());

    for batch in dates.chunks(max_in_flight.max(1)) {
        let futures: Vec<_> = batch
            .iter()
            .map(|candidate| async move {
                let result = source.cheapest_fare(route, candidate.date).await;
                (candidate.date, result)
            })
            .collect();

        let results = join_all(futures).await;

        for (date, result) in results {
            match result {
                Ok(Some(quote)) => fares.push(Fare::new(date, quote.amount)),
                Ok(None) => {
                    debug!(route = %route, date = %date, "No priced flight");
                }
                Err(e) => {
                    warn!(
                        route = %route,
                        date = %date,
                        error = %e,
                        "Fare lookup failed, skipping date"
                    );
                }
            }
        }
    }

    fares
}
