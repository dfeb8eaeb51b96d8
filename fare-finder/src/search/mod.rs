//! Round-trip fare search.
//!
//! This module implements the core search pipeline that answers:
//! "across this travel window, which departure/return date pair is
//! cheapest?"
//!
//! Candidate dates are sampled at a stride, priced concurrently in
//! both directions, cross-paired under the stay-length constraint,
//! and ranked by total cost.

mod config;
mod dates;
mod fetch;
mod pair;
mod pipeline;
mod rank;

pub use config::SearchConfig;
pub use dates::{CandidateDate, StridedDates};
pub use fetch::{FareSource, FetchError, fetch_fares};
pub use pair::pair_trips;
pub use pipeline::{RoundTripSearch, SearchOutcome};
pub use rank::rank_trips;
