//! Trip ranking for search results.
//!
//! Orders trip candidates so the cheapest valid round trips come
//! first.

use crate::domain::TripCandidate;

/// Rank trips ascending by total cost and keep the cheapest `top_k`.
///
/// The sort is stable: trips with equal totals keep the order the
/// pairing stage produced them in. If fewer than `top_k` trips exist,
/// all of them are returned.
pub fn rank_trips(mut trips: Vec<TripCandidate>, top_k: usize) -> Vec<TripCandidate> {
    trips.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    trips.truncate(top_k);
    trips
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Fare;
    use chrono::{Days, NaiveDate};
    use proptest::prelude::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    /// Trips whose departure date encodes their input position, so
    /// original order can be recovered after sorting.
    fn indexed_trips(costs: Vec<f64>) -> Vec<TripCandidate> {
        costs
            .into_iter()
            .enumerate()
            .map(|(i, cost)| {
                let day = base().checked_add_days(Days::new(i as u64)).unwrap();
                TripCandidate::from_fares(&Fare::new(day, cost), &Fare::new(day, 0.0))
            })
            .collect()
    }

    fn costs_strategy() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec((1u32..500).prop_map(f64::from), 0..25)
    }

    /// Few distinct costs, so ties are common.
    fn tied_costs_strategy() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec((0u32..4).prop_map(|slot| f64::from(slot) * 50.0), 0..25)
    }

    proptest! {
        #[test]
        fn output_is_non_decreasing(costs in costs_strategy(), top_k in 0usize..40) {
            let ranked = rank_trips(indexed_trips(costs), top_k);

            for window in ranked.windows(2) {
                prop_assert!(window[0].total_cost <= window[1].total_cost);
            }
        }

        #[test]
        fn output_length_is_min_of_input_and_top_k(
            costs in costs_strategy(),
            top_k in 0usize..40,
        ) {
            let input_len = costs.len();
            let ranked = rank_trips(indexed_trips(costs), top_k);

            prop_assert_eq!(ranked.len(), input_len.min(top_k));
        }

        #[test]
        fn every_output_trip_comes_from_the_input(
            costs in costs_strategy(),
            top_k in 0usize..40,
        ) {
            let trips = indexed_trips(costs);
            let ranked = rank_trips(trips.clone(), top_k);

            for trip in &ranked {
                prop_assert!(trips.contains(trip));
            }
        }

        #[test]
        fn ties_preserve_input_order(costs in tied_costs_strategy()) {
            let trips = indexed_trips(costs);
            let len = trips.len();
            let ranked = rank_trips(trips, len);

            // Departure date encodes the input index.
            for window in ranked.windows(2) {
                if window[0].total_cost == window[1].total_cost {
                    prop_assert!(window[0].departure_date < window[1].departure_date);
                }
            }
        }
    }
}
