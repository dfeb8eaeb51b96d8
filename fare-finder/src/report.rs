//! Result presentation.
//!
//! Converts ranked trips into their display forms: an aligned text
//! table for the terminal or pretty-printed JSON for downstream
//! tooling. Amounts are printed bare; the currency is uniform across
//! a search run and reported once by the caller.

use serde::Serialize;

use crate::domain::TripCandidate;

/// One row of the final report.
#[derive(Debug, Clone, Serialize)]
pub struct TripRow {
    /// Outbound travel date (ISO format)
    pub departure_date: String,

    /// Return travel date (ISO format)
    pub return_date: String,

    /// Days between departure and return
    pub stay_days: i64,

    /// Cheapest outbound amount
    pub departure_cost: f64,

    /// Cheapest return amount
    pub return_cost: f64,

    /// Sum of both legs
    pub total_cost: f64,
}

impl TripRow {
    /// Create from a domain TripCandidate.
    pub fn from_candidate(trip: &TripCandidate) -> Self {
        Self {
            departure_date: trip.departure_date.to_string(),
            return_date: trip.return_date.to_string(),
            stay_days: trip.total_stay,
            departure_cost: trip.departure_cost,
            return_cost: trip.return_cost,
            total_cost: trip.total_cost,
        }
    }
}

/// Render trips as an aligned text table, cheapest first.
pub fn render_table(trips: &[TripCandidate]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<12} {:<12} {:>5} {:>10} {:>10} {:>10}\n",
        "Departure", "Return", "Stay", "Out", "Back", "Total"
    ));

    for trip in trips {
        let row = TripRow::from_candidate(trip);
        out.push_str(&format!(
            "{:<12} {:<12} {:>5} {:>10.2} {:>10.2} {:>10.2}\n",
            row.departure_date,
            row.return_date,
            row.stay_days,
            row.departure_cost,
            row.return_cost,
            row.total_cost
        ));
    }

    out
}

/// Render trips as pretty-printed JSON.
pub fn render_json(trips: &[TripCandidate]) -> serde_json::Result<String> {
    let rows: Vec<TripRow> = trips.iter().map(TripRow::from_candidate).collect();
    serde_json::to_string_pretty(&rows)
}
