//! Fare types produced by pricing queries.
//!
//! A `FareQuote` is what one pricing query yields on success; a `Fare`
//! pins that quote to the queried date for use in pairing. Dates with no
//! priced flight produce no `Fare` at all, never a zero amount.

use chrono::{Datelike, NaiveDate};

/// The cheapest priced amount the pricing source reported for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct FareQuote {
    /// Fare amount in the configured currency.
    pub amount: f64,
    /// Currency code as reported by the pricing source (e.g. "TL").
    pub currency: String,
}

/// The cheapest fare for one direction on one date.
///
/// At most one `Fare` exists per (direction, date) pair; the fetch stage
/// drops dates whose query failed or reported no priced flights.
#[derive(Debug, Clone, PartialEq)]
pub struct Fare {
    /// The travel date this fare applies to.
    pub date: NaiveDate,
    /// Absolute day ordinal of `date` (days from the Common Era epoch).
    /// Subtracting two day numbers gives an exact stay length even when
    /// the search window spans a year boundary.
    pub day_number: i64,
    /// Cheapest amount reported for this date.
    pub amount: f64,
}

impl Fare {
    /// Create a fare for a date, deriving its day number.
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            day_number: i64::from(date.num_days_from_ce()),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_number_tracks_date() {
        let a = Fare::new(date(2026, 9, 1), 100.0);
        let b = Fare::new(date(2026, 9, 8), 90.0);

        assert_eq!(b.day_number - a.day_number, 7);
    }

    #[test]
    fn day_number_spans_year_boundary() {
        let dec = Fare::new(date(2026, 12, 29), 100.0);
        let jan = Fare::new(date(2027, 1, 4), 120.0);

        // Day-of-year would give 4 - 363 = -359; absolute day numbers
        // give the real 6-day stay.
        assert_eq!(jan.day_number - dec.day_number, 6);
    }
}
