//! Candidate departure date enumeration.
//!
//! Turns a search window into the finite sequence of dates that will
//! be priced. Not every day is queried: dates are sampled at a fixed
//! stride to bound the number of external queries.

use chrono::{Datelike, Days, NaiveDate};

/// A calendar date paired with its absolute day number.
///
/// Day numbers count days from the common era, so stay lengths can be
/// computed by plain subtraction and stay correct across a December
/// to January window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateDate {
    pub date: NaiveDate,
    pub day_number: i64,
}

impl CandidateDate {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_number: i64::from(date.num_days_from_ce()),
        }
    }
}

/// Iterator over sampled departure dates.
///
/// Yields `start`, `start + stride`, `start + 2 * stride`, and so on,
/// stopping after the first date on or after `end`. The end of the
/// window is therefore always probed, even when the stride steps past
/// it. A window with `start == end` yields exactly one date.
#[derive(Debug, Clone)]
pub struct StridedDates {
    next: Option<NaiveDate>,
    end: NaiveDate,
    stride: Days,
}

impl StridedDates {
    /// Enumerate dates from `start` to `end` at the given stride.
    ///
    /// A zero stride would never advance, so it is treated as one.
    pub fn new(start: NaiveDate, end: NaiveDate, stride_days: u32) -> Self {
        Self {
            next: Some(start),
            end,
            stride: Days::new(u64::from(stride_days.max(1))),
        }
    }
}

impl Iterator for StridedDates {
    type Item = CandidateDate;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next?;
        self.next = if date >= self.end {
            None
        } else {
            date.checked_add_days(self.stride)
        };
        Some(CandidateDate::new(date))
    }
}
