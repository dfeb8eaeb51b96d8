//! Travel window and stay-length bounds.

use chrono::NaiveDate;

/// Error returned for a window that cannot describe a valid search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidWindow {
    /// The window starts after it ends
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    /// A stay bound is negative
    #[error("stay bounds must be non-negative days (got {0})")]
    NegativeStay(i64),

    /// The minimum stay exceeds the maximum stay
    #[error("minimum stay {min} exceeds maximum stay {max}")]
    StayBoundsReversed { min: i64, max: i64 },
}

/// The caller-supplied search parameters: a span of candidate travel
/// dates and the acceptable stay lengths.
///
/// Validated at construction so the search pipeline never sees an
/// inconsistent window; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchWindow {
    /// First candidate departure date.
    pub start: NaiveDate,

    /// Last candidate date (the enumerator may sample one stride past it).
    pub end: NaiveDate,

    /// Minimum acceptable stay in days (inclusive).
    pub min_stay: i64,

    /// Maximum acceptable stay in days (inclusive).
    pub max_stay: i64,
}

impl SearchWindow {
    /// Create a validated window.
    ///
    /// Fails if `start > end`, a stay bound is negative, or
    /// `min_stay > max_stay`.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        min_stay: i64,
        max_stay: i64,
    ) -> Result<Self, InvalidWindow> {
        if start > end {
            return Err(InvalidWindow::StartAfterEnd { start, end });
        }
        if min_stay < 0 {
            return Err(InvalidWindow::NegativeStay(min_stay));
        }
        if max_stay < 0 {
            return Err(InvalidWindow::NegativeStay(max_stay));
        }
        if min_stay > max_stay {
            return Err(InvalidWindow::StayBoundsReversed {
                min: min_stay,
                max: max_stay,
            });
        }

        Ok(Self {
            start,
            end,
            min_stay,
            max_stay,
        })
    }

    /// Whether a stay of the given length satisfies both bounds.
    ///
    /// Both bounds are inclusive.
    pub fn permits_stay(&self, days: i64) -> bool {
        days >= self.min_stay && days <= self.max_stay
    }
}
