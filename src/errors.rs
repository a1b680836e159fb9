//! Error types for bizcal.
//!
//! A single `thiserror`-derived enum covers the two failure modes the
//! library has: requesting an Easter date for a year outside the embedded
//! tables, and a navigation scan that runs past its sanity bound.  Date
//! construction and arithmetic failures are reported through the same enum.

use crate::date::Date;
use thiserror::Error;

/// The top-level error type used throughout bizcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year outside the supported window was requested from an Easter
    /// table.  The tables cover 1901–2199 inclusive; there is no
    /// extrapolation.
    #[error("year {0} out of range [1901, 2199]")]
    YearOutOfRange(u16),

    /// Date construction or arithmetic produced a date outside the valid
    /// range.
    #[error("date error: {0}")]
    Date(String),

    /// A business-day scan gave up after crossing `limit` consecutive
    /// non-business days.
    #[error("no business day within {limit} days of {start}")]
    NoBusinessDayFound {
        /// The date the scan started from.
        start: Date,
        /// The scan bound that was exceeded.
        limit: i32,
    },
}

/// Shorthand `Result` type used throughout bizcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;
