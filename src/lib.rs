//! # bizcal
//!
//! Business-day calendars for US and Canadian market conventions.
//!
//! Seven named conventions are provided — US Settlement, US Libor, US
//! Government Bond, US Federal Reserve, NYSE, Canada Settlement, and the
//! Toronto Stock Exchange — each composed from an explicit list of holiday
//! rules plus its literal one-off closures.  On top of the business-day
//! decision sit the navigation helpers: adjust forward/backward, next and
//! previous business day, and convention-based adjustment.
//!
//! ```
//! use bizcal::{Calendar, Date, US_SETTLEMENT};
//!
//! let independence_day = Date::from_ymd(2023, 7, 4)?;
//! assert!(!US_SETTLEMENT.is_business_day(independence_day));
//! assert_eq!(
//!     US_SETTLEMENT.next_business_day(independence_day)?,
//!     Date::from_ymd(2023, 7, 5)?
//! );
//! # Ok::<(), bizcal::Error>(())
//! ```
//!
//! Everything is pure and synchronous: no I/O, no shared state, safe to
//! call from any number of threads.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ──────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `Calendar` trait, `MarketCalendar`, and business-day navigation.
pub mod calendar;

/// Jurisdiction holiday rules and the named market conventions.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter Monday lookup tables (Western and Orthodox).
pub mod easter;

/// Error types.
pub mod errors;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ───────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, DateParts, HolidayRule, MarketCalendar, WeekendsOnly, MAX_SCAN_DAYS};
pub use calendars::canada::{CANADA_SETTLEMENT, TSX};
pub use calendars::united_states::{
    NYSE, US_FEDERAL_RESERVE, US_GOVERNMENT_BOND, US_LIBOR, US_SETTLEMENT,
};
pub use date::{days_in_month, is_leap_year, Date};
pub use easter::{easter_monday, orthodox_easter_monday};
pub use errors::{Error, Result};
pub use weekday::Weekday;
