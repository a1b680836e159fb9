//! `Calendar` trait, the data-driven `MarketCalendar` type, and
//! business-day navigation.
//!
//! A calendar knows which dates are business days and can find adjacent
//! business days.  Named market conventions are not a type hierarchy: each
//! one is a [`MarketCalendar`] value composing an explicit list of holiday
//! predicates with its literal exception data, so the full holiday set of a
//! convention is visible at a single construction site.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::errors::{Error, Result};
use crate::weekday::Weekday;

/// Longest run of consecutive non-business days a navigation scan will
/// cross before failing with [`Error::NoBusinessDayFound`].
///
/// Real holiday runs are at most a handful of days; the bound exists so a
/// misconfigured calendar cannot send a scan into an unbounded loop.
pub const MAX_SCAN_DAYS: i32 = 30;

/// A date decomposed into the fields holiday predicates match on.
///
/// Decomposed once per business-day decision and shared by every rule.
#[derive(Debug, Clone, Copy)]
pub struct DateParts {
    /// Year (1901–2199).
    pub year: u16,
    /// Month (1–12).
    pub month: u8,
    /// Day of the month (1–31).
    pub day: u8,
    /// Weekday.
    pub weekday: Weekday,
    /// 1-based day of the year.
    pub day_of_year: u16,
}

impl DateParts {
    /// Decompose a date.
    pub fn of(date: Date) -> Self {
        DateParts {
            year: date.year(),
            month: date.month(),
            day: date.day_of_month(),
            weekday: date.weekday(),
            day_of_year: date.day_of_year(),
        }
    }
}

/// A holiday (or exception) predicate: one named observance rule.
///
/// Pure and stateless; returns `true` if the decomposed date matches.
pub type HolidayRule = fn(&DateParts) -> bool;

/// A market/jurisdiction calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"US (Settlement)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a weekend (Saturday or Sunday).
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `date` itself if it is a business day, otherwise the first
    /// business day after it.
    fn adjust_forward(&self, date: Date) -> Result<Date> {
        scan(self, date, 1, false)
    }

    /// Return the first business day strictly after `date`.
    fn next_business_day(&self, date: Date) -> Result<Date> {
        scan(self, date, 1, true)
    }

    /// Return `date` itself if it is a business day, otherwise the last
    /// business day before it.
    fn adjust_backward(&self, date: Date) -> Result<Date> {
        scan(self, date, -1, false)
    }

    /// Return the last business day strictly before `date`.
    fn previous_business_day(&self, date: Date) -> Result<Date> {
        scan(self, date, -1, true)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => self.adjust_forward(date),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.adjust_forward(date)?;
                if adjusted.month() != date.month() {
                    self.adjust_backward(date)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Preceding => self.adjust_backward(date),
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust_backward(date)?;
                if adjusted.month() != date.month() {
                    self.adjust_forward(date)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date) {
                    return Ok(date);
                }
                // A scan that fails (off the end of the date range, say)
                // just means no candidate on that side.
                match (self.adjust_forward(date), self.adjust_backward(date)) {
                    (Ok(fwd), Ok(bwd)) => {
                        if fwd - date <= date - bwd {
                            Ok(fwd)
                        } else {
                            Ok(bwd)
                        }
                    }
                    (Ok(fwd), Err(_)) => Ok(fwd),
                    (Err(_), Ok(bwd)) => Ok(bwd),
                    (Err(e), Err(_)) => Err(e),
                }
            }
        }
    }

    /// Advance `date` by `n` business days (backward if `n` is negative).
    fn advance_business_days(&self, date: Date, n: i32) -> Result<Date> {
        let mut d = date;
        for _ in 0..n.unsigned_abs() {
            d = if n > 0 {
                self.next_business_day(d)?
            } else {
                self.previous_business_day(d)?
            };
        }
        Ok(d)
    }

    /// Count the business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Negative if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        // Step before testing so the walk never leaves [start, end], even
        // when `end` is the last representable date.
        let mut d = start;
        while d < end {
            d += 1;
            if self.is_business_day(d) {
                count += 1;
            }
        }
        sign * count
    }
}

/// Step one day at a time in `step` direction until a business day is found.
///
/// Checks `start` itself unless `skip_start` is set.  Gives up after
/// [`MAX_SCAN_DAYS`] steps; stepping outside the valid date range
/// propagates the date-arithmetic error.
fn scan<C: Calendar + ?Sized>(cal: &C, start: Date, step: i32, skip_start: bool) -> Result<Date> {
    let mut d = if skip_start {
        start.add_days(step)?
    } else {
        start
    };
    for _ in 0..=MAX_SCAN_DAYS {
        if cal.is_business_day(d) {
            return Ok(d);
        }
        d = d.add_days(step)?;
    }
    Err(Error::NoBusinessDayFound {
        start,
        limit: MAX_SCAN_DAYS,
    })
}

/// A named market convention: an ordered set of holiday rules plus literal
/// exception data.
///
/// The business-day decision is: weekends are closed; any matching
/// business-day override forces the date open; any matching holiday rule or
/// literal special closure marks it closed; everything else is open.
#[derive(Debug, Clone, Copy)]
pub struct MarketCalendar {
    name: &'static str,
    holiday_rules: &'static [HolidayRule],
    business_day_overrides: &'static [HolidayRule],
    special_closures: &'static [(u16, u8, u8)],
}

impl MarketCalendar {
    /// Compose a convention from its rule set and exception data.
    pub const fn new(
        name: &'static str,
        holiday_rules: &'static [HolidayRule],
        business_day_overrides: &'static [HolidayRule],
        special_closures: &'static [(u16, u8, u8)],
    ) -> Self {
        MarketCalendar {
            name,
            holiday_rules,
            business_day_overrides,
            special_closures,
        }
    }
}

impl Calendar for MarketCalendar {
    fn name(&self) -> &str {
        self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.weekday().is_weekend() {
            return false;
        }
        let parts = DateParts::of(date);
        if self.business_day_overrides.iter().any(|rule| rule(&parts)) {
            return true;
        }
        if self.holiday_rules.iter().any(|rule| rule(&parts)) {
            return false;
        }
        !self
            .special_closures
            .contains(&(parts.year, parts.month, parts.day))
    }
}

/// A calendar with no holidays: only Saturdays and Sundays are closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
