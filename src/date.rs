//! `Date` — a civil date stored as a serial day number.
//!
//! Serial 1 is January 1, 1900 (a Monday), which keeps weekday derivation a
//! plain modulus.  The valid range is 1901-01-01 through 2199-12-31, the
//! window covered by the embedded Easter tables; construction and arithmetic
//! outside that window fail explicitly.
//!
//! Year, month, day-of-month, weekday, and day-of-year are all recomputed
//! from the serial on demand — nothing is cached, so the fields can never
//! drift apart.

use crate::errors::{Error, Result};
use crate::weekday::Weekday;

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1901.
    pub const MIN: Date = Date(366);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial falls outside the valid range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year (1901–2199), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1901..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1901, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1901–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the 1-based day of the year (1–365, or 1–366 in leap years).
    pub fn day_of_year(&self) -> u16 {
        let year = ymd_from_serial(self.0).0;
        (self.0 - serial_from_ymd(year, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) is a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ───────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` moves backward).
    ///
    /// Returns an error if the result leaves the valid range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "{self} {n:+} days leaves the range 1901-01-01..2199-12-31"
            )));
        }
        Ok(Date(serial))
    }
}

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Civil-calendar helpers ───────────────────────────────────────────────

/// Whether a given year is a leap year in the Gregorian calendar.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month of a given year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Cumulative days before each month in a non-leap year.
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap days in the years [1900, y).  1900 itself is not a leap year.
fn leap_days_before(y: i32) -> i32 {
    (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400
}

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let mut doy = MONTH_OFFSET[month as usize - 1] + day as u16;
    if month > 2 && is_leap_year(year) {
        doy += 1;
    }
    (y - 1900) * 365 + leap_days_before(y) + doy as i32
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // The estimate can only overshoot (by accumulated leap days), so walk
    // backwards until the serial falls inside the year.
    let mut year = (1900 + (serial - 1) / 365) as u16;
    while serial_from_ymd(year, 1, 1) > serial {
        year -= 1;
    }
    let mut remaining = (serial - serial_from_ymd(year, 1, 1) + 1) as u16;
    let mut month = 1u8;
    while remaining > days_in_month(year, month) as u16 {
        remaining -= days_in_month(year, month) as u16;
        month += 1;
    }
    (year, month, remaining as u8)
}
