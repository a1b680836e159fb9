//! Canadian holiday rules and market calendars.
//!
//! The Settlement and Toronto Stock Exchange conventions observe the same
//! holiday set; they are kept as distinct named values.

use super::good_friday;
use crate::calendar::{DateParts, HolidayRule, MarketCalendar};
use crate::weekday::Weekday;

// ── Holiday rules ────────────────────────────────────────────────────────

/// New Year's Day: Jan 1, rolled to Monday (Jan 2 or 3) from the weekend.
fn new_years_day(p: &DateParts) -> bool {
    p.month == 1 && (p.day == 1 || ((p.day == 2 || p.day == 3) && p.weekday == Weekday::Monday))
}

/// Family Day: third Monday of February, since 2008.
fn family_day(p: &DateParts) -> bool {
    p.year >= 2008 && p.month == 2 && p.weekday == Weekday::Monday && (15..=21).contains(&p.day)
}

/// Victoria Day: the Monday on or preceding May 24.
fn victoria_day(p: &DateParts) -> bool {
    p.month == 5 && p.weekday == Weekday::Monday && (18..=24).contains(&p.day)
}

/// Canada Day: Jul 1, rolled to Monday (Jul 2 or 3) from the weekend.
fn canada_day(p: &DateParts) -> bool {
    p.month == 7 && (p.day == 1 || ((p.day == 2 || p.day == 3) && p.weekday == Weekday::Monday))
}

/// Civic holiday: first Monday of August.
fn civic_holiday(p: &DateParts) -> bool {
    p.month == 8 && p.weekday == Weekday::Monday && p.day <= 7
}

/// Labour Day: first Monday of September.
fn labour_day(p: &DateParts) -> bool {
    p.month == 9 && p.weekday == Weekday::Monday && p.day <= 7
}

/// Thanksgiving: second Monday of October.
fn thanksgiving(p: &DateParts) -> bool {
    p.month == 10 && p.weekday == Weekday::Monday && (8..=14).contains(&p.day)
}

/// Remembrance Day: Nov 11, rolled to Monday (Nov 12 or 13) from the
/// weekend.
fn remembrance_day(p: &DateParts) -> bool {
    p.month == 11 && (p.day == 11 || ((p.day == 12 || p.day == 13) && p.weekday == Weekday::Monday))
}

/// Christmas: Dec 25, displaced to Dec 27 when the 25th falls on a
/// weekend.
fn christmas(p: &DateParts) -> bool {
    p.month == 12
        && (p.day == 25
            || (p.day == 27 && (p.weekday == Weekday::Monday || p.weekday == Weekday::Tuesday)))
}

/// Boxing Day: Dec 26, displaced to Dec 28 when the 26th falls on a
/// weekend.
fn boxing_day(p: &DateParts) -> bool {
    p.month == 12
        && (p.day == 26
            || (p.day == 28 && (p.weekday == Weekday::Monday || p.weekday == Weekday::Tuesday)))
}

// ── Conventions ──────────────────────────────────────────────────────────

const HOLIDAY_RULES: &[HolidayRule] = &[
    new_years_day,
    family_day,
    good_friday,
    victoria_day,
    canada_day,
    civic_holiday,
    labour_day,
    thanksgiving,
    remembrance_day,
    christmas,
    boxing_day,
];

/// Canada Settlement: the federal holiday set.
pub const CANADA_SETTLEMENT: MarketCalendar =
    MarketCalendar::new("Canada (Settlement)", HOLIDAY_RULES, &[], &[]);

/// Toronto Stock Exchange: observes the same holiday set as Settlement.
pub const TSX: MarketCalendar = MarketCalendar::new("Canada (TSX)", HOLIDAY_RULES, &[], &[]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years_day_rolls() {
        assert!(!CANADA_SETTLEMENT.is_business_day(date(2024, 1, 1)));
        // Jan 1, 2022 is a Saturday: observed Monday Jan 3.
        assert!(!CANADA_SETTLEMENT.is_business_day(date(2022, 1, 3)));
        // Jan 1, 2023 is a Sunday: observed Monday Jan 2.
        assert!(!CANADA_SETTLEMENT.is_business_day(date(2023, 1, 2)));
        assert!(CANADA_SETTLEMENT.is_business_day(date(2023, 1, 3)));
    }

    #[test]
    fn family_day_since_2008() {
        // Third Monday of February 2023 = Feb 20.
        assert!(!CANADA_SETTLEMENT.is_business_day(date(2023, 2, 20)));
        // Feb 19, 2007 (third Monday) predates the holiday.
        assert!(CANADA_SETTLEMENT.is_business_day(date(2007, 2, 19)));
    }

    #[test]
    fn good_friday_2023() {
        assert!(!CANADA_SETTLEMENT.is_business_day(date(2023, 4, 7)));
        assert!(!TSX.is_business_day(date(2023, 4, 7)));
        // Easter Monday is a business day under both.
        assert!(CANADA_SETTLEMENT.is_business_day(date(2023, 4, 10)));
    }

    #[test]
    fn victoria_day_2023() {
        // Monday on or before May 24, 2023: May 22.
        assert!(!TSX.is_business_day(date(2023, 5, 22)));
        assert!(TSX.is_business_day(date(2023, 5, 29)));
    }

    #[test]
    fn canada_day_rolls() {
        assert!(!TSX.is_business_day(date(2024, 7, 1)));
        // Jul 1, 2023 is a Saturday: observed Monday Jul 3.
        assert!(!TSX.is_business_day(date(2023, 7, 3)));
    }

    #[test]
    fn august_and_september_mondays() {
        // Civic holiday Aug 7, 2023; Labour Day Sep 4, 2023.
        assert!(!CANADA_SETTLEMENT.is_business_day(date(2023, 8, 7)));
        assert!(!CANADA_SETTLEMENT.is_business_day(date(2023, 9, 4)));
    }

    #[test]
    fn thanksgiving_2023() {
        // Second Monday of October 2023 = Oct 9.
        assert!(!CANADA_SETTLEMENT.is_business_day(date(2023, 10, 9)));
    }

    #[test]
    fn remembrance_day_rolls() {
        // Nov 11, 2024 is a Monday.
        assert!(!CANADA_SETTLEMENT.is_business_day(date(2024, 11, 11)));
        // Nov 11, 2023 is a Saturday: observed Monday Nov 13.
        assert!(!CANADA_SETTLEMENT.is_business_day(date(2023, 11, 13)));
    }

    #[test]
    fn christmas_and_boxing_day() {
        assert!(!TSX.is_business_day(date(2023, 12, 25)));
        assert!(!TSX.is_business_day(date(2023, 12, 26)));
        // Dec 25/26, 2021 fall on the weekend: observed Mon 27 / Tue 28.
        assert!(!TSX.is_business_day(date(2021, 12, 27)));
        assert!(!TSX.is_business_day(date(2021, 12, 28)));
        assert!(TSX.is_business_day(date(2021, 12, 29)));
    }

    #[test]
    fn normal_business_day() {
        // A plain Wednesday.
        assert!(CANADA_SETTLEMENT.is_business_day(date(2023, 3, 15)));
        assert!(TSX.is_business_day(date(2023, 3, 15)));
    }
}
