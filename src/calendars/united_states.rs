//! United States holiday rules and market calendars.
//!
//! Five conventions share the federal rule set: Settlement, Libor,
//! Government Bond, Federal Reserve, and NYSE.  They differ only in which
//! rules they compose and which literal exception dates they carry.
//!
//! Several rules branch on historical threshold years: the Uniform Monday
//! Holiday Act moved Presidents' Day, Memorial Day, and Columbus Day to
//! fixed Mondays in 1971; Veterans Day spent 1971–1977 on the fourth Monday
//! of October before its 1978 restoration to November 11; the NYSE first
//! observed Martin Luther King Jr. Day in 1998.

use super::good_friday;
use crate::calendar::{DateParts, HolidayRule, MarketCalendar};
use crate::weekday::Weekday;

// ── Holiday rules ────────────────────────────────────────────────────────

/// New Year's Day: Jan 1, or Jan 2 when Jan 1 falls on a Sunday.
fn new_years_day(p: &DateParts) -> bool {
    p.month == 1 && (p.day == 1 || (p.day == 2 && p.weekday == Weekday::Monday))
}

/// Dec 31 when Jan 1 falls on a Saturday (Settlement and Libor only).
fn new_years_eve_friday(p: &DateParts) -> bool {
    p.month == 12 && p.day == 31 && p.weekday == Weekday::Friday
}

/// Martin Luther King Jr. Day: third Monday of January.
fn mlk_day(p: &DateParts) -> bool {
    p.month == 1 && p.weekday == Weekday::Monday && (15..=21).contains(&p.day)
}

/// MLK Day as the NYSE observes it, only since 1998.
fn nyse_mlk_day(p: &DateParts) -> bool {
    p.year >= 1998 && mlk_day(p)
}

/// Presidents' Day: third Monday of February since 1971, previously
/// Washington's Birthday (Feb 22) with weekend rolls.
fn presidents_day(p: &DateParts) -> bool {
    if p.year >= 1971 {
        p.month == 2 && p.weekday == Weekday::Monday && (15..=21).contains(&p.day)
    } else {
        p.month == 2
            && (p.day == 22
                || (p.day == 23 && p.weekday == Weekday::Monday)
                || (p.day == 21 && p.weekday == Weekday::Friday))
    }
}

/// Memorial Day: last Monday of May since 1971, previously May 30 with
/// weekend rolls.
fn memorial_day(p: &DateParts) -> bool {
    if p.year >= 1971 {
        p.month == 5 && p.weekday == Weekday::Monday && p.day >= 25
    } else {
        p.month == 5
            && (p.day == 30
                || (p.day == 31 && p.weekday == Weekday::Monday)
                || (p.day == 29 && p.weekday == Weekday::Friday))
    }
}

/// Independence Day: Jul 4, rolled to Monday from Sunday and to Friday
/// from Saturday.
fn independence_day(p: &DateParts) -> bool {
    p.month == 7
        && (p.day == 4
            || (p.day == 5 && p.weekday == Weekday::Monday)
            || (p.day == 3 && p.weekday == Weekday::Friday))
}

/// Independence Day without the Saturday roll-back (Federal Reserve).
fn independence_day_no_saturday(p: &DateParts) -> bool {
    p.month == 7 && (p.day == 4 || (p.day == 5 && p.weekday == Weekday::Monday))
}

/// Labor Day: first Monday of September.
fn labor_day(p: &DateParts) -> bool {
    p.month == 9 && p.weekday == Weekday::Monday && p.day <= 7
}

/// Columbus Day: second Monday of October, since 1971.
fn columbus_day(p: &DateParts) -> bool {
    p.year >= 1971 && p.month == 10 && p.weekday == Weekday::Monday && (8..=14).contains(&p.day)
}

/// Veterans Day: Nov 11 with weekend rolls, except 1971–1977 when it was
/// the fourth Monday of October.
fn veterans_day(p: &DateParts) -> bool {
    if p.year <= 1970 || p.year >= 1978 {
        p.month == 11
            && (p.day == 11
                || (p.day == 12 && p.weekday == Weekday::Monday)
                || (p.day == 10 && p.weekday == Weekday::Friday))
    } else {
        p.month == 10 && p.weekday == Weekday::Monday && (22..=28).contains(&p.day)
    }
}

/// Veterans Day without the Saturday roll-back (Government Bond, Federal
/// Reserve).
fn veterans_day_no_saturday(p: &DateParts) -> bool {
    if p.year <= 1970 || p.year >= 1978 {
        p.month == 11 && (p.day == 11 || (p.day == 12 && p.weekday == Weekday::Monday))
    } else {
        p.month == 10 && p.weekday == Weekday::Monday && (22..=28).contains(&p.day)
    }
}

/// Thanksgiving: fourth Thursday of November.
fn thanksgiving(p: &DateParts) -> bool {
    p.month == 11 && p.weekday == Weekday::Thursday && (22..=28).contains(&p.day)
}

/// Christmas: Dec 25, rolled to Monday from Sunday and to Friday from
/// Saturday.
fn christmas(p: &DateParts) -> bool {
    p.month == 12
        && (p.day == 25
            || (p.day == 26 && p.weekday == Weekday::Monday)
            || (p.day == 24 && p.weekday == Weekday::Friday))
}

/// Christmas without the Saturday roll-back (Federal Reserve).
fn christmas_no_saturday(p: &DateParts) -> bool {
    p.month == 12 && (p.day == 25 || (p.day == 26 && p.weekday == Weekday::Monday))
}

/// NYSE presidential election day: first Tuesday of November, every year
/// through 1968 and in election years through 1980.
fn presidential_election_day(p: &DateParts) -> bool {
    (p.year <= 1968 || (p.year <= 1980 && p.year % 4 == 0))
        && p.month == 11
        && p.day <= 7
        && p.weekday == Weekday::Tuesday
}

/// Paperwork-crisis Wednesdays: the NYSE closed every Wednesday from
/// June 12 to the end of 1968.
fn paperwork_crisis_wednesday(p: &DateParts) -> bool {
    p.year == 1968 && p.day_of_year >= 163 && p.weekday == Weekday::Wednesday
}

// ── Business-day overrides ───────────────────────────────────────────────

/// Since 2015, Independence Day closes Libor only when it falls on the
/// weekday itself: every other July weekday is open regardless of rolls.
fn libor_independence_day_exception(p: &DateParts) -> bool {
    p.year >= 2015 && p.month == 7 && p.day != 4
}

/// The bond market stayed open on Good Friday 2015 (a payroll-report day).
fn good_friday_2015_open(p: &DateParts) -> bool {
    p.year == 2015 && good_friday(p)
}

// ── Conventions ──────────────────────────────────────────────────────────

const SETTLEMENT_RULES: &[HolidayRule] = &[
    new_years_day,
    new_years_eve_friday,
    mlk_day,
    presidents_day,
    memorial_day,
    independence_day,
    labor_day,
    columbus_day,
    veterans_day,
    thanksgiving,
    christmas,
];

const GOVERNMENT_BOND_RULES: &[HolidayRule] = &[
    new_years_day,
    mlk_day,
    presidents_day,
    good_friday,
    memorial_day,
    independence_day,
    labor_day,
    columbus_day,
    veterans_day_no_saturday,
    thanksgiving,
    christmas,
];

const FEDERAL_RESERVE_RULES: &[HolidayRule] = &[
    new_years_day,
    mlk_day,
    presidents_day,
    memorial_day,
    independence_day_no_saturday,
    labor_day,
    columbus_day,
    veterans_day_no_saturday,
    thanksgiving,
    christmas_no_saturday,
];

const NYSE_RULES: &[HolidayRule] = &[
    new_years_day,
    nyse_mlk_day,
    presidents_day,
    good_friday,
    memorial_day,
    independence_day,
    labor_day,
    thanksgiving,
    christmas,
    presidential_election_day,
    paperwork_crisis_wednesday,
];

const GOVERNMENT_BOND_CLOSURES: &[(u16, u8, u8)] = &[
    (2018, 12, 5),  // President Bush's funeral
    (2012, 10, 30), // Hurricane Sandy
    (2004, 6, 11),  // President Reagan's funeral
];

const NYSE_CLOSURES: &[(u16, u8, u8)] = &[
    (2018, 12, 5),  // President Bush's funeral
    (2012, 10, 29), // Hurricane Sandy
    (2012, 10, 30),
    (2007, 1, 2),  // President Ford's funeral
    (2004, 6, 11), // President Reagan's funeral
    (2001, 9, 11), // September 11
    (2001, 9, 12),
    (2001, 9, 13),
    (2001, 9, 14),
    (1994, 4, 27),  // President Nixon's funeral
    (1985, 9, 27),  // Hurricane Gloria
    (1977, 7, 14),  // blackout
    (1973, 1, 25),  // President Johnson's funeral
    (1972, 12, 28), // President Truman's funeral
    (1969, 7, 21),  // lunar exploration day of participation
    (1969, 3, 31),  // President Eisenhower's funeral
    (1969, 2, 10),  // heavy snow
    (1968, 7, 5),   // day after Independence Day
    (1968, 4, 9),   // mourning for Martin Luther King Jr.
    (1963, 11, 25), // President Kennedy's funeral
    (1961, 5, 29),  // day before Decoration Day
    (1958, 12, 26), // day after Christmas
    (1954, 12, 24), // Christmas Eve
    (1956, 12, 24),
    (1965, 12, 24),
];

/// US Settlement: the federal holiday set, with Dec 31 closed when New
/// Year's Day falls on a Saturday.
pub const US_SETTLEMENT: MarketCalendar =
    MarketCalendar::new("US (Settlement)", SETTLEMENT_RULES, &[], &[]);

/// US Libor: the Settlement set, except that since 2015 Independence Day
/// only closes the fixing when July 4 falls on a weekday.
pub const US_LIBOR: MarketCalendar = MarketCalendar::new(
    "US (Libor)",
    SETTLEMENT_RULES,
    &[libor_independence_day_exception],
    &[],
);

/// US Government Bond: adds Good Friday (except 2015), drops the Saturday
/// roll-back for Veterans Day, and carries the bond-market closures.
pub const US_GOVERNMENT_BOND: MarketCalendar = MarketCalendar::new(
    "US (Government Bond)",
    GOVERNMENT_BOND_RULES,
    &[good_friday_2015_open],
    GOVERNMENT_BOND_CLOSURES,
);

/// US Federal Reserve: no Saturday roll-back for Independence Day,
/// Veterans Day, or Christmas.
pub const US_FEDERAL_RESERVE: MarketCalendar =
    MarketCalendar::new("US (Federal Reserve)", FEDERAL_RESERVE_RULES, &[], &[]);

/// New York Stock Exchange: no Columbus or Veterans Day, Good Friday and
/// MLK Day (since 1998) observed, plus the exchange's historical closures.
pub const NYSE: MarketCalendar = MarketCalendar::new("US (NYSE)", NYSE_RULES, &[], NYSE_CLOSURES);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn independence_day_2023() {
        // July 4, 2023 is a Tuesday.
        assert!(!US_SETTLEMENT.is_business_day(date(2023, 7, 4)));
        assert!(!NYSE.is_business_day(date(2023, 7, 4)));
    }

    #[test]
    fn thanksgiving_2023() {
        // Fourth Thursday of November 2023 = Nov 23.
        assert!(!US_SETTLEMENT.is_business_day(date(2023, 11, 23)));
        assert!(US_SETTLEMENT.is_business_day(date(2023, 11, 24)));
    }

    #[test]
    fn new_year_observed_2023() {
        // Jan 1, 2023 is a Sunday; observed Monday Jan 2.
        assert!(!US_SETTLEMENT.is_business_day(date(2023, 1, 2)));
        assert!(US_SETTLEMENT.is_business_day(date(2023, 1, 3)));
    }

    #[test]
    fn new_years_eve_friday_settlement_only() {
        // Jan 1, 2022 is a Saturday: Settlement closes Friday Dec 31, 2021;
        // the Federal Reserve does not.
        let eve = date(2021, 12, 31);
        assert!(!US_SETTLEMENT.is_business_day(eve));
        assert!(US_FEDERAL_RESERVE.is_business_day(eve));
    }

    #[test]
    fn good_friday_by_convention() {
        // Good Friday 2023: April 7.
        let gf = date(2023, 4, 7);
        assert!(!NYSE.is_business_day(gf));
        assert!(!US_GOVERNMENT_BOND.is_business_day(gf));
        // Settlement and the Fed stay open.
        assert!(US_SETTLEMENT.is_business_day(gf));
        assert!(US_FEDERAL_RESERVE.is_business_day(gf));
    }

    #[test]
    fn good_friday_2015_bond_market_open() {
        // Good Friday 2015: April 3.  Open for the bond market, closed on
        // the NYSE as in every other year.
        let gf = date(2015, 4, 3);
        assert!(US_GOVERNMENT_BOND.is_business_day(gf));
        assert!(!NYSE.is_business_day(gf));
        // The exception is one year only.
        assert!(!US_GOVERNMENT_BOND.is_business_day(date(2014, 4, 18)));
        assert!(!US_GOVERNMENT_BOND.is_business_day(date(2016, 3, 25)));
    }

    #[test]
    fn libor_july_since_2015() {
        // July 3, 2015 (Friday) is the observed Independence Day for
        // Settlement but a Libor fixing day.
        let observed = date(2015, 7, 3);
        assert!(!US_SETTLEMENT.is_business_day(observed));
        assert!(US_LIBOR.is_business_day(observed));
        // July 4, 2017 (Tuesday) closes both.
        assert!(!US_LIBOR.is_business_day(date(2017, 7, 4)));
        // Before 2015 the roll still applies: July 5, 2010 (Monday).
        assert!(!US_LIBOR.is_business_day(date(2010, 7, 5)));
    }

    #[test]
    fn federal_reserve_no_saturday_rolls() {
        // Dec 25, 2021 is a Saturday: Settlement closes Friday Dec 24, the
        // Fed stays open.
        assert!(!US_SETTLEMENT.is_business_day(date(2021, 12, 24)));
        assert!(US_FEDERAL_RESERVE.is_business_day(date(2021, 12, 24)));
        // Jul 4, 2015 is a Saturday: Settlement closes Friday Jul 3.
        assert!(US_FEDERAL_RESERVE.is_business_day(date(2015, 7, 3)));
    }

    #[test]
    fn veterans_day_variants() {
        // Nov 11, 2017 is a Saturday: Settlement rolls back to Friday
        // Nov 10, the no-Saturday conventions do not.
        let fri = date(2017, 11, 10);
        assert!(!US_SETTLEMENT.is_business_day(fri));
        assert!(US_GOVERNMENT_BOND.is_business_day(fri));
        assert!(US_FEDERAL_RESERVE.is_business_day(fri));
        // 1971–1977: fourth Monday of October (Oct 25, 1971).
        assert!(!US_SETTLEMENT.is_business_day(date(1971, 10, 25)));
        assert!(US_SETTLEMENT.is_business_day(date(1971, 11, 11)));
        // Restored to Nov 11 in 1978 (a Saturday; observed Friday Nov 10).
        assert!(!US_SETTLEMENT.is_business_day(date(1978, 11, 10)));
    }

    #[test]
    fn pre_1971_rules() {
        // Washington's Birthday, Feb 22, 1960 (a Monday).
        assert!(!US_SETTLEMENT.is_business_day(date(1960, 2, 22)));
        // Memorial Day, May 30, 1960 (a Monday).
        assert!(!US_SETTLEMENT.is_business_day(date(1960, 5, 30)));
        // No Columbus Day before 1971: Oct 12, 1970 (second Monday).
        assert!(US_SETTLEMENT.is_business_day(date(1970, 10, 12)));
        assert!(!US_SETTLEMENT.is_business_day(date(1971, 10, 11)));
    }

    #[test]
    fn nyse_mlk_from_1998() {
        // Third Monday of January: Jan 20, 1997 vs Jan 19, 1998.
        assert!(NYSE.is_business_day(date(1997, 1, 20)));
        assert!(!NYSE.is_business_day(date(1998, 1, 19)));
        // Settlement observed it before then.
        assert!(!US_SETTLEMENT.is_business_day(date(1997, 1, 20)));
    }

    #[test]
    fn nyse_election_days() {
        // Every year through 1968: Nov 3, 1964 (a Tuesday).
        assert!(!NYSE.is_business_day(date(1964, 11, 3)));
        // Election years through 1980: Nov 2, 1976 vs Nov 1, 1977.
        assert!(!NYSE.is_business_day(date(1976, 11, 2)));
        assert!(NYSE.is_business_day(date(1977, 11, 1)));
        // Gone by 1984: Nov 6, 1984 (a Tuesday).
        assert!(NYSE.is_business_day(date(1984, 11, 6)));
    }

    #[test]
    fn nyse_paperwork_crisis_1968() {
        // Wednesdays from June 12 through the end of 1968.
        assert!(!NYSE.is_business_day(date(1968, 6, 12)));
        assert!(!NYSE.is_business_day(date(1968, 12, 18)));
        // Wednesdays before the crisis were open.
        assert!(NYSE.is_business_day(date(1968, 5, 29)));
    }

    #[test]
    fn nyse_special_closures() {
        // Hurricane Sandy.
        assert!(!NYSE.is_business_day(date(2012, 10, 29)));
        assert!(!NYSE.is_business_day(date(2012, 10, 30)));
        assert!(NYSE.is_business_day(date(2012, 10, 31)));
        // September 11, 2001.
        assert!(!NYSE.is_business_day(date(2001, 9, 11)));
        assert!(!NYSE.is_business_day(date(2001, 9, 14)));
        // The bond market closed Oct 30, 2012 but not Oct 29.
        assert!(US_GOVERNMENT_BOND.is_business_day(date(2012, 10, 29)));
        assert!(!US_GOVERNMENT_BOND.is_business_day(date(2012, 10, 30)));
    }

    #[test]
    fn normal_day_all_conventions() {
        let d = date(2023, 6, 15); // a plain Thursday
        for cal in [
            US_SETTLEMENT,
            US_LIBOR,
            US_GOVERNMENT_BOND,
            US_FEDERAL_RESERVE,
            NYSE,
        ] {
            assert!(cal.is_business_day(d), "{} closed on {d}", cal.name());
        }
    }
}
