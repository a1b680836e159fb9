//! Easter Monday lookup tables, Western and Orthodox rites.
//!
//! Each table maps a year in 1901–2199 to the 1-based day-of-year on which
//! Easter Monday falls (Easter Sunday + 1 day).  The tables are the
//! computation: nothing is derived at call time, and years outside the
//! window are an explicit error rather than an out-of-bounds index.

use crate::errors::{Error, Result};

/// First year covered by the tables.
pub const FIRST_YEAR: u16 = 1901;

/// Last year covered by the tables.
pub const LAST_YEAR: u16 = 2199;

/// Day-of-year of Western (Gregorian-computus) Easter Monday, 1901–2199.
const EASTER_MONDAY: [u16; 299] = [
    98, 90, 103, 95, 114, 106, 91, 111, 102, 87, // 1901-1910
    107, 99, 83, 103, 95, 115, 99, 91, 111, 96, // 1911-1920
    87, 107, 92, 112, 103, 95, 108, 100, 91, 111, // 1921-1930
    96, 88, 107, 92, 112, 104, 88, 108, 100, 85, // 1931-1940
    104, 96, 116, 101, 92, 112, 97, 89, 108, 100, // 1941-1950
    85, 105, 96, 109, 101, 93, 112, 97, 89, 109, // 1951-1960
    93, 113, 105, 90, 109, 101, 86, 106, 97, 89, // 1961-1970
    102, 94, 113, 105, 90, 110, 101, 86, 106, 98, // 1971-1980
    110, 102, 94, 114, 98, 90, 110, 95, 86, 106, // 1981-1990
    91, 111, 102, 94, 107, 99, 90, 103, 95, 115, // 1991-2000
    106, 91, 111, 103, 87, 107, 99, 84, 103, 95, // 2001-2010
    115, 100, 91, 111, 96, 88, 107, 92, 112, 104, // 2011-2020
    95, 108, 100, 92, 111, 96, 88, 108, 92, 112, // 2021-2030
    104, 89, 108, 100, 85, 105, 96, 116, 101, 93, // 2031-2040
    112, 97, 89, 109, 100, 85, 105, 97, 109, 101, // 2041-2050
    93, 113, 97, 89, 109, 94, 113, 105, 90, 110, // 2051-2060
    101, 86, 106, 98, 89, 102, 94, 114, 105, 90, // 2061-2070
    110, 102, 86, 106, 98, 111, 102, 94, 114, 99, // 2071-2080
    90, 110, 95, 87, 106, 91, 111, 103, 94, 107, // 2081-2090
    99, 91, 103, 95, 115, 107, 91, 111, 103, 88, // 2091-2100
    108, 100, 85, 105, 96, 109, 101, 93, 112, 97, // 2101-2110
    89, 109, 93, 113, 105, 90, 109, 101, 86, 106, // 2111-2120
    97, 89, 102, 94, 113, 105, 90, 110, 101, 86, // 2121-2130
    106, 98, 110, 102, 94, 114, 98, 90, 110, 95, // 2131-2140
    86, 106, 91, 111, 102, 94, 107, 99, 90, 103, // 2141-2150
    95, 115, 106, 91, 111, 103, 87, 107, 99, 84, // 2151-2160
    103, 95, 115, 100, 91, 111, 96, 88, 107, 92, // 2161-2170
    112, 104, 95, 108, 100, 92, 111, 96, 88, 108, // 2171-2180
    92, 112, 104, 89, 108, 100, 85, 105, 96, 116, // 2181-2190
    101, 93, 112, 97, 89, 109, 100, 85, 105, // 2191-2199
];

/// Day-of-year of Orthodox (Julian-computus) Easter Monday, expressed in the
/// Gregorian calendar, 1901–2199.
const ORTHODOX_EASTER_MONDAY: [u16; 299] = [
    105, 118, 110, 102, 121, 106, 126, 118, 102, 122, // 1901-1910
    114, 99, 118, 110, 95, 115, 106, 126, 111, 103, // 1911-1920
    122, 107, 99, 119, 110, 123, 115, 107, 126, 111, // 1921-1930
    103, 123, 107, 99, 119, 104, 123, 115, 100, 120, // 1931-1940
    111, 96, 116, 108, 127, 112, 104, 124, 115, 100, // 1941-1950
    120, 112, 96, 116, 108, 128, 112, 104, 124, 109, // 1951-1960
    100, 120, 105, 125, 116, 101, 121, 113, 104, 117, // 1961-1970
    109, 101, 120, 105, 125, 117, 101, 121, 113, 98, // 1971-1980
    117, 109, 129, 114, 105, 125, 110, 102, 121, 106, // 1981-1990
    98, 118, 109, 122, 114, 106, 118, 110, 102, 122, // 1991-2000
    106, 126, 118, 103, 122, 114, 99, 119, 110, 95, // 2001-2010
    115, 107, 126, 111, 103, 123, 107, 99, 119, 111, // 2011-2020
    123, 115, 107, 127, 111, 103, 123, 108, 99, 119, // 2021-2030
    104, 124, 115, 100, 120, 112, 96, 116, 108, 128, // 2031-2040
    112, 104, 124, 116, 100, 120, 112, 97, 116, 108, // 2041-2050
    128, 113, 104, 124, 109, 101, 120, 105, 125, 117, // 2051-2060
    101, 121, 113, 105, 117, 109, 101, 121, 105, 125, // 2061-2070
    110, 102, 121, 113, 98, 118, 109, 129, 114, 106, // 2071-2080
    125, 110, 102, 122, 106, 98, 118, 110, 122, 114, // 2081-2090
    99, 119, 110, 102, 115, 107, 126, 118, 103, 123, // 2091-2100
    115, 100, 120, 112, 96, 116, 108, 128, 112, 104, // 2101-2110
    124, 109, 100, 120, 105, 125, 116, 108, 121, 113, // 2111-2120
    104, 124, 109, 101, 120, 105, 125, 117, 101, 121, // 2121-2130
    113, 98, 117, 109, 129, 114, 105, 125, 110, 102, // 2131-2140
    121, 113, 98, 118, 109, 129, 114, 106, 125, 110, // 2141-2150
    102, 122, 106, 126, 118, 103, 122, 114, 99, 119, // 2151-2160
    110, 102, 115, 107, 126, 111, 103, 123, 114, 99, // 2161-2170
    119, 111, 130, 115, 107, 127, 111, 103, 123, 108, // 2171-2180
    99, 119, 104, 124, 115, 100, 120, 112, 103, 116, // 2181-2190
    108, 128, 119, 104, 124, 116, 100, 120, 112, // 2191-2199
];

/// Day-of-year of Western Easter Monday in `year`.
///
/// # Errors
/// Returns [`Error::YearOutOfRange`] for years outside 1901–2199.
pub fn easter_monday(year: u16) -> Result<u16> {
    check_year(year)?;
    Ok(EASTER_MONDAY[(year - FIRST_YEAR) as usize])
}

/// Day-of-year of Orthodox Easter Monday in `year`, in the Gregorian
/// calendar.
///
/// # Errors
/// Returns [`Error::YearOutOfRange`] for years outside 1901–2199.
pub fn orthodox_easter_monday(year: u16) -> Result<u16> {
    check_year(year)?;
    Ok(ORTHODOX_EASTER_MONDAY[(year - FIRST_YEAR) as usize])
}

/// Infallible Western lookup for years already known to lie in the valid
/// date range (every year reachable from a constructed `Date`).
pub(crate) fn easter_monday_of(year: u16) -> u16 {
    debug_assert!((FIRST_YEAR..=LAST_YEAR).contains(&year));
    EASTER_MONDAY[(year - FIRST_YEAR) as usize]
}

fn check_year(year: u16) -> Result<()> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(Error::YearOutOfRange(year));
    }
    Ok(())
}
