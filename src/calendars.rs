//! Jurisdiction holiday predicates and the named market conventions.
//!
//! Each submodule holds one jurisdiction's observance rules as plain
//! predicate functions plus the [`MarketCalendar`](crate::MarketCalendar)
//! values composing them.

pub mod canada;
pub mod united_states;

use crate::calendar::DateParts;
use crate::easter;

/// Good Friday: three days before Western Easter Monday.
pub(crate) fn good_friday(p: &DateParts) -> bool {
    p.day_of_year == easter::easter_monday_of(p.year) - 3
}
