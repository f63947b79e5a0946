//! Date display utilities.
//!
//! Week boundaries are shown as plain calendar dates in the zone they were
//! computed in; individual days carry their weekday abbreviation.

use std::fmt;

use jiff::{civil::Date, Zoned};

/// A zoned instant shown as its local calendar date, `YYYY-MM-DD`.
pub struct LocalDate<'a>(pub &'a Zoned);

impl<'a> fmt::Display for LocalDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d"))
    }
}

/// A civil date with its weekday, e.g. `Mon 2025-12-01`.
pub struct DayLabel<'a>(pub &'a Date);

impl<'a> fmt::Display for DayLabel<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %Y-%m-%d"))
    }
}
