//! Week boundaries under a configurable first day of week.
//!
//! Week starts are local midnights. The free functions work in elapsed time:
//! [`week_end`] is the last millisecond before `start + 168h` and
//! [`shift_week`] moves by exact 168-hour steps. [`Week`] works in civil
//! dates instead, so its start stays at local midnight across DST changes.

use jiff::{civil::Date, SignedDuration, Timestamp, ToSpan, Zoned};

use crate::{error::Result, models::WeekStart};

/// Length of one week as elapsed time.
pub const WEEK: SignedDuration = SignedDuration::from_hours(7 * 24);

/// Returns local midnight of the most recent `convention` weekday on or
/// before `date`.
///
/// The time of day of `date` is ignored and the result keeps its time zone.
/// Applying the function to its own output returns the same instant.
pub fn week_start(date: &Zoned, convention: WeekStart) -> Result<Zoned> {
    let start = week_start_date(date.date(), convention)?;
    Ok(start.to_zoned(date.time_zone().clone())?)
}

/// Civil-date form of [`week_start`].
pub fn week_start_date(date: Date, convention: WeekStart) -> Result<Date> {
    let back = i64::from(convention.days_since_start(date.weekday()));
    Ok(date.checked_sub(back.days())?)
}

/// The last instant of the week beginning at `week_start`.
pub fn week_end(week_start: &Zoned) -> Result<Zoned> {
    Ok(week_start.checked_add(WEEK - SignedDuration::from_millis(1))?)
}

/// Moves a week start by `weeks` whole weeks (negative moves back).
pub fn shift_week(week_start: &Zoned, weeks: i32) -> Result<Zoned> {
    Ok(week_start.checked_add(WEEK * weeks)?)
}

/// A concrete seven-day window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    start: Zoned,
    convention: WeekStart,
}

impl Week {
    /// The week containing `date`.
    pub fn containing(date: &Zoned, convention: WeekStart) -> Result<Self> {
        Ok(Self {
            start: week_start(date, convention)?,
            convention,
        })
    }

    /// The week containing the current moment in the system time zone.
    pub fn current(convention: WeekStart) -> Result<Self> {
        Self::containing(&Zoned::now(), convention)
    }

    pub fn start(&self) -> &Zoned {
        &self.start
    }

    /// The last instant before the next week's local midnight.
    pub fn end(&self) -> Result<Zoned> {
        Ok(self.next()?.start.checked_sub(SignedDuration::from_millis(1))?)
    }

    pub fn convention(&self) -> WeekStart {
        self.convention
    }

    /// The week `weeks` weeks away from this one, counted in calendar days.
    pub fn shifted(&self, weeks: i32) -> Result<Self> {
        let date = self
            .start
            .date()
            .checked_add((i64::from(weeks) * 7).days())?;
        Ok(Self {
            start: date.to_zoned(self.start.time_zone().clone())?,
            convention: self.convention,
        })
    }

    pub fn next(&self) -> Result<Self> {
        self.shifted(1)
    }

    pub fn previous(&self) -> Result<Self> {
        self.shifted(-1)
    }

    /// Whether `instant` falls inside `[start, end]`.
    pub fn contains(&self, instant: Timestamp) -> bool {
        let start = self.start.timestamp();
        match self.end() {
            Ok(end) => start <= instant && instant <= end.timestamp(),
            Err(_) => start <= instant,
        }
    }

    /// The seven civil dates of the week, in order.
    pub fn days(&self) -> Vec<Date> {
        let first = self.start.date();
        (0..7i64)
            .filter_map(|offset| first.checked_add(offset.days()).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use jiff::{
        civil::{date, Weekday},
        tz::{self, TimeZone},
    };

    use super::*;

    fn utc(y: i16, m: i8, d: i8, h: i8, min: i8) -> Zoned {
        date(y, m, d).at(h, min, 0, 0).to_zoned(TimeZone::UTC).unwrap()
    }

    #[test]
    fn test_monday_convention_from_tuesday() {
        let start = week_start(&utc(2025, 12, 2, 15, 45), WeekStart::Monday).unwrap();
        assert_eq!(start.date(), date(2025, 12, 1));
        assert_eq!((start.hour(), start.minute(), start.second()), (0, 0, 0));
    }

    #[test]
    fn test_sunday_convention_from_tuesday() {
        let start = week_start(&utc(2025, 12, 2, 8, 0), WeekStart::Sunday).unwrap();
        assert_eq!(start.date(), date(2025, 11, 30));
        assert_eq!(start.weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_start_day_maps_to_itself() {
        let monday_evening = utc(2025, 12, 1, 23, 59);
        let start = week_start(&monday_evening, WeekStart::Monday).unwrap();
        assert_eq!(start.date(), date(2025, 12, 1));

        let sunday_morning = utc(2025, 11, 30, 0, 1);
        let start = week_start(&sunday_morning, WeekStart::Sunday).unwrap();
        assert_eq!(start.date(), date(2025, 11, 30));
    }

    #[test]
    fn test_sunday_under_monday_convention() {
        let start = week_start(&utc(2025, 12, 7, 12, 0), WeekStart::Monday).unwrap();
        assert_eq!(start.date(), date(2025, 12, 1));
    }

    #[test]
    fn test_crosses_year_boundary() {
        let start = week_start(&utc(2026, 1, 1, 9, 0), WeekStart::Monday).unwrap();
        assert_eq!(start.date(), date(2025, 12, 29));

        let start = week_start(&utc(2026, 1, 2, 9, 0), WeekStart::Sunday).unwrap();
        assert_eq!(start.date(), date(2025, 12, 28));
    }

    #[test]
    fn test_crosses_month_boundary_in_leap_year() {
        let start = week_start(&utc(2024, 3, 2, 9, 0), WeekStart::Monday).unwrap();
        assert_eq!(start.date(), date(2024, 2, 26));
    }

    #[test]
    fn test_idempotent_for_every_day_of_a_fortnight() {
        for convention in [WeekStart::Monday, WeekStart::Sunday] {
            for day in 1..=14 {
                let input = utc(2025, 12, day, 17, 30);
                let once = week_start(&input, convention).unwrap();
                let twice = week_start(&once, convention).unwrap();
                assert_eq!(once, twice);
                assert_eq!(once.weekday(), convention.weekday());
            }
        }
    }

    #[test]
    fn test_keeps_time_zone_of_input() {
        let zone = TimeZone::fixed(tz::offset(-5));
        let input = date(2025, 12, 2).at(22, 0, 0, 0).to_zoned(zone).unwrap();
        let start = week_start(&input, WeekStart::Monday).unwrap();
        assert_eq!(start.offset(), tz::offset(-5));
        assert_eq!(start.date(), date(2025, 12, 1));
        assert_eq!(start.hour(), 0);
    }

    #[test]
    fn test_week_end_is_one_millisecond_before_next_week() {
        let start = week_start(&utc(2025, 12, 2, 0, 0), WeekStart::Monday).unwrap();
        let end = week_end(&start).unwrap();
        let span = end.timestamp().duration_since(start.timestamp());
        assert_eq!(span, SignedDuration::from_hours(168) - SignedDuration::from_millis(1));
        assert_eq!(end.date(), date(2025, 12, 7));
        assert_eq!(
            (end.hour(), end.minute(), end.second(), end.millisecond()),
            (23, 59, 59, 999)
        );
    }

    #[test]
    fn test_shift_week() {
        let start = week_start(&utc(2025, 12, 2, 0, 0), WeekStart::Monday).unwrap();
        assert_eq!(shift_week(&start, 1).unwrap().date(), date(2025, 12, 8));
        assert_eq!(shift_week(&start, -1).unwrap().date(), date(2025, 11, 24));
        assert_eq!(shift_week(&start, 5).unwrap().date(), date(2026, 1, 5));
        let back = shift_week(&shift_week(&start, 3).unwrap(), -3).unwrap();
        assert_eq!(back, start);
    }

    #[test]
    fn test_week_navigation_and_contains() {
        let week = Week::containing(&utc(2025, 12, 4, 10, 0), WeekStart::Monday).unwrap();
        assert_eq!(week.start().date(), date(2025, 12, 1));
        assert_eq!(week.next().unwrap().start().date(), date(2025, 12, 8));
        assert_eq!(week.previous().unwrap().start().date(), date(2025, 11, 24));
        assert!(week.contains(utc(2025, 12, 7, 23, 59).timestamp()));
        assert!(!week.contains(utc(2025, 12, 8, 0, 0).timestamp()));
        assert!(!week.contains(utc(2025, 11, 30, 23, 59).timestamp()));
    }

    fn berlin() -> TimeZone {
        TimeZone::posix("CET-1CEST,M3.5.0,M10.5.0/3").unwrap()
    }

    #[test]
    fn test_week_navigation_across_dst_end() {
        let input = date(2025, 10, 22).at(12, 0, 0, 0).to_zoned(berlin()).unwrap();
        let week = Week::containing(&input, WeekStart::Monday).unwrap();
        assert_eq!(week.start().offset(), tz::offset(2));

        let next = week.next().unwrap();
        assert_eq!(next.start().date(), date(2025, 10, 27));
        assert_eq!(next.start().hour(), 0);
        assert_eq!(next.start().offset(), tz::offset(1));
        assert_eq!(next.days()[0], date(2025, 10, 27));
        assert_eq!(next.previous().unwrap(), week);

        let end = week.end().unwrap();
        assert_eq!(end.date(), date(2025, 10, 26));
        assert_eq!((end.hour(), end.minute()), (23, 59));
        assert!(!week.contains(next.start().timestamp()));
        assert!(next.contains(next.start().timestamp()));

        let raw = shift_week(week.start(), 1).unwrap();
        assert_eq!(raw.date(), date(2025, 10, 26));
        assert_eq!(raw.hour(), 23);
    }

    #[test]
    fn test_week_navigation_across_dst_start() {
        let input = date(2025, 4, 2).at(8, 0, 0, 0).to_zoned(berlin()).unwrap();
        let week = Week::containing(&input, WeekStart::Sunday).unwrap();
        assert_eq!(week.start().date(), date(2025, 3, 30));

        let previous = week.previous().unwrap();
        assert_eq!(previous.start().date(), date(2025, 3, 23));
        assert_eq!(previous.start().hour(), 0);
        assert_eq!(week.shifted(-5).unwrap().start().hour(), 0);
    }

    #[test]
    fn test_week_days() {
        let week = Week::containing(&utc(2025, 12, 2, 10, 0), WeekStart::Sunday).unwrap();
        let days = week.days();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2025, 11, 30));
        assert_eq!(days[6], date(2025, 12, 6));
    }
}
