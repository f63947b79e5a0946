//! Hours-and-minutes rendering of second counts.

use std::fmt;

/// Seconds rendered as `{hours}h {minutes}m`.
///
/// Days fold into hours and leftover seconds are dropped. A negative value is
/// prefixed with `-` unless [`HoursMinutes::absolute`] is set or the value
/// truncates to `0h 0m`.
///
/// ```rust
/// use allot_core::display::HoursMinutes;
///
/// assert_eq!(HoursMinutes::new(184_500).to_string(), "51h 15m");
/// assert_eq!(HoursMinutes::new(-5400).to_string(), "-1h 30m");
/// assert_eq!(HoursMinutes::new(-5400).absolute(true).to_string(), "1h 30m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursMinutes {
    seconds: i64,
    absolute: bool,
}

impl HoursMinutes {
    pub fn new(seconds: i64) -> Self {
        Self {
            seconds,
            absolute: false,
        }
    }

    /// Drops the sign of negative values.
    pub fn absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }
}

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.seconds.unsigned_abs();
        let hours = magnitude / 3600;
        let minutes = magnitude % 3600 / 60;
        let sign = if self.seconds < 0 && !self.absolute && (hours > 0 || minutes > 0) {
            "-"
        } else {
            ""
        };
        write!(f, "{sign}{hours}h {minutes}m")
    }
}
