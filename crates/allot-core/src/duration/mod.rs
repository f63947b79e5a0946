//! Conversion between human-entered duration text and whole seconds.
//!
//! Two parsers are provided and deliberately kept apart:
//!
//! - [`strict`]: the form-field grammar `5h 30m`, validated with a regular
//!   expression and reporting a validation error on mismatch.
//! - [`flexible`]: free-text entry that accepts natural-language durations and
//!   `+`/`-` adjustments relative to an existing value, returning `None` for
//!   "leave unchanged".
//!
//! Formatting always renders `{hours}h {minutes}m`, folding days into hours.
//!
//! ```rust
//! use allot_core::duration::{format, parse_flexible};
//!
//! let seconds = parse_flexible("5h 30m", None).unwrap();
//! assert_eq!(seconds, 19_800);
//! assert_eq!(format(seconds as i64, false), "5h 30m");
//! assert_eq!(parse_flexible("+80m", Some(3600)), Some(8400));
//! ```

pub mod flexible;
pub mod strict;

use jiff::Timestamp;

use crate::{
    display::HoursMinutes,
    error::{AllotError, Result},
};

pub use flexible::parse_flexible;
pub use strict::parse_fixed;

/// Formats signed seconds as `"{hours}h {minutes}m"`.
///
/// Negative values keep their sign unless `absolute` is set.
pub fn format(seconds: i64, absolute: bool) -> String {
    HoursMinutes::new(seconds).absolute(absolute).to_string()
}

/// Formats an optional duration, rendering `None` as the empty string.
pub fn format_optional(seconds: Option<i64>, absolute: bool) -> String {
    seconds.map(|s| format(s, absolute)).unwrap_or_default()
}

/// Wall-clock seconds elapsed from `start` until `end`, or until now.
///
/// An end before the start yields zero.
pub fn seconds_between(start: Timestamp, end: Option<Timestamp>) -> u64 {
    let end = end.unwrap_or_else(Timestamp::now);
    end.duration_since(start).as_secs().max(0) as u64
}

/// Like [`seconds_between`] but takes RFC 3339 timestamps, e.g.
/// `2025-12-02T09:00:00Z`.
pub fn seconds_between_iso(start: &str, end: Option<&str>) -> Result<u64> {
    let start = parse_timestamp("start", start)?;
    let end = end.map(|e| parse_timestamp("end", e)).transpose()?;
    Ok(seconds_between(start, end))
}

fn parse_timestamp(field: &str, text: &str) -> Result<Timestamp> {
    text.trim().parse::<Timestamp>().map_err(|e| {
        AllotError::invalid_input(field).with_reason(format!("'{text}' is not a timestamp: {e}"))
    })
}
