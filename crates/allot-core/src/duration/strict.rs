//! Strict `5h 30m` parser used to validate structured form input.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AllotError, Result};

/// Up to three hour digits and up to two minute digits, each optional.
const FIXED_PATTERN: &str = r"^(?:([0-9]{1,3})h)?\s*(?:([0-9]{1,2})m)?$";

fn fixed_regex() -> &'static Regex {
    static FIXED: OnceLock<Regex> = OnceLock::new();
    FIXED.get_or_init(|| Regex::new(FIXED_PATTERN).expect("fixed duration pattern is valid"))
}

/// Parses `"{h}h {m}m"` where either part may be omitted.
///
/// Surrounding whitespace is ignored. Blank input is rejected because the
/// field is required, and any text outside the grammar is reported as an
/// [`AllotError::InvalidDuration`] for inline display.
///
/// ```rust
/// use allot_core::duration::parse_fixed;
///
/// assert_eq!(parse_fixed("5h 30m").unwrap(), 19_800);
/// assert_eq!(parse_fixed("45m").unwrap(), 2700);
/// assert!(parse_fixed("5 hours").is_err());
/// ```
pub fn parse_fixed(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AllotError::invalid_duration(text).with_reason("a duration is required"));
    }

    let captures = fixed_regex().captures(trimmed).ok_or_else(|| {
        AllotError::invalid_duration(text).with_reason("expected hours and minutes like 5h 30m")
    })?;

    let component = |index: usize| -> Result<u64> {
        captures.get(index).map_or(Ok(0), |m| {
            m.as_str().parse::<u64>().map_err(|e| {
                AllotError::invalid_duration(text).with_reason(format!("bad number: {e}"))
            })
        })
    };
    let hours = component(1)?;
    let minutes = component(2)?;

    Ok(hours * 3600 + minutes * 60)
}

/// Whether `text` is accepted by [`parse_fixed`].
pub fn is_valid_fixed(text: &str) -> bool {
    parse_fixed(text).is_ok()
}
