//! Free-text duration entry with optional relative adjustment.

use jiff::{Span, SpanRelativeTo};
use log::debug;

/// How the entered text relates to the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Adjustment {
    Absolute,
    Add,
    Subtract,
}

/// Parses free-text duration input against an optional base value.
///
/// - `"5h 30m"` (or `"5 hours 30 minutes"`, `"PT5H30M"`, `"2d"`) replaces the value;
/// - `"+3h20m"` adds to `base`;
/// - `"-2h20m"` subtracts from `base`, stopping at zero.
///
/// Returns `None` for blank or unparseable input, meaning "no change". The
/// result is never negative and `base` defaults to zero.
pub fn parse_flexible(input: &str, base: Option<u64>) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (adjustment, expression) = if let Some(rest) = trimmed.strip_prefix('+') {
        (Adjustment::Add, rest)
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        (Adjustment::Subtract, rest)
    } else {
        (Adjustment::Absolute, trimmed)
    };

    let delta = parse_expression(expression)?;
    let base = base.unwrap_or(0);

    Some(match adjustment {
        Adjustment::Absolute => delta,
        Adjustment::Add => base.saturating_add(delta),
        Adjustment::Subtract => base.saturating_sub(delta),
    })
}

/// Parses an unsigned duration expression, flooring to whole seconds.
///
/// Days and weeks count as 24 and 168 hours. Months and years are rejected.
pub fn parse_expression(expression: &str) -> Option<u64> {
    let expression = expression.trim();
    if expression.is_empty() {
        return None;
    }

    let span = match expression.parse::<Span>() {
        Ok(span) => span,
        Err(e) => {
            debug!("Unparseable duration expression '{expression}': {e}");
            return None;
        }
    };
    if span.is_negative() {
        debug!("Rejected signed duration expression '{expression}'");
        return None;
    }

    match span.to_duration(SpanRelativeTo::days_are_24_hours()) {
        Ok(duration) => u64::try_from(duration.as_secs()).ok(),
        Err(e) => {
            debug!("Duration expression '{expression}' has no fixed length: {e}");
            None
        }
    }
}
