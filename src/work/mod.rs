//! Work-day arithmetic: clock times, durations and the logout calculator.

pub mod calculator;
pub mod duration;
pub mod time_of_day;

use crate::error::{CalcError, Field};

/// Split `HH:MM` text into its two numeric components.
///
/// Both segments must be non-empty runs of ASCII digits; signs, spaces inside
/// the value and extra segments are rejected.
pub(crate) fn split_hh_mm(field: Field, text: &str) -> Result<(u32, u32), CalcError> {
    let malformed = |reason: &str| CalcError::MalformedInput {
        field,
        value: text.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = text.trim();
    let (hours, minutes) = trimmed
        .split_once(':')
        .ok_or_else(|| malformed("expected HH:MM"))?;

    let parse_segment = |segment: &str, name: &str| -> Result<u32, CalcError> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(&format!("{} is not a number", name)));
        }
        segment
            .parse::<u32>()
            .map_err(|_| malformed(&format!("{} is out of range", name)))
    };

    Ok((parse_segment(hours, "hour")?, parse_segment(minutes, "minute")?))
}
