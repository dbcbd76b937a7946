//! Duration outcome columns and their spreadsheet rendering.
//!
//! The hours-owed and overtime-hours columns of an export row mix genuine
//! `HH:MM` durations with an empty marker and two short error tokens. This
//! module models that union as the tagged variant [`HoursOutcome`], with
//! explicit conversions for display (the column text) and for aggregation
//! (duration-or-zero).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column token for a row whose punch times failed format validation.
pub const FORMAT_ERROR_CODE: &str = "INV_FORMAT";

/// Column token for a row whose punch times are chronologically inconsistent.
pub const SEQUENCE_ERROR_CODE: &str = "INV_SEQ";

/// The value of a computed duration column: a genuine duration in whole
/// minutes, an empty cell, or one of the two error codes.
///
/// Serializes as the exact column text (`""`, `"HH:MM"`, `"INV_FORMAT"`,
/// `"INV_SEQ"`), so an evaluated record round-trips through the same shape
/// the surrounding spreadsheet tooling reads and writes. Unrecognized text
/// deserializes as [`HoursOutcome::Empty`] rather than failing.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::HoursOutcome;
///
/// assert_eq!(HoursOutcome::Duration(48).to_string(), "00:48");
/// assert_eq!(HoursOutcome::Empty.to_string(), "");
/// assert_eq!(HoursOutcome::FormatError.to_string(), "INV_FORMAT");
/// assert_eq!(HoursOutcome::SequenceError.minutes_or_zero(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HoursOutcome {
    /// No value; the day carried no evaluable attendance data.
    Empty,
    /// A duration in whole minutes (zero is a meaningful value: quota met).
    Duration(i64),
    /// The row failed punch-time format validation.
    FormatError,
    /// The row's punches are not in a chronologically valid order.
    SequenceError,
}

impl HoursOutcome {
    /// Builds a duration outcome from whole seconds, truncating (not
    /// rounding) the seconds component down to whole minutes.
    pub fn from_seconds_truncated(seconds: i64) -> HoursOutcome {
        HoursOutcome::Duration(seconds.max(0) / 60)
    }

    /// Returns the duration in minutes, if this is a genuine duration.
    pub fn minutes(&self) -> Option<i64> {
        match self {
            HoursOutcome::Duration(minutes) => Some(*minutes),
            _ => None,
        }
    }

    /// The aggregation view: genuine durations in minutes, everything else
    /// (empty cell or error code) as a zero-duration contribution.
    pub fn minutes_or_zero(&self) -> i64 {
        self.minutes().unwrap_or(0)
    }

    /// Returns true if this is a duration strictly greater than zero.
    pub fn is_positive_duration(&self) -> bool {
        matches!(self, HoursOutcome::Duration(minutes) if *minutes > 0)
    }

    /// Returns true if this is one of the two error codes.
    pub fn is_error(&self) -> bool {
        matches!(self, HoursOutcome::FormatError | HoursOutcome::SequenceError)
    }
}

impl fmt::Display for HoursOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoursOutcome::Empty => Ok(()),
            HoursOutcome::Duration(minutes) => f.write_str(&format_hhmm(*minutes)),
            HoursOutcome::FormatError => f.write_str(FORMAT_ERROR_CODE),
            HoursOutcome::SequenceError => f.write_str(SEQUENCE_ERROR_CODE),
        }
    }
}

impl From<HoursOutcome> for String {
    fn from(outcome: HoursOutcome) -> String {
        outcome.to_string()
    }
}

impl From<String> for HoursOutcome {
    fn from(text: String) -> HoursOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return HoursOutcome::Empty;
        }
        if trimmed == FORMAT_ERROR_CODE {
            return HoursOutcome::FormatError;
        }
        if trimmed == SEQUENCE_ERROR_CODE {
            return HoursOutcome::SequenceError;
        }
        match parse_duration_minutes(trimmed) {
            Some(minutes) => HoursOutcome::Duration(minutes),
            None => HoursOutcome::Empty,
        }
    }
}

/// Renders non-negative whole minutes as `HH:MM`.
///
/// The hours component has no fixed width cap: aggregated totals may exceed
/// 24 hours and render as e.g. `"123:05"`.
pub fn format_hhmm(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Renders signed whole minutes as `±HH:MM`, for aggregate totals.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::format_signed_hhmm;
///
/// assert_eq!(format_signed_hhmm(90), "01:30");
/// assert_eq!(format_signed_hhmm(-48), "-00:48");
/// ```
pub fn format_signed_hhmm(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let magnitude = minutes.abs();
    format!("{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
}

/// Parses `H:MM` / `HH:MM` (or wider hour fields for aggregated totals)
/// into whole minutes.
fn parse_duration_minutes(text: &str) -> Option<i64> {
    let (hour_part, minute_part) = text.split_once(':')?;
    if hour_part.is_empty() || minute_part.len() != 2 {
        return None;
    }
    if !hour_part.bytes().all(|b| b.is_ascii_digit())
        || !minute_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let hours: i64 = hour_part.parse().ok()?;
    let minutes: i64 = minute_part.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}
