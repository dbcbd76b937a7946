//! Punch time parsing and normalization.
//!
//! This module defines the [`Punch`] type for a single punch-clock field:
//! either a wall-clock time with minute precision, or an explicit "no value"
//! marker. Export files from punch devices use a handful of sentinel tokens
//! for a missing punch; those are normalized to [`Punch::Absent`] here.

use chrono::NaiveTime;
use thiserror::Error;

/// Sentinel tokens a punch device export uses for a missing punch.
///
/// Matched case-insensitively after trimming; the empty string is always
/// treated as absent as well.
pub const OMISSION_MARKERS: [&str; 4] = ["omissão", "omissao", "omission", "nan"];

/// A present punch value that is not a valid minute-precision time.
///
/// Carries the offending text so callers can build a diagnostic from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid HH:MM punch time: {value:?}")]
pub struct PunchParseError {
    /// The raw text that failed to parse.
    pub value: String,
}

/// One punch-clock field: absent, or a wall-clock time with minute precision.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::Punch;
/// use chrono::NaiveTime;
///
/// assert_eq!(Punch::parse("08:30").unwrap(), Punch::At(NaiveTime::from_hms_opt(8, 30, 0).unwrap()));
/// assert_eq!(Punch::parse("  Omissão ").unwrap(), Punch::Absent);
/// assert_eq!(Punch::parse("").unwrap(), Punch::Absent);
/// assert!(Punch::parse("25:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punch {
    /// The device recorded no value for this field.
    Absent,
    /// The device recorded a punch at this wall-clock time.
    At(NaiveTime),
}

impl Punch {
    /// Parses a raw export cell into a punch.
    ///
    /// The text is trimmed first. Omission markers (see [`OMISSION_MARKERS`])
    /// and the empty string normalize to [`Punch::Absent`]. Anything else
    /// must be exact `H:MM` or `HH:MM` with hour 0-23 and minute 0-59; no
    /// seconds component is accepted.
    pub fn parse(raw: &str) -> Result<Punch, PunchParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || is_omission_marker(trimmed) {
            return Ok(Punch::Absent);
        }
        parse_minute_time(trimmed)
            .map(Punch::At)
            .ok_or_else(|| PunchParseError {
                value: raw.to_string(),
            })
    }

    /// Returns true if the device recorded no value.
    pub fn is_absent(&self) -> bool {
        matches!(self, Punch::Absent)
    }

    /// Returns true if the punch is exactly midnight (`00:00`).
    ///
    /// Punch devices export all-zero rows for days with no record, so a
    /// zero punch is treated like an absent one in several policy branches.
    pub fn is_zero(&self) -> bool {
        matches!(self, Punch::At(t) if *t == NaiveTime::MIN)
    }

    /// Returns the wall-clock time, if present.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Punch::Absent => None,
            Punch::At(t) => Some(*t),
        }
    }
}

/// Returns true if the trimmed text matches an omission marker,
/// case-insensitively.
pub fn is_omission_marker(trimmed: &str) -> bool {
    let lowered = trimmed.to_lowercase();
    OMISSION_MARKERS.iter().any(|marker| lowered == *marker)
}

/// Parses exact `H:MM` / `HH:MM`. Two-digit minutes are required; a seconds
/// component or any trailing text is rejected.
fn parse_minute_time(text: &str) -> Option<NaiveTime> {
    let (hour_part, minute_part) = text.split_once(':')?;
    if hour_part.is_empty() || hour_part.len() > 2 || minute_part.len() != 2 {
        return None;
    }
    if !hour_part.bytes().all(|b| b.is_ascii_digit())
        || !minute_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let hour: u32 = hour_part.parse().ok()?;
    let minute: u32 = minute_part.parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parses_two_digit_time() {
        assert_eq!(Punch::parse("08:30").unwrap(), Punch::At(time(8, 30)));
        assert_eq!(Punch::parse("23:59").unwrap(), Punch::At(time(23, 59)));
        assert_eq!(Punch::parse("00:00").unwrap(), Punch::At(time(0, 0)));
    }

    #[test]
    fn test_parses_single_digit_hour() {
        assert_eq!(Punch::parse("9:05").unwrap(), Punch::At(time(9, 5)));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(Punch::parse("  17:00  ").unwrap(), Punch::At(time(17, 0)));
    }

    #[test]
    fn test_empty_string_is_absent() {
        assert_eq!(Punch::parse("").unwrap(), Punch::Absent);
        assert_eq!(Punch::parse("   ").unwrap(), Punch::Absent);
    }

    #[test]
    fn test_omission_markers_are_absent() {
        assert_eq!(Punch::parse("Omissão").unwrap(), Punch::Absent);
        assert_eq!(Punch::parse("OMISSAO").unwrap(), Punch::Absent);
        assert_eq!(Punch::parse("omission").unwrap(), Punch::Absent);
        assert_eq!(Punch::parse("NaN").unwrap(), Punch::Absent);
        assert_eq!(Punch::parse(" nan ").unwrap(), Punch::Absent);
    }

    #[test]
    fn test_rejects_out_of_range_components() {
        assert!(Punch::parse("24:00").is_err());
        assert!(Punch::parse("12:60").is_err());
        assert!(Punch::parse("99:99").is_err());
    }

    #[test]
    fn test_rejects_malformed_text() {
        assert!(Punch::parse("INVALIDO").is_err());
        assert!(Punch::parse("8h30").is_err());
        assert!(Punch::parse("08:3").is_err());
        assert!(Punch::parse("08:300").is_err());
        assert!(Punch::parse("108:30").is_err());
        assert!(Punch::parse("08:30:00").is_err());
        assert!(Punch::parse("-1:30").is_err());
        assert!(Punch::parse(":30").is_err());
    }

    #[test]
    fn test_parse_error_carries_raw_value() {
        let error = Punch::parse("INVALIDO").unwrap_err();
        assert_eq!(error.value, "INVALIDO");
        assert!(error.to_string().contains("INVALIDO"));
    }

    #[test]
    fn test_is_zero_only_for_midnight() {
        assert!(Punch::parse("00:00").unwrap().is_zero());
        assert!(!Punch::parse("00:01").unwrap().is_zero());
        assert!(!Punch::Absent.is_zero());
    }

    #[test]
    fn test_time_accessor() {
        assert_eq!(Punch::At(time(7, 15)).time(), Some(time(7, 15)));
        assert_eq!(Punch::Absent.time(), None);
    }
}
