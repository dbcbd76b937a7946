//! Per-record evaluation: owed hours, overtime hours, and overtime value.
//!
//! [`evaluate_record`] is a pure function of one record and the live
//! configuration. It never fails: malformed or inconsistent punches become
//! error-code outcomes plus a diagnostic on the affected record, so a bad
//! row cannot abort a whole-table pass.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{AttendanceRecord, Diagnostic, HoursOutcome, Punch};

use super::schedule::{DaySchedule, WorkedOutcome};

/// Fixed divisor converting a monthly base pay into an hourly rate
/// (standard monthly hours under the CLT labor code).
pub const MONTHLY_STANDARD_HOURS: Decimal = Decimal::from_parts(220, 0, 0, false, 0);

/// Tolerance absorbing sub-second rounding when comparing worked time to
/// the quota: a shortfall within one second still counts as quota met.
const SHORTFALL_TOLERANCE_SECONDS: i64 = 1;

/// The computed fields produced by evaluating one record.
///
/// Exactly one of `hours_owed` / `overtime_hours` is `00:00` whenever both
/// are genuine durations; both carry the same error code for a failed row;
/// both are empty for a day with no evaluable attendance data.
#[derive(Debug, Clone, PartialEq)]
pub struct RowEvaluation {
    /// Shortfall against the daily quota.
    pub hours_owed: HoursOutcome,
    /// Excess over the daily quota.
    pub overtime_hours: HoursOutcome,
    /// Diagnostics to attach to the record's note.
    pub diagnostics: Vec<Diagnostic>,
    /// Monetary value of the overtime (zero when not applicable).
    pub overtime_value: Decimal,
}

impl RowEvaluation {
    fn empty(diagnostics: Vec<Diagnostic>) -> RowEvaluation {
        RowEvaluation {
            hours_owed: HoursOutcome::Empty,
            overtime_hours: HoursOutcome::Empty,
            diagnostics,
            overtime_value: Decimal::ZERO,
        }
    }

    fn format_error() -> RowEvaluation {
        RowEvaluation {
            hours_owed: HoursOutcome::FormatError,
            overtime_hours: HoursOutcome::FormatError,
            diagnostics: vec![Diagnostic::InvalidTimeFormat],
            overtime_value: Decimal::ZERO,
        }
    }

    fn sequence_error() -> RowEvaluation {
        RowEvaluation {
            hours_owed: HoursOutcome::SequenceError,
            overtime_hours: HoursOutcome::SequenceError,
            diagnostics: vec![Diagnostic::InvalidSequence],
            overtime_value: Decimal::ZERO,
        }
    }

    /// Writes the computed fields back onto a record.
    ///
    /// The engine-owned diagnostic list on the note is replaced; user text
    /// is preserved. Identity and timing fields are untouched.
    pub fn apply_to(&self, record: &mut AttendanceRecord) {
        record.hours_owed = self.hours_owed;
        record.overtime_hours = self.overtime_hours;
        record.overtime_value = self.overtime_value;
        record.note.set_diagnostics(self.diagnostics.clone());
    }
}

/// Evaluates one record against the live configuration.
///
/// # Example
///
/// ```
/// use timeclock_engine::config::EngineConfig;
/// use timeclock_engine::evaluation::evaluate_record;
/// use timeclock_engine::models::{AttendanceRecord, HoursOutcome, RawRecord};
///
/// let config = EngineConfig::default(); // 8.8 h quota
/// let record = AttendanceRecord::from_raw(
///     RawRecord {
///         clock_in: "08:00".to_string(),
///         lunch_out: "12:00".to_string(),
///         lunch_in: "13:00".to_string(),
///         clock_out: "17:48".to_string(),
///         ..RawRecord::default()
///     },
///     &config,
/// );
///
/// let evaluation = evaluate_record(&record, &config);
/// assert_eq!(evaluation.hours_owed, HoursOutcome::Duration(0));
/// assert_eq!(evaluation.overtime_hours, HoursOutcome::Duration(0));
/// ```
pub fn evaluate_record(record: &AttendanceRecord, config: &EngineConfig) -> RowEvaluation {
    let punches = [
        Punch::parse(&record.clock_in),
        Punch::parse(&record.lunch_out),
        Punch::parse(&record.lunch_in),
        Punch::parse(&record.clock_out),
    ];
    let [clock_in, lunch_out, lunch_in, clock_out] = match punches {
        [Ok(a), Ok(b), Ok(c), Ok(d)] => [a, b, c, d],
        _ => return RowEvaluation::format_error(),
    };

    let schedule = DaySchedule::classify(clock_in, lunch_out, lunch_in, clock_out);
    let worked_seconds = match schedule.worked_seconds() {
        WorkedOutcome::Blank => return RowEvaluation::empty(Vec::new()),
        WorkedOutcome::Incomplete { any_present } => {
            let diagnostics = if any_present {
                vec![Diagnostic::IncompleteSchedule]
            } else {
                Vec::new()
            };
            return RowEvaluation::empty(diagnostics);
        }
        WorkedOutcome::OutOfSequence => return RowEvaluation::sequence_error(),
        WorkedOutcome::Seconds(seconds) => seconds,
    };

    let diff_seconds = worked_seconds - config.quota_seconds();
    let (hours_owed, overtime_hours) = if diff_seconds < -SHORTFALL_TOLERANCE_SECONDS {
        (
            HoursOutcome::from_seconds_truncated(-diff_seconds),
            HoursOutcome::Duration(0),
        )
    } else {
        (
            HoursOutcome::Duration(0),
            HoursOutcome::from_seconds_truncated(diff_seconds.max(0)),
        )
    };

    RowEvaluation {
        hours_owed,
        overtime_hours,
        diagnostics: Vec::new(),
        overtime_value: overtime_value(record.base_pay, overtime_hours, config),
    }
}

/// Computes the monetary value of a positive overtime duration.
///
/// Applies only when base pay is present and positive; the hourly rate is
/// the monthly base pay over [`MONTHLY_STANDARD_HOURS`], and the result is
/// rounded to 2 decimal places.
fn overtime_value(
    base_pay: Option<Decimal>,
    overtime_hours: HoursOutcome,
    config: &EngineConfig,
) -> Decimal {
    let Some(base_pay) = base_pay else {
        return Decimal::ZERO;
    };
    if base_pay <= Decimal::ZERO || !overtime_hours.is_positive_duration() {
        return Decimal::ZERO;
    }
    let minutes = overtime_hours.minutes_or_zero();
    let hourly_rate = base_pay / MONTHLY_STANDARD_HOURS;
    let decimal_hours = Decimal::from(minutes) / Decimal::from(60);
    (hourly_rate * config.overtime_multiplier * decimal_hours).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRecord;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config(quota: &str, multiplier: &str) -> EngineConfig {
        EngineConfig {
            daily_quota_hours: dec(quota),
            overtime_multiplier: dec(multiplier),
        }
    }

    fn record(
        clock_in: &str,
        lunch_out: &str,
        lunch_in: &str,
        clock_out: &str,
        base_pay: Option<&str>,
    ) -> AttendanceRecord {
        AttendanceRecord::from_raw(
            RawRecord {
                employee_id: "1".to_string(),
                name: "Test Employee".to_string(),
                area: "Test Area".to_string(),
                date: None,
                clock_in: clock_in.to_string(),
                lunch_out: lunch_out.to_string(),
                lunch_in: lunch_in.to_string(),
                clock_out: clock_out.to_string(),
                base_pay: base_pay.map(str::to_string),
                note: String::new(),
            },
            &EngineConfig::default(),
        )
    }

    // Exact quota: 8 h worked against an 8 h quota.
    #[test]
    fn test_full_day_meeting_quota() {
        let evaluation = evaluate_record(
            &record("09:00", "12:00", "13:00", "18:00", Some("2200")),
            &config("8.0", "1.5"),
        );

        assert_eq!(evaluation.hours_owed, HoursOutcome::Duration(0));
        assert_eq!(evaluation.overtime_hours, HoursOutcome::Duration(0));
        assert_eq!(evaluation.overtime_value, Decimal::ZERO);
        assert!(evaluation.diagnostics.is_empty());
    }

    // One hour over quota: value = 2200/220 * 1.5 * 1 = 15.00.
    #[test]
    fn test_full_day_with_overtime_and_value() {
        let evaluation = evaluate_record(
            &record("09:00", "12:00", "13:00", "19:00", Some("2200")),
            &config("8.0", "1.5"),
        );

        assert_eq!(evaluation.hours_owed, HoursOutcome::Duration(0));
        assert_eq!(evaluation.overtime_hours, HoursOutcome::Duration(60));
        assert_eq!(evaluation.overtime_value, dec("15.00"));
    }

    // 8 h worked against an 8.8 h quota: 48 minutes owed.
    #[test]
    fn test_no_lunch_day_with_shortfall() {
        let evaluation = evaluate_record(
            &record("08:00", "00:00", "00:00", "16:00", Some("2200")),
            &config("8.8", "1.5"),
        );

        assert_eq!(evaluation.hours_owed, HoursOutcome::Duration(48));
        assert_eq!(evaluation.overtime_hours, HoursOutcome::Duration(0));
        assert_eq!(evaluation.overtime_value, Decimal::ZERO);
    }

    #[test]
    fn test_malformed_punch_yields_format_error() {
        let evaluation = evaluate_record(
            &record("INVALIDO", "", "", "17:00", None),
            &config("8.0", "1.5"),
        );

        assert_eq!(evaluation.hours_owed, HoursOutcome::FormatError);
        assert_eq!(evaluation.overtime_hours, HoursOutcome::FormatError);
        assert_eq!(evaluation.overtime_value, Decimal::ZERO);
        assert_eq!(evaluation.diagnostics, vec![Diagnostic::InvalidTimeFormat]);
    }

    #[test]
    fn test_equal_in_and_out_yields_sequence_error() {
        let evaluation = evaluate_record(
            &record("10:00", "00:00", "00:00", "10:00", Some("2200")),
            &config("8.0", "1.5"),
        );

        assert_eq!(evaluation.hours_owed, HoursOutcome::SequenceError);
        assert_eq!(evaluation.overtime_hours, HoursOutcome::SequenceError);
        assert_eq!(evaluation.overtime_value, Decimal::ZERO);
        assert_eq!(evaluation.diagnostics, vec![Diagnostic::InvalidSequence]);
    }

    #[test]
    fn test_disordered_full_day_yields_sequence_error() {
        // Rolling each earlier punch to the next day cannot make this
        // chain non-decreasing: lunch-in still lands before lunch-out.
        let evaluation = evaluate_record(
            &record("08:00", "07:00", "06:00", "05:00", None),
            &config("8.0", "1.5"),
        );

        assert_eq!(evaluation.hours_owed, HoursOutcome::SequenceError);
        assert_eq!(evaluation.overtime_hours, HoursOutcome::SequenceError);
        assert_eq!(evaluation.diagnostics, vec![Diagnostic::InvalidSequence]);
    }

    #[test]
    fn test_all_zero_day_is_a_non_event() {
        let evaluation = evaluate_record(
            &record("00:00", "00:00", "00:00", "00:00", Some("2200")),
            &config("8.0", "1.5"),
        );

        assert_eq!(evaluation.hours_owed, HoursOutcome::Empty);
        assert_eq!(evaluation.overtime_hours, HoursOutcome::Empty);
        assert_eq!(evaluation.overtime_value, Decimal::ZERO);
        assert!(evaluation.diagnostics.is_empty());
    }

    #[test]
    fn test_all_absent_day_is_a_non_event_without_diagnostic() {
        let evaluation = evaluate_record(&record("", "", "", "", None), &config("8.0", "1.5"));

        assert_eq!(evaluation.hours_owed, HoursOutcome::Empty);
        assert_eq!(evaluation.overtime_hours, HoursOutcome::Empty);
        assert!(evaluation.diagnostics.is_empty());
    }

    #[test]
    fn test_partial_punches_get_incomplete_diagnostic() {
        let evaluation =
            evaluate_record(&record("08:00", "", "", "", None), &config("8.0", "1.5"));

        assert_eq!(evaluation.hours_owed, HoursOutcome::Empty);
        assert_eq!(evaluation.overtime_hours, HoursOutcome::Empty);
        assert_eq!(evaluation.diagnostics, vec![Diagnostic::IncompleteSchedule]);
    }

    #[test]
    fn test_omission_marker_counts_as_absent() {
        let evaluation = evaluate_record(
            &record("Omissão", "", "", "17:00", None),
            &config("8.0", "1.5"),
        );
        // One real punch only: incomplete, not a format error.
        assert_eq!(evaluation.hours_owed, HoursOutcome::Empty);
        assert_eq!(evaluation.diagnostics, vec![Diagnostic::IncompleteSchedule]);
    }

    #[test]
    fn test_overtime_without_base_pay_has_zero_value() {
        let evaluation = evaluate_record(
            &record("09:00", "12:00", "13:00", "19:00", None),
            &config("8.0", "1.5"),
        );

        assert_eq!(evaluation.overtime_hours, HoursOutcome::Duration(60));
        assert_eq!(evaluation.overtime_value, Decimal::ZERO);
    }

    #[test]
    fn test_overtime_with_zero_base_pay_has_zero_value() {
        let evaluation = evaluate_record(
            &record("09:00", "12:00", "13:00", "19:00", Some("0")),
            &config("8.0", "1.5"),
        );
        assert_eq!(evaluation.overtime_value, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_overtime_value_rounds_to_cents() {
        // 90 minutes over quota at base pay 1000:
        // 1000/220 * 1.5 * 1.5 = 10.2272... -> 10.23.
        let evaluation = evaluate_record(
            &record("09:00", "12:00", "13:00", "19:30", Some("1000")),
            &config("8.0", "1.5"),
        );

        assert_eq!(evaluation.overtime_hours, HoursOutcome::Duration(90));
        assert_eq!(evaluation.overtime_value, dec("10.23"));
    }

    #[test]
    fn test_shortfall_tolerance_absorbs_one_second() {
        // Quota 8.8003 h = 31681.08 s, truncated to 31681 s. Working
        // exactly 8:48:00 leaves a 1 s shortfall, inside the tolerance.
        let evaluation = evaluate_record(
            &record("08:00", "", "", "16:48", None),
            &config("8.8003", "1.5"),
        );

        assert_eq!(evaluation.hours_owed, HoursOutcome::Duration(0));
        assert_eq!(evaluation.overtime_hours, HoursOutcome::Duration(0));
    }

    #[test]
    fn test_apply_to_preserves_user_note_text() {
        let mut rec = record("INVALIDO", "", "", "17:00", None);
        rec.note.set_text("user comment");

        let evaluation = evaluate_record(&rec, &config("8.0", "1.5"));
        evaluation.apply_to(&mut rec);

        assert_eq!(rec.hours_owed, HoursOutcome::FormatError);
        assert_eq!(rec.note.render(), "user comment (invalid time format)");
        // Timing fields are untouched.
        assert_eq!(rec.clock_in, "INVALIDO");
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut rec = record("09:00", "12:00", "13:00", "19:00", Some("2200"));
        let cfg = config("8.0", "1.5");

        let first = evaluate_record(&rec, &cfg);
        first.apply_to(&mut rec);
        let snapshot = rec.clone();

        let second = evaluate_record(&rec, &cfg);
        second.apply_to(&mut rec);

        assert_eq!(rec, snapshot);
    }

    #[test]
    fn test_owed_and_overtime_are_mutually_exclusive() {
        for clock_out in ["16:00", "16:48", "18:00", "20:15"] {
            let evaluation = evaluate_record(
                &record("08:00", "", "", clock_out, Some("2000")),
                &config("8.8", "1.5"),
            );
            let owed = evaluation.hours_owed.minutes_or_zero();
            let overtime = evaluation.overtime_hours.minutes_or_zero();
            assert!(
                owed == 0 || overtime == 0,
                "owed {owed} and overtime {overtime} must not both be nonzero"
            );
        }
    }
}
