//! Attendance record models.
//!
//! This module defines the [`RawRecord`] shape handed over by the
//! file-import collaborator (untrimmed cell text, exactly as extracted from
//! the source spreadsheet) and the typed [`AttendanceRecord`] the engine
//! evaluates in place.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::EngineConfig;

use super::hours::HoursOutcome;
use super::note::Note;

/// One row as extracted from a punch-clock export spreadsheet.
///
/// Timing fields are raw cell text: untrimmed, possibly holding an omission
/// marker. The base-pay cell is raw text too; parse failures degrade to
/// "absent" during conversion, never to an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Employee id, opaque to the engine.
    pub employee_id: String,
    /// Employee name, opaque to the engine.
    pub name: String,
    /// Area/department, opaque to the engine.
    pub area: String,
    /// Calendar date of the row, if the cell parsed upstream.
    pub date: Option<NaiveDate>,
    /// Clock-in cell text.
    pub clock_in: String,
    /// Lunch-out cell text.
    pub lunch_out: String,
    /// Lunch-in cell text.
    pub lunch_in: String,
    /// Clock-out cell text.
    pub clock_out: String,
    /// Base-pay cell text, if the column was present.
    pub base_pay: Option<String>,
    /// Free-text note carried over from the sheet.
    pub note: String,
}

/// One attendance record: identity, punches, and computed payroll fields.
///
/// The four timing fields stay as normalized text (the row evaluator parses
/// them on every pass, so an edit through the surrounding grid takes effect
/// on the next recalculation). The computed fields `hours_owed`,
/// `overtime_hours` and `overtime_value` are owned by the row evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Employee id, carried through unchanged.
    pub employee_id: String,
    /// Employee name, carried through unchanged.
    pub name: String,
    /// Area/department, carried through unchanged.
    pub area: String,
    /// Calendar date of the row.
    pub date: Option<NaiveDate>,
    /// Weekday name derived from `date`. Display-only.
    pub weekday: String,
    /// Clock-in punch text.
    pub clock_in: String,
    /// Lunch-out punch text.
    pub lunch_out: String,
    /// Lunch-in punch text.
    pub lunch_in: String,
    /// Clock-out punch text.
    pub clock_out: String,
    /// Monthly base pay, absent until payroll staff set it.
    pub base_pay: Option<Decimal>,
    /// The configured daily quota as `HH:MM`, stamped per record for
    /// display. Never read for calculation; the live configuration is the
    /// sole source of truth.
    pub quota_reference: String,
    /// Computed shortfall against the daily quota.
    pub hours_owed: HoursOutcome,
    /// Computed excess over the daily quota.
    pub overtime_hours: HoursOutcome,
    /// Computed monetary value of the overtime.
    pub overtime_value: Decimal,
    /// Note column: user text plus evaluator diagnostics.
    pub note: Note,
}

impl AttendanceRecord {
    /// Converts an imported raw row into a typed record.
    ///
    /// Timing text is trimmed, base pay is parsed tolerantly (a comma
    /// decimal separator is accepted; unparseable or negative values become
    /// absent), the weekday name is derived, and the quota-reference cache
    /// is stamped from the live configuration. Computed fields start empty;
    /// a table evaluation pass fills them.
    pub fn from_raw(raw: RawRecord, config: &EngineConfig) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: raw.employee_id,
            name: raw.name,
            area: raw.area,
            weekday: weekday_name(raw.date),
            date: raw.date,
            clock_in: raw.clock_in.trim().to_string(),
            lunch_out: raw.lunch_out.trim().to_string(),
            lunch_in: raw.lunch_in.trim().to_string(),
            clock_out: raw.clock_out.trim().to_string(),
            base_pay: raw.base_pay.as_deref().and_then(parse_base_pay),
            quota_reference: config.quota_display(),
            hours_owed: HoursOutcome::Empty,
            overtime_hours: HoursOutcome::Empty,
            overtime_value: Decimal::ZERO,
            note: Note::from_text(raw.note.trim()),
        }
    }

    /// Sets the date, keeping the derived weekday name in sync.
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.weekday = weekday_name(date);
        self.date = date;
    }

    /// Re-stamps the quota-reference display cache from the configuration.
    pub fn refresh_quota_reference(&mut self, config: &EngineConfig) {
        self.quota_reference = config.quota_display();
    }
}

/// Derives the display weekday name (e.g. "Thursday") from a date.
fn weekday_name(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%A").to_string(),
        None => String::new(),
    }
}

/// Parses a raw base-pay cell. Accepts a comma decimal separator; anything
/// unparseable or negative degrades to absent.
fn parse_base_pay(raw: &str) -> Option<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    let value = Decimal::from_str(&normalized).ok()?;
    if value.is_sign_negative() {
        return None;
    }
    Some(value)
}
