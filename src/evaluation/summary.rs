//! Per-employee totals over a set of evaluated records.
//!
//! Downstream reporting sums the computed columns per employee. The sums
//! follow the aggregation contract of the computed fields: empty cells and
//! both error codes contribute a zero duration, overtime value is a plain
//! numeric sum, and duration totals render as signed `HH:MM`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::{AttendanceRecord, format_signed_hhmm};

/// Aggregated totals for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee name the records were grouped by.
    pub name: String,
    /// Number of records in the group.
    pub record_count: usize,
    /// Total expected minutes: record count times the configured quota.
    pub quota_minutes: i64,
    /// Total owed minutes (error and empty cells contribute zero).
    pub hours_owed_minutes: i64,
    /// Total overtime minutes (error and empty cells contribute zero).
    pub overtime_minutes: i64,
    /// Total monetary value of the overtime.
    pub overtime_value: Decimal,
}

impl EmployeeSummary {
    /// The quota total rendered as `HH:MM`.
    pub fn quota_display(&self) -> String {
        format_signed_hhmm(self.quota_minutes)
    }

    /// The owed total rendered as `HH:MM`.
    pub fn hours_owed_display(&self) -> String {
        format_signed_hhmm(self.hours_owed_minutes)
    }

    /// The overtime total rendered as `HH:MM`.
    pub fn overtime_display(&self) -> String {
        format_signed_hhmm(self.overtime_minutes)
    }
}

/// Groups evaluated records by employee name and totals their computed
/// columns.
///
/// Groups keep first-appearance order; records with a blank name are
/// skipped. The quota total comes from the live configuration, not from
/// the per-record quota-reference display cache.
pub fn summarize_by_employee(
    records: &[AttendanceRecord],
    config: &EngineConfig,
) -> Vec<EmployeeSummary> {
    let quota_minutes = config.quota_minutes();
    let mut summaries: Vec<EmployeeSummary> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for record in records {
        let name = record.name.trim();
        if name.is_empty() {
            continue;
        }
        let index = *index_by_name.entry(name.to_string()).or_insert_with(|| {
            summaries.push(EmployeeSummary {
                name: name.to_string(),
                record_count: 0,
                quota_minutes: 0,
                hours_owed_minutes: 0,
                overtime_minutes: 0,
                overtime_value: Decimal::ZERO,
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[index];
        summary.record_count += 1;
        summary.quota_minutes += quota_minutes;
        summary.hours_owed_minutes += record.hours_owed.minutes_or_zero();
        summary.overtime_minutes += record.overtime_hours.minutes_or_zero();
        summary.overtime_value += record.overtime_value;
    }

    summaries
}
