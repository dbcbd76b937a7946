//! Whole-table evaluation passes.
//!
//! These functions apply the row evaluator across a record collection,
//! in place. Records are evaluated independently; an error-coded row never
//! affects its neighbors. Index positions are left untouched so a row
//! selection held by the surrounding grid stays valid across
//! recalculation. Compacting indices after a deletion is the presentation
//! layer's concern, not this module's.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;

use super::row::evaluate_record;

/// Evaluates every record in the collection against the configuration.
///
/// Must be re-run (or [`evaluate_one`] for a single row) whenever a timing
/// field, the base-pay field, or the configuration changes; the computed
/// columns are only consistent immediately after a pass.
pub fn evaluate_all(records: &mut [AttendanceRecord], config: &EngineConfig) {
    for record in records.iter_mut() {
        normalize_record(record);
        evaluate_record(record, config).apply_to(record);
    }
    debug!(rows = records.len(), "table evaluation pass complete");
}

/// Recalculates a single record after a targeted edit.
///
/// Returns [`EngineError::RecordNotFound`] when the index is out of
/// bounds; no record is modified in that case.
pub fn evaluate_one(
    records: &mut [AttendanceRecord],
    index: usize,
    config: &EngineConfig,
) -> EngineResult<()> {
    let record = records
        .get_mut(index)
        .ok_or(EngineError::RecordNotFound { index })?;
    normalize_record(record);
    evaluate_record(record, config).apply_to(record);
    Ok(())
}

/// Applies a configuration change to the whole collection: re-stamps every
/// quota-reference display cache, then re-evaluates every record.
pub fn apply_config_change(records: &mut [AttendanceRecord], config: &EngineConfig) {
    for record in records.iter_mut() {
        record.refresh_quota_reference(config);
    }
    evaluate_all(records, config);
}

/// Normalizes the text columns of one record before evaluation: timing
/// cells are trimmed in place. Presence and typing of the columns is
/// already guaranteed by the record type itself; trimming is what remains
/// of the original export's column-coercion pass.
fn normalize_record(record: &mut AttendanceRecord) {
    trim_in_place(&mut record.clock_in);
    trim_in_place(&mut record.lunch_out);
    trim_in_place(&mut record.lunch_in);
    trim_in_place(&mut record.clock_out);
}

fn trim_in_place(text: &mut String) {
    if text.trim().len() != text.len() {
        let trimmed = text.trim().to_string();
        *text = trimmed;
    }
}
