//! Evaluation logic for the Hours and Overtime Engine.
//!
//! This module contains the row evaluator (per-record classification and
//! hours/overtime arithmetic), the table passes that apply it across a
//! record collection, and the per-employee summary aggregation built on
//! the computed columns.

mod row;
mod schedule;
mod summary;
mod table;

pub use row::{MONTHLY_STANDARD_HOURS, RowEvaluation, evaluate_record};
pub use schedule::{DaySchedule, WorkedOutcome};
pub use summary::{EmployeeSummary, summarize_by_employee};
pub use table::{apply_config_change, evaluate_all, evaluate_one};
