//! Core data models for the Hours and Overtime Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod hours;
mod note;
mod punch;
mod record;

pub use hours::{
    FORMAT_ERROR_CODE, HoursOutcome, SEQUENCE_ERROR_CODE, format_hhmm, format_signed_hhmm,
};
pub use note::{Diagnostic, Note};
pub use punch::{OMISSION_MARKERS, Punch, PunchParseError, is_omission_marker};
pub use record::{AttendanceRecord, RawRecord};
