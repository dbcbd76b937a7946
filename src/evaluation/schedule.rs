//! Day-schedule classification and worked-duration arithmetic.
//!
//! Given the four parsed punches of one day, this module decides which
//! shape the day has (blank, no-lunch, full day, incomplete) and computes
//! the worked duration in seconds, applying the overnight-rollover
//! adjustments and validating punch order.

use chrono::{NaiveTime, Timelike};

use crate::models::Punch;

const DAY_SECONDS: i64 = 86_400;

/// The shape of one day's punches, classified by which fields are present.
///
/// Classification runs in priority order: an all-zero (or all-absent) day is
/// blank; then clock-in/clock-out with no effective lunch is a no-lunch
/// day; then four present punches are a full day; every other combination
/// is incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySchedule {
    /// Every present punch is `00:00`, or all punches are absent. A punch
    /// device exports such rows for days with no record, so this is a true
    /// non-event, not a zero-hour day.
    Blank,
    /// Clock-in and clock-out present; the lunch pair is absent or zeroed.
    NoLunch {
        /// Start of the single work segment.
        clock_in: NaiveTime,
        /// End of the single work segment.
        clock_out: NaiveTime,
    },
    /// All four punches present: two work segments around a lunch break.
    FullDay {
        /// Start of the morning segment.
        clock_in: NaiveTime,
        /// End of the morning segment.
        lunch_out: NaiveTime,
        /// Start of the afternoon segment.
        lunch_in: NaiveTime,
        /// End of the afternoon segment.
        clock_out: NaiveTime,
    },
    /// Any other combination of present punches.
    Incomplete {
        /// Whether at least one punch was present (drives the diagnostic).
        any_present: bool,
    },
}

/// The worked-duration resolution of a classified day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkedOutcome {
    /// Nothing to evaluate: a blank day.
    Blank,
    /// Nothing to evaluate: not enough punches.
    Incomplete {
        /// Whether at least one punch was present.
        any_present: bool,
    },
    /// Punches present but chronologically inconsistent even after
    /// overnight-rollover adjustment.
    OutOfSequence,
    /// A valid schedule; the worked duration in seconds.
    Seconds(i64),
}

impl DaySchedule {
    /// Classifies the four punches of one day.
    pub fn classify(
        clock_in: Punch,
        lunch_out: Punch,
        lunch_in: Punch,
        clock_out: Punch,
    ) -> DaySchedule {
        let punches = [clock_in, lunch_out, lunch_in, clock_out];
        if punches.iter().all(|p| p.is_absent() || p.is_zero()) {
            return DaySchedule::Blank;
        }

        let lunch_skipped = (lunch_out.is_absent() && lunch_in.is_absent())
            || (lunch_out.is_zero() && lunch_in.is_zero());
        if let (Some(start), Some(end)) = (clock_in.time(), clock_out.time()) {
            if lunch_skipped {
                return DaySchedule::NoLunch {
                    clock_in: start,
                    clock_out: end,
                };
            }
        }

        if let (Some(clock_in), Some(lunch_out), Some(lunch_in), Some(clock_out)) = (
            clock_in.time(),
            lunch_out.time(),
            lunch_in.time(),
            clock_out.time(),
        ) {
            return DaySchedule::FullDay {
                clock_in,
                lunch_out,
                lunch_in,
                clock_out,
            };
        }

        DaySchedule::Incomplete {
            any_present: punches.iter().any(|p| !p.is_absent()),
        }
    }

    /// Resolves the worked duration, adjusting for shifts that cross
    /// midnight and validating punch order.
    ///
    /// A punch earlier than its predecessor is assumed to belong to the
    /// next day and is shifted by 24 hours before the order check. The
    /// order must then be non-decreasing through all four punches, with
    /// clock-in strictly before clock-out; a zero-length lunch break
    /// (lunch-out equal to lunch-in) is permitted.
    pub fn worked_seconds(&self) -> WorkedOutcome {
        match *self {
            DaySchedule::Blank => WorkedOutcome::Blank,
            DaySchedule::Incomplete { any_present } => WorkedOutcome::Incomplete { any_present },
            DaySchedule::NoLunch {
                clock_in,
                clock_out,
            } => {
                let start = seconds_of(clock_in);
                let mut end = seconds_of(clock_out);
                if end < start {
                    end += DAY_SECONDS;
                }
                if start >= end {
                    WorkedOutcome::OutOfSequence
                } else {
                    WorkedOutcome::Seconds(end - start)
                }
            }
            DaySchedule::FullDay {
                clock_in,
                lunch_out,
                lunch_in,
                clock_out,
            } => {
                let start = seconds_of(clock_in);
                let mut lunch_start = seconds_of(lunch_out);
                if lunch_start < start {
                    lunch_start += DAY_SECONDS;
                }
                let mut lunch_end = seconds_of(lunch_in);
                if lunch_end < lunch_start {
                    lunch_end += DAY_SECONDS;
                }
                let mut end = seconds_of(clock_out);
                if end < lunch_end {
                    end += DAY_SECONDS;
                }

                let ordered =
                    start <= lunch_start && lunch_start <= lunch_end && lunch_end <= end;
                if !ordered || start >= end {
                    WorkedOutcome::OutOfSequence
                } else {
                    WorkedOutcome::Seconds((lunch_start - start) + (end - lunch_end))
                }
            }
        }
    }
}

fn seconds_of(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight())
}
