//! The note column: user text plus engine diagnostics.
//!
//! The note field of a record is free text owned by the user, and the
//! evaluator annotates it with diagnostics for malformed or incomplete
//! rows. Diagnostics are kept as an ordered list of tags next to the user
//! text instead of concatenated into it; each evaluation pass replaces the
//! tag list (never the user text), so re-evaluating a record under the same
//! configuration yields identical output. The combined string is produced
//! only at the rendering boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A diagnostic tag the evaluator attaches to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// A present punch field is not a valid minute-precision time.
    InvalidTimeFormat,
    /// The punches are not in a chronologically valid order.
    InvalidSequence,
    /// Some punches are present but not enough to evaluate the day.
    IncompleteSchedule,
}

impl Diagnostic {
    /// The human-readable message for this diagnostic.
    pub fn message(&self) -> &'static str {
        match self {
            Diagnostic::InvalidTimeFormat => "invalid time format",
            Diagnostic::InvalidSequence => "inconsistent punch sequence",
            Diagnostic::IncompleteSchedule => "incomplete schedule",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The note column of a record.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{Diagnostic, Note};
///
/// let mut note = Note::from_text("checked with supervisor");
/// note.set_diagnostics(vec![Diagnostic::IncompleteSchedule]);
/// assert_eq!(note.render(), "checked with supervisor (incomplete schedule)");
///
/// note.set_diagnostics(Vec::new());
/// assert_eq!(note.render(), "checked with supervisor");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    text: String,
    #[serde(default)]
    diagnostics: Vec<Diagnostic>,
}

impl Note {
    /// Creates an empty note.
    pub fn new() -> Note {
        Note::default()
    }

    /// Creates a note holding the given user text.
    pub fn from_text(text: impl Into<String>) -> Note {
        Note {
            text: text.into(),
            diagnostics: Vec::new(),
        }
    }

    /// The user-owned free text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the user-owned free text, leaving diagnostics untouched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The diagnostics attached by the most recent evaluation pass.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Replaces the engine-owned diagnostic list. The user text survives.
    pub fn set_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics = diagnostics;
    }

    /// Joins user text and diagnostics into the display string.
    pub fn render(&self) -> String {
        let mut rendered = self.text.trim().to_string();
        for diagnostic in &self.diagnostics {
            if !rendered.is_empty() {
                rendered.push(' ');
            }
            rendered.push('(');
            rendered.push_str(diagnostic.message());
            rendered.push(')');
        }
        rendered
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
