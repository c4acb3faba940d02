//! Shared wire DTOs for the staff attendance API.
//!
//! DESIGN
//! ======
//! These types mirror the server payloads field-for-field so serde
//! round-trips stay lossless. View-only concerns (filter selections, load
//! status) live in `state`, not here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A student's attendance status within the active roll.
///
/// Serialized lowercase on the wire (`"unmarked"`, `"present"`, `"late"`,
/// `"absent"`). A student has at most one state at a time; students the
/// staff member has not touched yet carry no state and are treated as
/// [`RollState::Unmarked`] wherever a concrete value is required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollState {
    /// Not yet marked in the active roll.
    #[default]
    Unmarked,
    /// Marked present.
    Present,
    /// Marked late.
    Late,
    /// Marked absent.
    Absent,
}

impl RollState {
    /// Human-readable label for titles and table headers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unmarked => "Unmarked",
            Self::Present => "Present",
            Self::Late => "Late",
            Self::Absent => "Absent",
        }
    }
}

/// A student on the home board roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique student identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Avatar photo URL, if the school record has one.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Roll state recorded this session, if any. Absent from the roster
    /// payload; populated client-side when a tile reports a change.
    #[serde(default)]
    pub roll_state: Option<RollState>,
}

impl Person {
    /// Display name in "First Last" form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One student's recorded state inside a roll submission or a stored
/// activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRollState {
    /// Student the record belongs to.
    pub student_id: i64,
    /// Recorded roll state; unset states are submitted as
    /// [`RollState::Unmarked`].
    pub roll_state: RollState,
}

/// A historical record of a completed roll.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: i64,
    /// Display name assigned when the roll was completed.
    pub name: String,
    /// Per-student roll-state records captured at completion.
    #[serde(default)]
    pub student_roll_states: Vec<StudentRollState>,
    /// Completion timestamp, ISO 8601.
    pub completed_at: String,
}
