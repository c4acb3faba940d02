//! Activity-history state for the staff activity view.
//!
//! DESIGN
//! ======
//! Activities are read-only: the view renders aggregate counts derived from
//! the per-student records each activity embeds. Keeping the tally beside
//! the state (rather than in the page) lets the count math share the
//! roster's `RollCounts` type and its summing guarantee.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use crate::net::types::Activity;
use crate::state::load::LoadState;
use crate::state::roster::RollCounts;

/// Activity list state backed by a single fetch.
#[derive(Clone, Debug, Default)]
pub struct ActivityState {
    pub items: Vec<Activity>,
    pub load: LoadState,
}

/// Tally the roll-state records embedded in one activity.
#[must_use]
pub fn roll_counts(activity: &Activity) -> RollCounts {
    RollCounts::tally(
        activity
            .student_roll_states
            .iter()
            .map(|record| Some(record.roll_state)),
    )
}
