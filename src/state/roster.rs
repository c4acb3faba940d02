//! Home-board roster state: students plus the view controls over them.
//!
//! DESIGN
//! ======
//! One container owns the roster and every control that shapes its display
//! (sort direction, search text, roll filter, roll mode). Views render the
//! derived `visible_students()` list while roll tallies and the save payload
//! always read the full roster, so filtering can never change what gets
//! counted or submitted.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::net::types::{Person, RollState, StudentRollState};
use crate::state::load::LoadState;

/// Name field a sort action orders by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    FirstName,
    LastName,
}

/// Roll-state bucket selected from the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollFilter {
    /// Bypass filtering and show the full roster.
    All,
    /// Show only students in the given roll-state bucket.
    State(RollState),
}

impl RollFilter {
    /// Whether a student falls inside this bucket.
    ///
    /// `State(Unmarked)` matches students with no recorded state as well as
    /// explicitly unmarked ones.
    #[must_use]
    pub fn matches(self, student: &Person) -> bool {
        match self {
            Self::All => true,
            Self::State(state) => student.roll_state.unwrap_or_default() == state,
        }
    }
}

/// Which derived view the home board renders.
///
/// Exactly one mode is active at a time; search takes precedence while its
/// text is non-empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Full roster in stored order.
    #[default]
    Default,
    /// Subset matching the search text.
    Search,
    /// Subset matching the selected roll-state bucket.
    Filter,
}

/// Aggregate roll-state counts over a roster or a stored activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RollCounts {
    pub total: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
}

impl RollCounts {
    /// Tally a sequence of states; `None` entries land in the implied
    /// unmarked bucket.
    pub fn tally<I>(states: I) -> Self
    where
        I: IntoIterator<Item = Option<RollState>>,
    {
        let mut counts = Self::default();
        for state in states {
            counts.total += 1;
            match state.unwrap_or_default() {
                RollState::Present => counts.present += 1,
                RollState::Late => counts.late += 1,
                RollState::Absent => counts.absent += 1,
                RollState::Unmarked => {}
            }
        }
        counts
    }

    /// Unmarked count implied by the marked buckets, so
    /// present + late + absent + unmarked always equals `total`.
    #[must_use]
    pub fn unmarked(&self) -> usize {
        self.total - self.present - self.late - self.absent
    }
}

/// Shared home-board state: roster, view controls, and roll session flags.
#[derive(Clone, Debug)]
pub struct RosterState {
    /// Roster in its current stored order; sort actions reorder in place.
    pub students: Vec<Person>,
    /// Roster fetch lifecycle.
    pub load: LoadState,
    /// Direction the next sort action applies. A single toggle is shared
    /// across both sort keys, so alternating keys keeps alternating the
    /// direction.
    pub sort_ascending: bool,
    /// Live search text; any non-empty value switches the view to search.
    pub search: String,
    /// Whether an attendance roll is being taken (overlay active).
    pub roll_mode: bool,
    /// Bucket selected from the overlay, if any.
    pub roll_filter: Option<RollFilter>,
    /// Roll submission lifecycle.
    pub save: LoadState,
}

impl Default for RosterState {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            load: LoadState::Idle,
            sort_ascending: true,
            search: String::new(),
            roll_mode: false,
            roll_filter: None,
            save: LoadState::Idle,
        }
    }
}

impl RosterState {
    /// Stably reorder the roster by the given name field in the toggled
    /// direction, then flip the direction for the next invocation.
    pub fn sort_by(&mut self, key: SortKey) {
        let ascending = self.sort_ascending;
        self.students.sort_by(|a, b| {
            let ord = match key {
                SortKey::FirstName => a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()),
                SortKey::LastName => a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase()),
            };
            if ascending { ord } else { ord.reverse() }
        });
        self.sort_ascending = !ascending;
    }

    /// Derive the active view mode from search text and filter selection.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        if !self.search.is_empty() {
            ViewMode::Search
        } else if self.roll_filter.is_some() {
            ViewMode::Filter
        } else {
            ViewMode::Default
        }
    }

    /// The students the active view mode displays, in stored order.
    #[must_use]
    pub fn visible_students(&self) -> Vec<&Person> {
        match self.view_mode() {
            ViewMode::Default => self.students.iter().collect(),
            ViewMode::Search => {
                let query = self.search.to_lowercase();
                self.students
                    .iter()
                    .filter(|s| matches_search(s, &query))
                    .collect()
            }
            ViewMode::Filter => {
                // Filter mode implies a selection; All is a harmless fallback.
                let filter = self.roll_filter.unwrap_or(RollFilter::All);
                self.students.iter().filter(|s| filter.matches(s)).collect()
            }
        }
    }

    /// Record a roll state for the matching student, replacing any previous
    /// state. Unknown ids are ignored.
    pub fn mark(&mut self, student_id: i64, state: RollState) {
        if let Some(student) = self.students.iter_mut().find(|s| s.id == student_id) {
            student.roll_state = Some(state);
        }
    }

    /// Tally roll states over the full roster, never the filtered view.
    #[must_use]
    pub fn roll_counts(&self) -> RollCounts {
        RollCounts::tally(self.students.iter().map(|s| s.roll_state))
    }

    /// Build the submission payload: one record per roster student, with
    /// unset states defaulting to unmarked.
    #[must_use]
    pub fn save_payload(&self) -> Vec<StudentRollState> {
        self.students
            .iter()
            .map(|s| StudentRollState {
                student_id: s.id,
                roll_state: s.roll_state.unwrap_or_default(),
            })
            .collect()
    }

    /// Enter roll mode, activating the overlay. Resets any stale submission
    /// status left over from an earlier roll.
    pub fn start_roll(&mut self) {
        self.roll_mode = true;
        self.save = LoadState::Idle;
    }

    /// Leave roll mode. Clears the bucket filter (its UI disappears with the
    /// overlay) but keeps recorded marks for the rest of the page session.
    pub fn exit_roll(&mut self) {
        self.roll_mode = false;
        self.roll_filter = None;
    }
}

/// Case-insensitive substring match on either name field. The query must
/// already be lowercased.
fn matches_search(student: &Person, query: &str) -> bool {
    student.first_name.to_lowercase().contains(query)
        || student.last_name.to_lowercase().contains(query)
}
