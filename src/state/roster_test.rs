use super::*;

fn student(id: i64, first: &str, last: &str) -> Person {
    Person {
        id,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        photo_url: None,
        roll_state: None,
    }
}

fn marked(id: i64, first: &str, last: &str, state: RollState) -> Person {
    Person {
        roll_state: Some(state),
        ..student(id, first, last)
    }
}

fn roster_of(students: Vec<Person>) -> RosterState {
    RosterState {
        students,
        ..RosterState::default()
    }
}

fn visible_ids(state: &RosterState) -> Vec<i64> {
    state.visible_students().iter().map(|s| s.id).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn roster_state_default_is_empty_and_idle() {
    let state = RosterState::default();
    assert!(state.students.is_empty());
    assert_eq!(state.load, LoadState::Idle);
    assert_eq!(state.save, LoadState::Idle);
    assert!(state.search.is_empty());
    assert!(!state.roll_mode);
    assert_eq!(state.roll_filter, None);
}

#[test]
fn roster_state_default_first_sort_is_ascending() {
    let state = RosterState::default();
    assert!(state.sort_ascending);
    assert_eq!(state.view_mode(), ViewMode::Default);
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_by_first_name_orders_ascending_then_descending() {
    let mut state = roster_of(vec![
        student(1, "Cara", "Young"),
        student(2, "Abel", "Zhou"),
        student(3, "Beth", "Xu"),
    ]);

    state.sort_by(SortKey::FirstName);
    assert_eq!(visible_ids(&state), vec![2, 3, 1]);

    state.sort_by(SortKey::FirstName);
    assert_eq!(visible_ids(&state), vec![1, 3, 2]);
}

#[test]
fn sort_by_last_name_orders_ascending() {
    let mut state = roster_of(vec![
        student(1, "Cara", "Young"),
        student(2, "Abel", "Zhou"),
        student(3, "Beth", "Xu"),
    ]);

    state.sort_by(SortKey::LastName);
    assert_eq!(visible_ids(&state), vec![3, 1, 2]);
}

#[test]
fn sort_direction_toggle_is_shared_across_keys() {
    let mut state = roster_of(vec![student(1, "Ann", "Beck"), student(2, "Bea", "Ames")]);

    // First action consumes the ascending direction ...
    state.sort_by(SortKey::FirstName);
    assert_eq!(visible_ids(&state), vec![1, 2]);

    // ... so a different key on the next action sorts descending.
    state.sort_by(SortKey::LastName);
    assert_eq!(visible_ids(&state), vec![1, 2]);
    state.sort_by(SortKey::LastName);
    assert_eq!(visible_ids(&state), vec![2, 1]);
}

#[test]
fn sort_is_case_insensitive() {
    let mut state = roster_of(vec![
        student(1, "adam", "lee"),
        student(2, "Ben", "Lay"),
        student(3, "ABE", "LOW"),
    ]);

    state.sort_by(SortKey::FirstName);
    assert_eq!(visible_ids(&state), vec![3, 1, 2]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let mut state = roster_of(vec![
        student(1, "Sam", "West"),
        student(2, "sam", "Abbey"),
        student(3, "Ada", "Cole"),
    ]);

    state.sort_by(SortKey::FirstName);
    assert_eq!(visible_ids(&state), vec![3, 1, 2]);

    // Descending keeps the stored relative order of the equal pair too.
    state.sort_by(SortKey::FirstName);
    assert_eq!(visible_ids(&state), vec![1, 2, 3]);
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_matches_first_name_substring_case_insensitively() {
    let mut state = roster_of(vec![
        student(1, "Alison", "Reed"),
        student(2, "Sally", "Brown"),
        student(3, "Omar", "Ali"),
    ]);

    state.search = "ali".to_owned();
    assert_eq!(state.view_mode(), ViewMode::Search);
    // "ali" hits Alison's first name and Omar's last name.
    assert_eq!(visible_ids(&state), vec![1, 3]);
}

#[test]
fn search_returns_exactly_the_matching_subset() {
    let mut state = roster_of(vec![
        student(1, "Mina", "Holt"),
        student(2, "Joel", "Minas"),
        student(3, "Ruth", "Park"),
    ]);

    state.search = "MIN".to_owned();
    assert_eq!(visible_ids(&state), vec![1, 2]);

    state.search = "zzz".to_owned();
    assert!(state.visible_students().is_empty());
}

#[test]
fn clearing_search_returns_to_default_view() {
    let mut state = roster_of(vec![student(1, "Mina", "Holt"), student(2, "Ruth", "Park")]);

    state.search = "mina".to_owned();
    assert_eq!(visible_ids(&state), vec![1]);

    state.search.clear();
    assert_eq!(state.view_mode(), ViewMode::Default);
    assert_eq!(visible_ids(&state), vec![1, 2]);
}

#[test]
fn search_takes_precedence_over_filter() {
    let mut state = roster_of(vec![
        marked(1, "Mina", "Holt", RollState::Present),
        marked(2, "Ruth", "Park", RollState::Absent),
    ]);

    state.roll_filter = Some(RollFilter::State(RollState::Present));
    state.search = "ruth".to_owned();
    assert_eq!(state.view_mode(), ViewMode::Search);
    assert_eq!(visible_ids(&state), vec![2]);
}

// =============================================================
// Roll filter
// =============================================================

#[test]
fn filter_all_returns_full_roster() {
    let mut state = roster_of(vec![
        marked(1, "Mina", "Holt", RollState::Present),
        student(2, "Ruth", "Park"),
    ]);

    state.roll_filter = Some(RollFilter::All);
    assert_eq!(state.view_mode(), ViewMode::Filter);
    assert_eq!(visible_ids(&state), vec![1, 2]);
}

#[test]
fn filter_state_returns_exactly_matching_students() {
    let mut state = roster_of(vec![
        marked(1, "Mina", "Holt", RollState::Present),
        marked(2, "Ruth", "Park", RollState::Late),
        marked(3, "Omar", "Ali", RollState::Present),
    ]);

    state.roll_filter = Some(RollFilter::State(RollState::Present));
    assert_eq!(visible_ids(&state), vec![1, 3]);

    state.roll_filter = Some(RollFilter::State(RollState::Absent));
    assert!(state.visible_students().is_empty());
}

#[test]
fn filter_unmarked_matches_students_with_no_recorded_state() {
    let mut state = roster_of(vec![
        marked(1, "Mina", "Holt", RollState::Unmarked),
        student(2, "Ruth", "Park"),
        marked(3, "Omar", "Ali", RollState::Late),
    ]);

    state.roll_filter = Some(RollFilter::State(RollState::Unmarked));
    assert_eq!(visible_ids(&state), vec![1, 2]);
}

#[test]
fn roll_filter_matches_checks_bucket_membership() {
    let present = marked(1, "Mina", "Holt", RollState::Present);
    let unmarked = student(2, "Ruth", "Park");

    assert!(RollFilter::All.matches(&present));
    assert!(RollFilter::All.matches(&unmarked));
    assert!(RollFilter::State(RollState::Present).matches(&present));
    assert!(!RollFilter::State(RollState::Present).matches(&unmarked));
    assert!(RollFilter::State(RollState::Unmarked).matches(&unmarked));
}

// =============================================================
// Marking
// =============================================================

#[test]
fn mark_records_state_for_matching_student() {
    let mut state = roster_of(vec![student(1, "Mina", "Holt"), student(2, "Ruth", "Park")]);

    state.mark(2, RollState::Late);
    assert_eq!(state.students[0].roll_state, None);
    assert_eq!(state.students[1].roll_state, Some(RollState::Late));
}

#[test]
fn mark_replaces_previous_state() {
    let mut state = roster_of(vec![marked(1, "Mina", "Holt", RollState::Present)]);

    state.mark(1, RollState::Absent);
    assert_eq!(state.students[0].roll_state, Some(RollState::Absent));
}

#[test]
fn mark_ignores_unknown_id() {
    let mut state = roster_of(vec![student(1, "Mina", "Holt")]);

    state.mark(99, RollState::Present);
    assert_eq!(state.students[0].roll_state, None);
}

// =============================================================
// Counts
// =============================================================

#[test]
fn roll_counts_tally_marked_buckets() {
    let state = roster_of(vec![
        marked(1, "Mina", "Holt", RollState::Present),
        marked(2, "Ruth", "Park", RollState::Present),
        marked(3, "Omar", "Ali", RollState::Late),
        marked(4, "Joel", "Minas", RollState::Absent),
        student(5, "Ada", "Cole"),
    ]);

    let counts = state.roll_counts();
    assert_eq!(counts.total, 5);
    assert_eq!(counts.present, 2);
    assert_eq!(counts.late, 1);
    assert_eq!(counts.absent, 1);
    assert_eq!(counts.unmarked(), 1);
}

#[test]
fn roll_counts_read_the_full_roster_not_the_filtered_view() {
    let mut state = roster_of(vec![
        marked(1, "Mina", "Holt", RollState::Present),
        marked(2, "Ruth", "Park", RollState::Absent),
    ]);

    state.roll_filter = Some(RollFilter::State(RollState::Present));
    assert_eq!(state.visible_students().len(), 1);

    let counts = state.roll_counts();
    assert_eq!(counts.total, 2);
    assert_eq!(counts.absent, 1);
}

#[test]
fn roll_counts_always_sum_to_roster_size() {
    let state = roster_of(vec![
        marked(1, "Mina", "Holt", RollState::Present),
        marked(2, "Ruth", "Park", RollState::Late),
        marked(3, "Omar", "Ali", RollState::Unmarked),
        student(4, "Joel", "Minas"),
    ]);

    let counts = state.roll_counts();
    assert_eq!(
        counts.present + counts.late + counts.absent + counts.unmarked(),
        counts.total
    );
    assert_eq!(counts.total, state.students.len());
}

#[test]
fn roll_counts_tally_handles_empty_input() {
    let counts = RollCounts::tally(std::iter::empty());
    assert_eq!(counts, RollCounts::default());
    assert_eq!(counts.unmarked(), 0);
}

// =============================================================
// Save payload
// =============================================================

#[test]
fn save_payload_has_one_entry_per_roster_student() {
    let state = roster_of(vec![
        marked(1, "Mina", "Holt", RollState::Present),
        student(2, "Ruth", "Park"),
        marked(3, "Omar", "Ali", RollState::Late),
    ]);

    let payload = state.save_payload();
    assert_eq!(payload.len(), 3);
    let ids: Vec<i64> = payload.iter().map(|r| r.student_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn save_payload_defaults_unset_state_to_unmarked() {
    let state = roster_of(vec![student(2, "Ruth", "Park")]);

    let payload = state.save_payload();
    assert_eq!(payload[0].roll_state, RollState::Unmarked);
}

// =============================================================
// Roll mode
// =============================================================

#[test]
fn start_roll_sets_roll_mode() {
    let mut state = RosterState::default();
    state.start_roll();
    assert!(state.roll_mode);
}

#[test]
fn start_roll_clears_stale_save_status() {
    let mut state = RosterState::default();
    state.save = LoadState::Error;
    state.start_roll();
    assert_eq!(state.save, LoadState::Idle);
}

#[test]
fn exit_roll_clears_filter_and_keeps_marks() {
    let mut state = roster_of(vec![marked(1, "Mina", "Holt", RollState::Present)]);
    state.start_roll();
    state.roll_filter = Some(RollFilter::State(RollState::Present));

    state.exit_roll();
    assert!(!state.roll_mode);
    assert_eq!(state.roll_filter, None);
    assert_eq!(state.students[0].roll_state, Some(RollState::Present));
    assert_eq!(state.view_mode(), ViewMode::Default);
}
