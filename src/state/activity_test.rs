use super::*;
use crate::net::types::{RollState, StudentRollState};

fn record(student_id: i64, roll_state: RollState) -> StudentRollState {
    StudentRollState {
        student_id,
        roll_state,
    }
}

fn activity_with(records: Vec<StudentRollState>) -> Activity {
    Activity {
        id: 1,
        name: "Roll 1".to_owned(),
        student_roll_states: records,
        completed_at: "2024-03-01T09:15:00Z".to_owned(),
    }
}

#[test]
fn activity_state_default_is_empty_and_idle() {
    let state = ActivityState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.load, LoadState::Idle);
}

#[test]
fn roll_counts_tally_each_bucket() {
    let activity = activity_with(vec![
        record(1, RollState::Present),
        record(2, RollState::Present),
        record(3, RollState::Late),
        record(4, RollState::Absent),
        record(5, RollState::Unmarked),
    ]);

    let counts = roll_counts(&activity);
    assert_eq!(counts.total, 5);
    assert_eq!(counts.present, 2);
    assert_eq!(counts.late, 1);
    assert_eq!(counts.absent, 1);
    assert_eq!(counts.unmarked(), 1);
}

#[test]
fn roll_counts_sum_to_record_count() {
    let activity = activity_with(vec![
        record(1, RollState::Unmarked),
        record(2, RollState::Late),
        record(3, RollState::Late),
    ]);

    let counts = roll_counts(&activity);
    assert_eq!(
        counts.present + counts.late + counts.absent + counts.unmarked(),
        activity.student_roll_states.len()
    );
}

#[test]
fn roll_counts_of_empty_activity_are_zero() {
    let activity = activity_with(Vec::new());
    let counts = roll_counts(&activity);
    assert_eq!(counts.total, 0);
    assert_eq!(counts.unmarked(), 0);
}
