use super::*;

#[test]
fn load_state_default_is_idle() {
    assert_eq!(LoadState::default(), LoadState::Idle);
}

#[test]
fn load_state_variants_are_distinct() {
    let variants = [
        LoadState::Idle,
        LoadState::Loading,
        LoadState::Loaded,
        LoadState::Error,
    ];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}
