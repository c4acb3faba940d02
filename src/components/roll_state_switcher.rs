//! Tap-to-cycle control for marking a student during an active roll.
//!
//! DESIGN
//! ======
//! The switcher is a controlled component: the roster owns the state, the
//! switcher only reports the next value through `on_change`. Keeping the
//! cycle rule in a plain function makes the marking behavior testable
//! without a DOM.

#[cfg(test)]
#[path = "roll_state_switcher_test.rs"]
mod roll_state_switcher_test;

use leptos::prelude::*;

use crate::components::roll_state_icon::RollStateIcon;
use crate::net::types::RollState;

/// Next state in the marking cycle. Marking always moves forward through
/// present, late, absent and wraps absent back to present; a tap never
/// returns a student to unmarked.
#[must_use]
pub fn next_roll_state(current: RollState) -> RollState {
    match current {
        RollState::Unmarked | RollState::Absent => RollState::Present,
        RollState::Present => RollState::Late,
        RollState::Late => RollState::Absent,
    }
}

/// Clickable roll-state icon that advances the state on each tap.
#[component]
pub fn RollStateSwitcher(
    state: RollState,
    on_change: Callback<RollState>,
    #[prop(default = 40)] size: u32,
) -> impl IntoView {
    let title = format!("Mark {}", next_roll_state(state).label());

    view! {
        <button
            class="roll-state-switcher"
            type="button"
            title=title
            on:click=move |_| on_change.run(next_roll_state(state))
        >
            <RollStateIcon state=state size=size/>
        </button>
    }
}
