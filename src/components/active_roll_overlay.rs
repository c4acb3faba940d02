//! Bottom overlay shown while a roll is in progress.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay is the control surface of an active roll: it shows live
//! attendance counts over the whole roster, lets staff narrow the list to
//! one bucket, and carries the exit / complete actions. It stays mounted
//! under the home board at all times and slides up when roll mode starts,
//! so entering and leaving a roll never tears down the roster view above
//! it.

#[cfg(test)]
#[path = "active_roll_overlay_test.rs"]
mod active_roll_overlay_test;

use leptos::prelude::*;

use crate::components::roll_state_list::RollStateList;
use crate::net::types::RollState;
use crate::state::load::LoadState;
use crate::state::roster::{RollCounts, RollFilter, RosterState};

/// Actions the overlay can emit back to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveRollAction {
    /// Narrow the roster to one bucket.
    Filter(RollFilter),
    /// Leave roll mode, discarding nothing but the filter.
    Exit,
    /// Submit the roll for the whole roster.
    Save,
}

/// Buckets shown in the count strip, in display order. The all bucket
/// leads so the total is always visible next to the per-state tallies.
fn overlay_entries(counts: &RollCounts) -> Vec<(RollFilter, usize)> {
    vec![
        (RollFilter::All, counts.total),
        (RollFilter::State(RollState::Present), counts.present),
        (RollFilter::State(RollState::Late), counts.late),
        (RollFilter::State(RollState::Absent), counts.absent),
    ]
}

/// Sliding attendance overlay for the home board.
#[component]
pub fn ActiveRollOverlay(on_action: Callback<ActiveRollAction>) -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();

    let is_active = move || roster.get().roll_mode;
    let is_saving = move || roster.get().save == LoadState::Loading;
    let save_failed = move || roster.get().save == LoadState::Error;

    let on_bucket_click =
        Callback::new(move |filter: RollFilter| on_action.run(ActiveRollAction::Filter(filter)));

    view! {
        <div class="active-roll-overlay" class:active-roll-overlay--active=is_active>
            <div class="active-roll-overlay__content">
                <div class="active-roll-overlay__title">"Class Attendance"</div>
                <div class="active-roll-overlay__counts">
                    {move || {
                        let entries = overlay_entries(&roster.get().roll_counts());
                        view! {
                            <RollStateList items=entries on_item_click=on_bucket_click/>
                        }
                    }}
                </div>
                <div class="active-roll-overlay__actions">
                    <button
                        class="btn active-roll-overlay__exit"
                        type="button"
                        on:click=move |_| on_action.run(ActiveRollAction::Exit)
                    >
                        "Exit"
                    </button>
                    <button
                        class="btn btn--primary active-roll-overlay__complete"
                        type="button"
                        disabled=is_saving
                        on:click=move |_| on_action.run(ActiveRollAction::Save)
                    >
                        {move || if is_saving() { "Saving..." } else { "Complete" }}
                    </button>
                </div>
                <Show when=save_failed>
                    <div class="active-roll-overlay__error">"Save failed"</div>
                </Show>
            </div>
        </div>
    }
}
