//! Roster row for a single student on the home board.
//!
//! DESIGN
//! ======
//! Keeps student presentation consistent between browsing and roll mode.
//! The tile never mutates roster state itself: in roll mode it hosts a
//! switcher and forwards the chosen state through `on_roll_change`, leaving
//! the page to apply the mark.

#[cfg(test)]
#[path = "student_list_tile_test.rs"]
mod student_list_tile_test;

use leptos::prelude::*;

use crate::components::roll_state_switcher::RollStateSwitcher;
use crate::net::types::{Person, RollState};

/// Uppercased initials for the avatar fallback when no photo is set.
fn initials(first_name: &str, last_name: &str) -> String {
    let mut out = String::new();
    if let Some(ch) = first_name.chars().next() {
        out.extend(ch.to_uppercase());
    }
    if let Some(ch) = last_name.chars().next() {
        out.extend(ch.to_uppercase());
    }
    out
}

/// One roster entry: avatar, full name, and (in roll mode) the switcher.
#[component]
pub fn StudentListTile(
    student: Person,
    #[prop(optional)] is_roll_mode: bool,
    on_roll_change: Callback<RollState>,
) -> impl IntoView {
    let name = student.full_name();
    let current_state = student.roll_state.unwrap_or_default();

    let avatar = match student.photo_url {
        Some(url) => view! {
            <img class="student-list-tile__avatar" src=url alt=""/>
        }
        .into_any(),
        None => view! {
            <span class="student-list-tile__avatar student-list-tile__avatar--initials">
                {initials(&student.first_name, &student.last_name)}
            </span>
        }
        .into_any(),
    };

    view! {
        <div class="student-list-tile" class:student-list-tile--roll=is_roll_mode>
            {avatar}
            <div class="student-list-tile__content">
                <span class="student-list-tile__name">{name}</span>
            </div>
            <Show when=move || is_roll_mode>
                <div class="student-list-tile__roll">
                    <RollStateSwitcher state=current_state on_change=on_roll_change/>
                </div>
            </Show>
        </div>
    }
}
