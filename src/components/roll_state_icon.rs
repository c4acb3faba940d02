//! Colored dot representing a single roll state.
//!
//! DESIGN
//! ======
//! One glyph, reused everywhere a roll state appears: inside the switcher on
//! roster tiles, in the overlay's count row, and anywhere the history screen
//! needs a legend. Color is the only channel that varies by state, so the
//! mapping lives in one place here.

use leptos::prelude::*;

use crate::net::types::RollState;

/// Fill color for each roll state. Unmarked renders as a hollow dot, so it
/// pairs with a border modifier on the element.
fn icon_color(state: RollState) -> &'static str {
    match state {
        RollState::Unmarked => "#fff",
        RollState::Present => "#13943b",
        RollState::Late => "#f5a623",
        RollState::Absent => "#9b9b9b",
    }
}

/// Circular state indicator, sized in pixels.
#[component]
pub fn RollStateIcon(state: RollState, #[prop(default = 20)] size: u32) -> impl IntoView {
    let hollow = state == RollState::Unmarked;
    let style = format!(
        "width: {size}px; height: {size}px; background-color: {};",
        icon_color(state)
    );

    view! {
        <span
            class="roll-state-icon"
            class:roll-state-icon--hollow=hollow
            style=style
            title=state.label()
            aria-label=state.label()
        ></span>
    }
}
