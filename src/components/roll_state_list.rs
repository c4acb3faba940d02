//! Row of roll-state buckets with live counts.
//!
//! DESIGN
//! ======
//! Renders the overlay's count strip: one entry per bucket, each pairing a
//! glyph with its tally. Entries are buttons so the overlay can wire bucket
//! clicks to roster filtering; without a callback the counts are display
//! only.

use leptos::prelude::*;

use crate::components::roll_state_icon::RollStateIcon;
use crate::state::roster::RollFilter;

/// Display name for a bucket, used for tooltips and accessible labels.
fn filter_label(filter: RollFilter) -> &'static str {
    match filter {
        RollFilter::All => "All",
        RollFilter::State(state) => state.label(),
    }
}

/// Horizontal list of bucket counts.
#[component]
pub fn RollStateList(
    items: Vec<(RollFilter, usize)>,
    #[prop(optional)] on_item_click: Option<Callback<RollFilter>>,
    #[prop(default = 14)] size: u32,
) -> impl IntoView {
    view! {
        <div class="roll-state-list">
            {items
                .into_iter()
                .map(|(filter, count)| {
                    view! {
                        <button
                            class="roll-state-list__item"
                            type="button"
                            title=filter_label(filter)
                            on:click=move |_| {
                                if let Some(on_item_click) = on_item_click.as_ref() {
                                    on_item_click.run(filter);
                                }
                            }
                        >
                            {render_glyph(filter, size)}
                            <span class="roll-state-list__count">{count}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn render_glyph(filter: RollFilter, size: u32) -> impl IntoView {
    match filter {
        RollFilter::All => view! {
            <svg
                class="roll-state-list__all-glyph"
                style=format!("width: {size}px; height: {size}px;")
                viewBox="0 0 20 20"
                aria-hidden="true"
            >
                <circle cx="7" cy="7" r="3.2" />
                <path d="M1.5 17 C1.5 13.2 4 11.8 7 11.8 C10 11.8 12.5 13.2 12.5 17 Z" />
                <circle cx="14.5" cy="8" r="2.4" />
                <path d="M14 17 H18.5 C18.5 14.2 17 12.8 14.6 12.8" />
            </svg>
        }
        .into_any(),
        RollFilter::State(state) => view! { <RollStateIcon state=state size=size/> }.into_any(),
    }
}
