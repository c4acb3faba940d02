//! Activity page: history of completed rolls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read-only view over finished rolls. Each row summarizes one roll: the
//! per-bucket tallies are recomputed from the stored records on render, so
//! the table can never disagree with what was actually submitted.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use leptos::prelude::*;

use crate::components::centered_container::CenteredContainer;
use crate::state::activity::{ActivityState, roll_counts};
use crate::state::load::LoadState;

/// Shorten an ISO 8601 timestamp to `YYYY-MM-DD HH:MM` for the table.
/// Values that do not look like timestamps pass through unchanged.
fn format_completed_at(raw: &str) -> String {
    match raw.split_once('T') {
        Some((date, time)) if time.len() >= 5 && time.is_char_boundary(5) => {
            format!("{date} {}", &time[..5])
        }
        _ => raw.to_owned(),
    }
}

/// Activity page: table of completed rolls with per-bucket counts.
#[component]
pub fn ActivityPage() -> impl IntoView {
    let activity = RwSignal::new(ActivityState::default());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        activity.update(|state| state.load = LoadState::Loading);
        fetch_activity(activity);
    });

    let load = move || activity.get().load;

    view! {
        <div class="activity-page">
            <h1 class="activity-page__title">"Activity"</h1>

            <Show when=move || matches!(load(), LoadState::Idle | LoadState::Loading)>
                <CenteredContainer>
                    <div class="activity-page__loading">"Loading activity..."</div>
                </CenteredContainer>
            </Show>

            <Show when=move || load() == LoadState::Error>
                <CenteredContainer>
                    <div class="activity-page__error">"Failed to load"</div>
                </CenteredContainer>
            </Show>

            <Show when=move || load() == LoadState::Loaded>
                {move || {
                    let state = activity.get();
                    if state.items.is_empty() {
                        return view! {
                            <CenteredContainer>
                                <div class="activity-page__empty">"No completed rolls yet."</div>
                            </CenteredContainer>
                        }
                        .into_any();
                    }
                    view! {
                        <table class="activity-page__table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Present"</th>
                                    <th>"Late"</th>
                                    <th>"Absent"</th>
                                    <th>"Unmarked"</th>
                                    <th>"Completed At"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .items
                                    .iter()
                                    .map(|item| {
                                        let counts = roll_counts(item);
                                        view! {
                                            <tr class="activity-page__row">
                                                <td class="activity-page__name">{item.name.clone()}</td>
                                                <td>{counts.present}</td>
                                                <td>{counts.late}</td>
                                                <td>{counts.absent}</td>
                                                <td>{counts.unmarked()}</td>
                                                <td class="activity-page__completed">
                                                    {format_completed_at(&item.completed_at)}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
            </Show>
        </div>
    }
}

/// Request the roll history once. Runs after hydration; the server renders
/// the loading state.
fn fetch_activity(activity: RwSignal<ActivityState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_activities().await {
            Ok(items) => activity.update(|state| {
                state.items = items;
                state.load = LoadState::Loaded;
            }),
            Err(err) => {
                log::warn!("activity fetch failed: {err}");
                activity.update(|state| state.load = LoadState::Error);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = activity;
}
