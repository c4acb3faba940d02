//! Home board page: the daily roster with sort, search, and roll taking.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the staff landing route. It fetches the roster once on mount,
//! owns the roster signal for the whole screen, and funnels every toolbar,
//! tile, and overlay interaction through `RosterState` so the visible list
//! is always derived from one source of truth. The signal is provided here
//! rather than at the app root: navigating away discards marks in progress.

#[cfg(test)]
#[path = "home_board_test.rs"]
mod home_board_test;

use leptos::prelude::*;

use crate::components::active_roll_overlay::{ActiveRollAction, ActiveRollOverlay};
use crate::components::centered_container::CenteredContainer;
use crate::components::student_list_tile::StudentListTile;
use crate::net::types::RollState;
use crate::state::load::LoadState;
use crate::state::roster::{RosterState, SortKey, ViewMode};

/// Actions the toolbar can emit back to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Re-sort the roster on a name field, toggling direction on repeat.
    Sort(SortKey),
    /// Enter roll mode.
    StartRoll,
}

/// Parse the sort select's value. Unknown values fall back to first name
/// so a stale DOM state can never panic the page.
fn sort_key_from_value(value: &str) -> SortKey {
    match value {
        "last_name" => SortKey::LastName,
        _ => SortKey::FirstName,
    }
}

/// Empty-roster notice for the active view mode.
fn empty_message(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Default => "No students on this board.",
        ViewMode::Search => "No students match your search.",
        ViewMode::Filter => "No students in this group.",
    }
}

/// Home board page: roster list plus the roll overlay.
#[component]
pub fn HomeBoardPage() -> impl IntoView {
    let roster = RwSignal::new(RosterState::default());
    provide_context(roster);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        roster.update(|state| state.load = LoadState::Loading);
        fetch_roster(roster);
    });

    let on_toolbar_action = Callback::new(move |action: ToolbarAction| match action {
        ToolbarAction::Sort(key) => roster.update(|state| state.sort_by(key)),
        ToolbarAction::StartRoll => roster.update(RosterState::start_roll),
    });

    let on_search = Callback::new(move |text: String| {
        roster.update(|state| state.search = text);
    });

    let on_overlay_action = Callback::new(move |action: ActiveRollAction| match action {
        ActiveRollAction::Filter(filter) => {
            roster.update(|state| state.roll_filter = Some(filter));
        }
        ActiveRollAction::Exit => roster.update(RosterState::exit_roll),
        ActiveRollAction::Save => submit_roll(roster),
    });

    let load = move || roster.get().load;

    view! {
        <div class="home-board-page">
            <Toolbar on_item_click=on_toolbar_action on_search=on_search/>

            <Show when=move || matches!(load(), LoadState::Idle | LoadState::Loading)>
                <CenteredContainer>
                    <div class="home-board-page__loading">"Loading students..."</div>
                </CenteredContainer>
            </Show>

            <Show when=move || load() == LoadState::Error>
                <CenteredContainer>
                    <div class="home-board-page__error">"Failed to load"</div>
                </CenteredContainer>
            </Show>

            <Show when=move || load() == LoadState::Loaded>
                {move || {
                    let state = roster.get();
                    let is_roll_mode = state.roll_mode;
                    let visible: Vec<_> = state.visible_students().into_iter().cloned().collect();
                    if visible.is_empty() {
                        let message = empty_message(state.view_mode());
                        return view! {
                            <CenteredContainer>
                                <div class="home-board-page__empty">{message}</div>
                            </CenteredContainer>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="home-board-page__list">
                            {visible
                                .into_iter()
                                .map(|student| {
                                    let student_id = student.id;
                                    let on_roll_change = Callback::new(move |next: RollState| {
                                        roster.update(|state| state.mark(student_id, next));
                                    });
                                    view! {
                                        <StudentListTile
                                            student=student
                                            is_roll_mode=is_roll_mode
                                            on_roll_change=on_roll_change
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }}
            </Show>
        </div>
        <ActiveRollOverlay on_action=on_overlay_action/>
    }
}

/// Toolbar across the top of the board: sort controls, search, roll entry.
#[component]
fn Toolbar(on_item_click: Callback<ToolbarAction>, on_search: Callback<String>) -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();
    let sort_value = RwSignal::new(String::new());

    let on_sort_click = move |_| {
        on_item_click.run(ToolbarAction::Sort(sort_key_from_value(&sort_value.get())));
    };

    view! {
        <header class="home-board-page__toolbar toolbar">
            <select
                class="toolbar__sort-select"
                aria-label="Sort students by"
                on:change=move |ev| sort_value.set(event_target_value(&ev))
            >
                <option value="first_name">"First Name"</option>
                <option value="last_name">"Last Name"</option>
            </select>
            <button class="btn toolbar__sort" on:click=on_sort_click title="Sort, toggling direction">
                {move || if roster.get().sort_ascending { "[SORT ▲]" } else { "[SORT ▼]" }}
            </button>

            <input
                class="toolbar__search"
                type="text"
                placeholder="Search"
                prop:value=move || roster.get().search
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />

            <span class="toolbar__spacer"></span>

            <button class="btn btn--primary toolbar__start-roll" on:click=move |_| on_item_click.run(ToolbarAction::StartRoll)>
                "Start Roll"
            </button>
        </header>
    }
}

/// Request the roster once. The effect that calls this runs after
/// hydration; on the server the page just renders its loading state.
fn fetch_roster(roster: RwSignal<RosterState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_homeboard_students().await {
            Ok(students) => roster.update(|state| {
                state.students = students;
                state.load = LoadState::Loaded;
            }),
            Err(err) => {
                log::warn!("student fetch failed: {err}");
                roster.update(|state| state.load = LoadState::Error);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = roster;
}

/// Submit the current roll for every student on the roster. Success leaves
/// roll mode; failure keeps the overlay up so marks are not lost.
fn submit_roll(roster: RwSignal<RosterState>) {
    if roster.get_untracked().save == LoadState::Loading {
        return;
    }
    let records = roster.get_untracked().save_payload();
    roster.update(|state| state.save = LoadState::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::save_active_roll(&records).await {
            Ok(()) => roster.update(|state| {
                state.save = LoadState::Loaded;
                state.exit_roll();
            }),
            Err(err) => {
                log::warn!("roll save failed: {err}");
                roster.update(|state| state.save = LoadState::Error);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = records;
}
