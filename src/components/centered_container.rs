//! Centered wrapper for transient page content.

use leptos::prelude::*;

/// Centers its children in the page body. Used for the loading, error, and
/// empty notices on both screens.
#[component]
pub fn CenteredContainer(children: Children) -> impl IntoView {
    view! { <div class="centered-container">{children()}</div> }
}
