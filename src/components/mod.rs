//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the staff screens' building blocks while reading shared
//! roster state from Leptos context providers. Mutations flow back to the
//! owning page through callbacks rather than being applied in place.

pub mod active_roll_overlay;
pub mod centered_container;
pub mod roll_state_icon;
pub mod roll_state_list;
pub mod roll_state_switcher;
pub mod student_list_tile;
