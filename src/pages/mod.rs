//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and orchestration (fetching, signals,
//! action handling) and delegates rendering details to `components`.

pub mod activity;
pub mod home_board;
