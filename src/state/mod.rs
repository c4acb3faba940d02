//! Application state modules held in `RwSignal` contexts.
//!
//! DESIGN
//! ======
//! State structs are plain data with derivation methods so the view logic
//! stays unit-testable without a reactive runtime. Pages own the signals;
//! the roster signal is provided page-scoped so navigation discards it.

pub mod activity;
pub mod load;
pub mod roster;
