//! Networking modules for the staff attendance API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls and `types` defines the shared wire schema.
//! This slice consumes request/response endpoints only; there is no
//! streaming or socket transport.

pub mod api;
pub mod types;
