//! Core, DOM-free primitives and helpers for the Web UI.
pub mod preference;
pub mod store;
