//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain data so components can hold them in a `RwSignal`
//! and tests can drive them without a reactive runtime.

pub mod auth;
pub mod toggle_group;
