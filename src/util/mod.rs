//! Utility helpers shared across the UI primitives.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the pure decision and mapping logic so components stay
//! thin and the logic is testable without a browser.

pub mod access_gate;
pub mod avatar;
pub mod credentials;
pub mod presentation;
