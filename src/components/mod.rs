//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are thin Leptos views over the logic in `state`, `chart`, and
//! `util`; each can be dropped into any page on its own.

pub mod accordion;
pub mod avatar;
pub mod chart;
pub mod not_found;
pub mod protected_route;
