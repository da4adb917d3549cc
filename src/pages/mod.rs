//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages compose the primitives in `components` for the demo shell; they hold
//! no logic of their own beyond sample data.

pub mod home;
pub mod login;
