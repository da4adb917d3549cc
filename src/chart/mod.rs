//! Chart lifecycle and configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `managed` owns the single live drawable per chart view, `variants` builds
//! the configuration for each chart flavor, and `js` binds the browser's
//! Chart.js constructor as the drawing library.

pub mod error;
#[cfg(feature = "hydrate")]
pub mod js;
pub mod managed;
pub mod variants;
