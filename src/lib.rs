//! # storefront-ui
//!
//! Leptos + WASM interface primitives for the storefront: an expandable panel
//! group, a user avatar, Chart.js chart wrappers, a 404 view, and a role-aware
//! route guard.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Panel open-set bookkeeping ([`state::toggle_group::ToggleGroup`]) |
//! | [`chart`] | Single-slot drawable lifecycle and chart flavors |
//! | [`util`] | Access gate, credential store, avatar initials, class tables |
//! | [`components`] | Leptos components over the above |
//! | [`pages`] | Demo landing pages |
//! | [`app`] | Demo shell and routes |

pub mod app;
pub mod chart;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/console logging and hydrates the shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    log::debug!("hydrating storefront-ui");
    leptos::mount::hydrate_body(app::App);
}
