//! Credential snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is only readable in the browser, so server rendering and the
//! first hydration pass both see `loading: true`. Views render a neutral
//! placeholder until a client-side effect loads the snapshot, which keeps the
//! server markup and the hydrated markup identical.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::access_gate::{GateDecision, evaluate};
use crate::util::credentials::{CredentialStore, auth_context};

/// Token and role as last read from the credential store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub role: String,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, role: String::new(), loading: true }
    }
}

impl AuthState {
    /// Snapshot `store` now.
    pub fn loaded<S: CredentialStore + ?Sized>(store: &S) -> Self {
        Self { token: store.token(), role: store.role(), loading: false }
    }

    /// Gate decision for `origin_path`, or `None` while still loading.
    #[must_use]
    pub fn decide(&self, required_roles: Option<Vec<String>>, origin_path: &str) -> Option<GateDecision> {
        if self.loading {
            return None;
        }
        Some(evaluate(&auth_context(self, required_roles, origin_path)))
    }

    /// Name shown on the user's avatar; empty while loading.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.loading { String::new() } else { self.role.clone() }
    }
}

impl CredentialStore for AuthState {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn role(&self) -> String {
        self.role.clone()
    }
}
