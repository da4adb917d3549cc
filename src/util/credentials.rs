//! Read-only access to the persisted login credentials.
//!
//! The browser store reads `localStorage` on every call so the route guard
//! always sees the latest login/logout. Outside the browser there is no store
//! and every read comes back empty.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use super::access_gate::AuthContext;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const ROLE_KEY: &str = "role";

/// Synchronous source of the current token and role.
pub trait CredentialStore {
    fn token(&self) -> Option<String>;
    fn role(&self) -> String;
}

/// Credentials persisted in the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            read_item(TOKEN_KEY).filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn role(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            read_item(ROLE_KEY).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }
}

impl BrowserCredentials {
    /// Persist a login. Used by the login page, never by the gate.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    pub fn sign_in(self, token: &str, role: &str) {
        #[cfg(feature = "hydrate")]
        {
            write_item(TOKEN_KEY, Some(token));
            write_item(ROLE_KEY, Some(role));
        }
    }

    /// Forget the stored login.
    pub fn sign_out(self) {
        #[cfg(feature = "hydrate")]
        {
            write_item(TOKEN_KEY, None);
            write_item(ROLE_KEY, None);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().unwrap_or(None)
}

#[cfg(feature = "hydrate")]
fn read_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).unwrap_or(None)
}

#[cfg(feature = "hydrate")]
fn write_item(key: &str, value: Option<&str>) {
    let Some(storage) = local_storage() else {
        return;
    };
    let result = match value {
        Some(value) => storage.set_item(key, value),
        None => storage.remove_item(key),
    };
    if result.is_err() {
        leptos::logging::warn!("credential store write failed: {key}");
    }
}

/// Fixed credentials, for server rendering and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticCredentials {
    pub token: Option<String>,
    pub role: String,
}

impl CredentialStore for StaticCredentials {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn role(&self) -> String {
        self.role.clone()
    }
}

/// Snapshot the store into a gate input for `origin_path`.
pub fn auth_context<S: CredentialStore + ?Sized>(
    store: &S,
    required_roles: Option<Vec<String>>,
    origin_path: &str,
) -> AuthContext {
    AuthContext {
        token: store.token(),
        role: store.role(),
        required_roles,
        origin_path: origin_path.to_owned(),
    }
}
