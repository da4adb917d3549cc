use super::*;
use crate::util::credentials::StaticCredentials;

fn signed_in(role: &str) -> StaticCredentials {
    StaticCredentials { token: Some("demo-token".to_owned()), role: role.to_owned() }
}

#[test]
fn default_state_is_loading_without_credentials() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.token, None);
    assert_eq!(state.role, "");
}

#[test]
fn loading_state_makes_no_decision_even_with_requirements() {
    let state = AuthState::default();
    assert_eq!(state.decide(None, "/"), None);
    assert_eq!(state.decide(Some(vec!["admin".to_owned()]), "/admin"), None);
}

#[test]
fn loading_state_shows_no_name_or_credentials() {
    // Server rendering and the first hydration pass both start here.
    let before_load = AuthState::default();
    assert_eq!(before_load.display_name(), "");
    assert_eq!(CredentialStore::token(&before_load), None);
}

#[test]
fn loaded_state_snapshots_store() {
    let state = AuthState::loaded(&signed_in("vendor"));
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("demo-token"));
    assert_eq!(state.role, "vendor");
    assert_eq!(state.display_name(), "vendor");
}

#[test]
fn loaded_signed_in_user_renders() {
    let state = AuthState::loaded(&signed_in("customer"));
    assert_eq!(state.decide(None, "/"), Some(GateDecision::Render));
}

#[test]
fn loaded_signed_out_user_redirects_to_login() {
    let state = AuthState::loaded(&StaticCredentials::default());
    assert_eq!(
        state.decide(None, "/orders?tab=items"),
        Some(GateDecision::RedirectLogin { from: "/orders?tab=items".to_owned() })
    );
}

#[test]
fn loaded_wrong_role_redirects_home() {
    let state = AuthState::loaded(&signed_in("vendor"));
    assert_eq!(
        state.decide(Some(vec!["admin".to_owned()]), "/admin"),
        Some(GateDecision::RedirectRoleHome(crate::util::access_gate::RoleHome::Vendor))
    );
}
