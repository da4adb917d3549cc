use super::*;
use crate::util::access_gate::{GateDecision, evaluate};

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_credentials_are_empty_outside_browser() {
    let store = BrowserCredentials;
    assert_eq!(store.token(), None);
    assert_eq!(store.role(), "");
}

#[test]
fn static_credentials_return_configured_values() {
    let store = StaticCredentials { token: Some("abc".to_owned()), role: "vendor".to_owned() };
    assert_eq!(store.token(), Some("abc".to_owned()));
    assert_eq!(store.role(), "vendor");
}

#[test]
fn auth_context_snapshots_store_and_path() {
    let store = StaticCredentials { token: Some("abc".to_owned()), role: "admin".to_owned() };
    let ctx = auth_context(&store, Some(vec!["admin".to_owned()]), "/admin/users");
    assert_eq!(ctx.token.as_deref(), Some("abc"));
    assert_eq!(ctx.role, "admin");
    assert_eq!(ctx.required_roles, Some(vec!["admin".to_owned()]));
    assert_eq!(ctx.origin_path, "/admin/users");
}

#[test]
fn auth_context_reads_store_fresh_each_time() {
    let mut store = StaticCredentials::default();
    let before = evaluate(&auth_context(&store, None, "/"));
    assert_eq!(before, GateDecision::RedirectLogin { from: "/".to_owned() });

    store.token = Some("abc".to_owned());
    let after = evaluate(&auth_context(&store, None, "/"));
    assert_eq!(after, GateDecision::Render);
}

#[test]
fn auth_context_accepts_trait_objects() {
    let store: Box<dyn CredentialStore> = Box::new(StaticCredentials::default());
    let ctx = auth_context(store.as_ref(), None, "/cart");
    assert_eq!(ctx.token, None);
    assert_eq!(ctx.origin_path, "/cart");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_sign_in_and_out_are_callable_outside_browser() {
    BrowserCredentials.sign_in("abc", "admin");
    assert_eq!(BrowserCredentials.token(), None);
    BrowserCredentials.sign_out();
    assert_eq!(BrowserCredentials.role(), "");
}
