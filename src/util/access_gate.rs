//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` evaluates the gate on every navigation with credentials
//! read fresh from the store. The gate only decides; navigation is performed
//! by the router.
//!
//! RULES
//! =====
//! 1. No token: send the user to login, remembering where they were going.
//! 2. Required roles given and the role is not among them: send the user to
//!    the home page for their own role.
//! 3. Otherwise render the requested view.
//!
//! An empty required-role list is treated like no list at all.

#[cfg(test)]
#[path = "access_gate_test.rs"]
mod access_gate_test;

use url::{Url, form_urlencoded};

/// Placeholder origin for resolving same-site return paths.
const LOCAL_ORIGIN: &str = "http://storefront.invalid/";

/// Inputs to one gate evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub token: Option<String>,
    pub role: String,
    pub required_roles: Option<Vec<String>>,
    pub origin_path: String,
}

/// Landing page chosen for a role that may not view the requested route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleHome {
    Admin,
    Vendor,
    Customer,
}

impl RoleHome {
    /// Map a role name to its landing page. Unknown roles land as customers.
    #[must_use]
    pub fn for_role(role: &str) -> Self {
        match role {
            "admin" => Self::Admin,
            "vendor" => Self::Vendor,
            _ => Self::Customer,
        }
    }

    #[must_use]
    pub fn path(self, routes: &RoleRoutes) -> &str {
        match self {
            Self::Admin => &routes.admin_home,
            Self::Vendor => &routes.vendor_home,
            Self::Customer => &routes.customer_home,
        }
    }
}

/// Outcome of a gate evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectLogin { from: String },
    RedirectRoleHome(RoleHome),
}

impl GateDecision {
    /// Path to navigate to, or `None` when the view should render.
    #[must_use]
    pub fn redirect_target(&self, routes: &RoleRoutes) -> Option<String> {
        match self {
            Self::Render => None,
            Self::RedirectLogin { from } => Some(login_redirect(routes, from)),
            Self::RedirectRoleHome(home) => Some(home.path(routes).to_owned()),
        }
    }
}

/// Route table the gate redirects into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleRoutes {
    pub login: String,
    pub admin_home: String,
    pub vendor_home: String,
    pub customer_home: String,
}

impl Default for RoleRoutes {
    fn default() -> Self {
        Self {
            login: "/login".to_owned(),
            admin_home: "/admin".to_owned(),
            vendor_home: "/vendor".to_owned(),
            customer_home: "/".to_owned(),
        }
    }
}

/// Decide whether the requested view may render.
#[must_use]
pub fn evaluate(ctx: &AuthContext) -> GateDecision {
    if ctx.token.is_none() {
        return GateDecision::RedirectLogin { from: ctx.origin_path.clone() };
    }
    if let Some(required) = ctx.required_roles.as_deref() {
        if !required.is_empty() && !required.iter().any(|r| r == &ctx.role) {
            return GateDecision::RedirectRoleHome(RoleHome::for_role(&ctx.role));
        }
    }
    GateDecision::Render
}

/// Login path carrying `from` as an encoded `redirect` query parameter.
#[must_use]
pub fn login_redirect(routes: &RoleRoutes, from: &str) -> String {
    if from.is_empty() {
        return routes.login.clone();
    }
    let encoded: String = form_urlencoded::byte_serialize(from.as_bytes()).collect();
    format!("{}?redirect={encoded}", routes.login)
}

/// Requested path plus its query string, as remembered for the login return.
///
/// `search` may come with or without its leading `?`.
#[must_use]
pub fn origin_path(pathname: &str, search: &str) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    if query.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{query}")
    }
}

/// Validate a post-login return path, falling back to `fallback`.
///
/// Only absolute paths on this site pass. Protocol-relative (`//host`),
/// backslash (`/\\host`) and full URLs are rejected.
#[must_use]
pub fn safe_return_path(raw: Option<&str>, fallback: &str) -> String {
    let Some(raw) = raw.map(str::trim) else {
        return fallback.to_owned();
    };
    if !raw.starts_with('/') || raw.starts_with("//") || raw.starts_with("/\\") {
        return fallback.to_owned();
    }
    let Ok(base) = Url::parse(LOCAL_ORIGIN) else {
        return fallback.to_owned();
    };
    match base.join(raw) {
        Ok(joined) if joined.origin() == base.origin() => raw.to_owned(),
        _ => fallback.to_owned(),
    }
}
