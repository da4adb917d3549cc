//! Route guard that renders children only for permitted users.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential store only exists in the browser. The guard starts from a
//! loading `AuthState` and shows a neutral placeholder, so server markup and
//! the first hydration pass agree. A client-side effect then reloads the
//! store on every path change and the gate decides. Redirects replace the
//! current history entry so the back button does not bounce through the guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::access_gate::{GateDecision, RoleRoutes, origin_path};
use crate::util::credentials::BrowserCredentials;

/// Guard for a routed view.
///
/// Without `required_roles` any signed-in user may pass.
#[component]
pub fn ProtectedRoute(
    #[prop(optional)] required_roles: Option<Vec<String>>,
    #[prop(optional)] routes: Option<RoleRoutes>,
    children: ChildrenFn,
) -> impl IntoView {
    let routes = routes.unwrap_or_default();
    let location = use_location();
    let navigate = use_navigate();
    let auth = RwSignal::new(AuthState::default());

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        location.pathname.track();
        auth.set(AuthState::loaded(&BrowserCredentials));
    });

    let decision = Memo::new(move |_| {
        let origin = origin_path(&location.pathname.get(), &location.search.get());
        auth.with(|state| state.decide(required_roles.clone(), &origin))
    });

    Effect::new(move || {
        let Some(target) = decision.get().and_then(|d| d.redirect_target(&routes)) else {
            return;
        };
        leptos::logging::log!("access gate redirect: {target}");
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! {
        <Show
            when=move || decision.get() == Some(GateDecision::Render)
            fallback=|| view! { <div class="route-guard route-guard--pending" aria-busy="true"></div> }
        >
            {children()}
        </Show>
    }
}
