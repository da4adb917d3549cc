//! Demo sign-in page that stores a token for a chosen role.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::util::access_gate::safe_return_path;
use crate::util::credentials::BrowserCredentials;

const DEMO_ROLES: [&str; 3] = ["customer", "vendor", "admin"];

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();

    let buttons = DEMO_ROLES
        .into_iter()
        .map(|role| {
            let navigate = navigate.clone();
            let on_click = move |_: leptos::ev::MouseEvent| {
                BrowserCredentials.sign_in("demo-token", role);
                let target = query.with(|q| safe_return_path(q.get("redirect").as_deref(), "/"));
                navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            };
            view! {
                <button class="login-button" type="button" on:click=on_click>
                    {format!("Sign in as {role}")}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Storefront"</h1>
                <p class="login-card__subtitle">"Pick a demo role"</p>
                {buttons}
                <button
                    class="login-button login-button--secondary"
                    type="button"
                    on:click=move |_| BrowserCredentials.sign_out()
                >
                    "Sign out"
                </button>
            </div>
        </div>
    }
}
