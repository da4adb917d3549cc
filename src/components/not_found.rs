//! Fallback view for unknown routes.

use leptos::prelude::*;

/// 404 page with a link back to `home_href` (default `/`).
#[component]
pub fn NotFound(#[prop(optional, into)] home_href: Option<String>) -> impl IntoView {
    let href = home_href.unwrap_or_else(|| "/".to_owned());

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"The page you are looking for does not exist."</p>
            <a class="not-found__link" href=href>"Back to home"</a>
        </div>
    }
}
