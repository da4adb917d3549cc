//! Demo shell wiring the primitives into routed pages.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::not_found::NotFound;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::home::{AdminHome, CustomerHome, VendorHome};
use crate::pages::login::LoginPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every route except `/login` sits behind `ProtectedRoute`; unknown paths
/// fall through to `NotFound`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront-ui.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoute><CustomerHome/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("vendor")
                    view=|| view! {
                        <ProtectedRoute required_roles=vec!["vendor".to_owned()]>
                            <VendorHome/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! {
                        <ProtectedRoute required_roles=vec!["admin".to_owned()]>
                            <AdminHome/>
                        </ProtectedRoute>
                    }
                />
            </Routes>
        </Router>
    }
}
