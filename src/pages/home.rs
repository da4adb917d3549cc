//! Role landing pages built from the shared primitives.

use leptos::prelude::*;
use serde_json::{Value, json};

use crate::components::accordion::{Accordion, Panel, PanelContent};
use crate::components::avatar::Avatar;
use crate::components::chart::{AreaChart, BarChart, LineChart, PieChart};
use crate::state::auth::AuthState;
use crate::util::credentials::BrowserCredentials;
use crate::util::presentation::{AccordionVariant, AvatarSize};

fn monthly_sales() -> Value {
    json!({
        "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        "datasets": [
            { "label": "Orders", "data": [12, 19, 7, 15, 22, 30] },
            { "label": "Returns", "data": [1, 3, 0, 2, 4, 2] },
        ],
    })
}

fn category_split() -> Value {
    json!({
        "labels": ["Apparel", "Home", "Garden"],
        "datasets": [{ "data": [45, 35, 20] }],
    })
}

/// Customer landing page.
#[component]
pub fn CustomerHome() -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    Effect::new(move || auth.set(AuthState::loaded(&BrowserCredentials)));
    let display_name = Signal::derive(move || auth.with(AuthState::display_name));
    let panels = vec![
        Panel::new("Orders", PanelContent::fixed(|| "You have no open orders."))
            .with_icon("box")
            .with_badge("0"),
        Panel::new(
            "Shipping",
            PanelContent::from_fn(|is_open| {
                if is_open { "Standard delivery takes 3-5 days." } else { "" }
            }),
        )
        .with_icon("truck"),
        Panel::new("Returns", PanelContent::fixed(|| "Returns are accepted within 30 days.")),
    ];

    view! {
        <section class="home home--customer">
            <header class="home__header">
                <Avatar name=display_name size=AvatarSize::Lg/>
                <h1>"Welcome back"</h1>
            </header>
            <Accordion panels=panels default_open=vec![0]/>
        </section>
    }
}

/// Vendor landing page.
#[component]
pub fn VendorHome() -> impl IntoView {
    let sales = RwSignal::new(monthly_sales());

    view! {
        <section class="home home--vendor">
            <h1>"Vendor dashboard"</h1>
            <LineChart data=sales class="home__chart"/>
            <AreaChart data=sales class="home__chart"/>
            <BarChart data=sales stacked=true class="home__chart"/>
        </section>
    }
}

/// Admin landing page.
#[component]
pub fn AdminHome() -> impl IntoView {
    let categories = RwSignal::new(category_split());
    let panels = vec![
        Panel::new(
            "Category split",
            PanelContent::fixed(move || view! { <PieChart data=categories doughnut=true cutout_percent=60.0/> }),
        ),
        Panel::new(
            "Top vendors",
            PanelContent::fixed(|| view! { <BarChart data=Signal::derive(monthly_sales) horizontal=true/> }),
        ),
    ];

    view! {
        <section class="home home--admin">
            <h1>"Admin overview"</h1>
            <Accordion panels=panels allow_multiple=true variant=AccordionVariant::Separated/>
        </section>
    }
}
