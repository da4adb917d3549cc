//! Canvas host for Chart.js drawables.
//!
//! ARCHITECTURE
//! ============
//! `ManagedVisual` owns the drawable. The update effect reconciles it whenever
//! the `spec` signal changes or the canvas mounts, and the cleanup hook tears it
//! down when the view goes away. Flavor components only derive a spec.

use leptos::prelude::*;
use serde_json::Value;

#[cfg(feature = "hydrate")]
use crate::chart::js::ChartJsFactory;
#[cfg(feature = "hydrate")]
use crate::chart::managed::ManagedVisual;
use crate::chart::managed::VisualSpec;
use crate::chart::variants::{area_spec, bar_spec, line_spec, pie_spec};

/// Chart bound to a reactive spec.
#[component]
pub fn Chart(
    #[prop(into)] spec: Signal<VisualSpec>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] aria_label: String,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let visual = StoredValue::new_local(ManagedVisual::new(ChartJsFactory));
        let canvas_ref = canvas_ref.clone();
        Effect::new(move || {
            let spec = spec.get();
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            match visual.try_update_value(|v| v.reconcile(spec, &canvas)) {
                Some(Ok(())) => error.set(None),
                Some(Err(e)) => {
                    leptos::logging::warn!("chart build failed: {e}");
                    error.set(Some(e.to_string()));
                }
                None => {}
            }
        });
        on_cleanup(move || {
            if visual.try_update_value(ManagedVisual::teardown) == Some(true) {
                leptos::logging::log!("chart torn down");
            }
        });
    }

    let label = move || {
        if aria_label.is_empty() {
            spec.with(|s| format!("{} chart", s.kind.as_str()))
        } else {
            aria_label.clone()
        }
    };

    view! {
        <div class=format!("chart {class}").trim_end().to_owned()>
            <canvas
                class="chart__canvas"
                node_ref=canvas_ref
                role="img"
                aria-label=label
                data-kind=move || spec.with(|s| s.kind.as_str().to_owned())
            ></canvas>
            <Show when=move || error.get().is_some()>
                <p class="chart__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// Line chart over `data`.
#[component]
pub fn LineChart(
    #[prop(into)] data: Signal<Value>,
    #[prop(optional)] options: Value,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let spec = Signal::derive(move || line_spec(data.get(), &options));
    view! { <Chart spec=spec class=class/> }
}

/// Bar chart over `data`.
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Value>,
    #[prop(optional)] horizontal: bool,
    #[prop(optional)] stacked: bool,
    #[prop(optional)] options: Value,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let spec = Signal::derive(move || bar_spec(data.get(), horizontal, stacked, &options));
    view! { <Chart spec=spec class=class/> }
}

/// Pie chart, or doughnut when `doughnut` is set.
#[component]
pub fn PieChart(
    #[prop(into)] data: Signal<Value>,
    #[prop(optional)] doughnut: bool,
    #[prop(default = 50.0)] cutout_percent: f64,
    #[prop(optional)] options: Value,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let spec = Signal::derive(move || pie_spec(data.get(), doughnut, cutout_percent, &options));
    view! { <Chart spec=spec class=class/> }
}

/// Line chart with every series filled.
#[component]
pub fn AreaChart(
    #[prop(into)] data: Signal<Value>,
    #[prop(optional)] options: Value,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let spec = Signal::derive(move || area_spec(data.get(), &options));
    view! { <Chart spec=spec class=class/> }
}
