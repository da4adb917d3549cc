//! Expandable panel group.
//!
//! DESIGN
//! ======
//! Open/closed bookkeeping lives in `ToggleGroup`; this component only maps
//! header clicks to `toggle` and reads `is_open` per panel through a memo, so
//! toggling one panel only wakes the panels whose flag changed. Content
//! regions stay mounted and are hidden when closed. Static content is built
//! once; render functions rerun when their own open flag changes.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::state::toggle_group::{ToggleGroup, ToggleMode};
use crate::util::presentation::AccordionVariant;

type RenderFn = Arc<dyn Fn(bool) -> AnyView + Send + Sync>;

/// Body of a panel: fixed, or rebuilt from the panel's open flag.
#[derive(Clone)]
pub enum PanelContent {
    Static(ViewFn),
    Render(RenderFn),
}

impl PanelContent {
    /// Content that ignores the open flag.
    pub fn fixed<F, V>(view: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Self::Static(ViewFn::from(move || view().into_any()))
    }

    /// Content built from the open flag on every change.
    pub fn from_fn<F, V>(render: F) -> Self
    where
        F: Fn(bool) -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Self::Render(Arc::new(move |is_open| render(is_open).into_any()))
    }

    pub fn render(&self, is_open: bool) -> AnyView {
        match self {
            Self::Static(view) => view.run(),
            Self::Render(render) => render(is_open),
        }
    }
}

/// Open flag for one panel, changing only when that panel opens or closes.
fn open_memo(group: RwSignal<ToggleGroup>, index: usize) -> Memo<bool> {
    Memo::new(move |_| group.with(|g| g.is_open(index)))
}

/// Mount a panel body. Static views run once here; render functions are
/// wrapped so they track `is_open` alone.
fn panel_body(content: PanelContent, is_open: Memo<bool>) -> AnyView {
    match content {
        PanelContent::Static(view) => view.run(),
        dynamic @ PanelContent::Render(_) => (move || dynamic.render(is_open.get())).into_any(),
    }
}

/// One entry in an accordion.
#[derive(Clone)]
pub struct Panel {
    pub title: String,
    pub icon: Option<String>,
    pub badge: Option<String>,
    pub content: PanelContent,
}

impl Panel {
    pub fn new(title: impl Into<String>, content: PanelContent) -> Self {
        Self { title: title.into(), icon: None, badge: None, content }
    }

    /// Icon tag handed to the stylesheet through `data-icon`.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// Expandable panel group.
///
/// With `allow_multiple` unset, opening one panel closes the others.
#[component]
pub fn Accordion(
    panels: Vec<Panel>,
    #[prop(optional)] allow_multiple: bool,
    #[prop(optional)] default_open: Vec<usize>,
    #[prop(optional)] variant: AccordionVariant,
) -> impl IntoView {
    let mode = if allow_multiple { ToggleMode::Multiple } else { ToggleMode::Single };
    let group = RwSignal::new(ToggleGroup::new(mode, panels.len(), &default_open));

    let items = panels
        .into_iter()
        .enumerate()
        .map(|(index, panel)| accordion_item(index, panel, group))
        .collect_view();

    view! { <div class=variant.class()>{items}</div> }
}

fn accordion_item(index: usize, panel: Panel, group: RwSignal<ToggleGroup>) -> impl IntoView {
    let Panel { title, icon, badge, content } = panel;
    let open = open_memo(group, index);
    let is_open = move || open.get();

    view! {
        <div class="accordion__item" class:accordion__item--open=is_open>
            <button
                type="button"
                class="accordion__header"
                aria-expanded=move || if is_open() { "true" } else { "false" }
                on:click=move |_| {
                    group.update(|g| {
                        g.toggle(index);
                    });
                }
            >
                {icon.map(|icon| view! { <span class="accordion__icon" data-icon=icon aria-hidden="true"></span> })}
                <span class="accordion__title">{title}</span>
                {badge.map(|badge| view! { <span class="accordion__badge">{badge}</span> })}
                <span class="accordion__chevron" aria-hidden="true">
                    {move || if is_open() { "▾" } else { "▸" }}
                </span>
            </button>
            <div class="accordion__content" role="region" hidden=move || !is_open()>
                {panel_body(content, open)}
            </div>
        </div>
    }
}
