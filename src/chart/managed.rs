//! Single-slot ownership of an external drawable.
//!
//! ARCHITECTURE
//! ============
//! The drawing library is reached only through `DrawableFactory`, so the
//! lifecycle here is testable on the host with a recording fake. Hosts call
//! `reconcile` from their update effect and `teardown` from their cleanup hook.
//!
//! INVARIANTS
//! ==========
//! - At most one live drawable exists per `ManagedVisual`.
//! - The previous drawable is destroyed before the next one is constructed.
//! - A failed construction leaves the slot empty.

#[cfg(test)]
#[path = "managed_test.rs"]
mod managed_test;

use serde::Serialize;
use serde_json::{Map, Value, json};

use super::error::ChartError;

/// Chart type understood by the drawing library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisualKind {
    Line,
    Bar,
    Pie,
    Doughnut,
    /// Any other chart type registered with the library, by name.
    Custom(String),
}

impl VisualKind {
    /// Library type name for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Custom(name) => name.as_str(),
        }
    }
}

/// Declarative description of one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualSpec {
    pub kind: VisualKind,
    pub data: Value,
    pub options: Value,
}

impl VisualSpec {
    #[must_use]
    pub fn new(kind: VisualKind, data: Value) -> Self {
        Self { kind, data, options: Value::Object(Map::new()) }
    }

    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

/// Configuration object handed to the drawing library's constructor.
#[derive(Debug, Serialize)]
pub struct DrawableConfig<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub data: &'a Value,
    pub options: &'a Value,
}

impl<'a> DrawableConfig<'a> {
    #[must_use]
    pub fn new(kind: &'a VisualKind, data: &'a Value, options: &'a Value) -> Self {
        Self { kind: kind.as_str(), data, options }
    }

    /// JSON text for the library boundary.
    pub fn to_json(&self) -> Result<String, ChartError> {
        serde_json::to_string(self).map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }
}

/// A live chart object owned by the drawing library.
pub trait Drawable {
    /// Release everything bound to this drawable's configuration.
    fn destroy(&mut self);
}

/// Constructs drawables on a host-provided surface.
pub trait DrawableFactory {
    type Surface;
    type Handle: Drawable;

    /// Build a drawable for `kind` with fully merged `options`.
    ///
    /// # Errors
    ///
    /// Returns a `ChartError` when the surface or library cannot produce one.
    fn create(
        &mut self,
        surface: &Self::Surface,
        kind: &VisualKind,
        data: &Value,
        options: &Value,
    ) -> Result<Self::Handle, ChartError>;
}

/// Options every chart starts from before caller overrides.
#[must_use]
pub fn baseline_options() -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
    })
}

/// Shallow merge: top-level keys of `overrides` replace those in `base`.
///
/// A non-object `overrides` contributes nothing.
#[must_use]
pub fn merge_options(base: &Value, overrides: &Value) -> Value {
    let mut merged = match base {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    if let Value::Object(map) = overrides {
        for (key, value) in map {
            merged.insert(key.clone(), value.clone());
        }
    }
    Value::Object(merged)
}

struct Live<H> {
    handle: H,
    spec: VisualSpec,
}

/// Owner of at most one drawable built by `F`.
pub struct ManagedVisual<F: DrawableFactory> {
    factory: F,
    live: Option<Live<F::Handle>>,
}

impl<F: DrawableFactory> ManagedVisual<F> {
    #[must_use]
    pub fn new(factory: F) -> Self {
        Self { factory, live: None }
    }

    /// Whether a drawable currently exists.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Spec of the current drawable, if any.
    #[must_use]
    pub fn spec(&self) -> Option<&VisualSpec> {
        self.live.as_ref().map(|live| &live.spec)
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Destroy the current drawable and build a fresh one from `spec`.
    ///
    /// # Errors
    ///
    /// Propagates the factory's `ChartError`; the slot is then empty.
    pub fn reconcile(&mut self, spec: VisualSpec, surface: &F::Surface) -> Result<(), ChartError> {
        self.teardown();
        let options = merge_options(&baseline_options(), &spec.options);
        let handle = self.factory.create(surface, &spec.kind, &spec.data, &options)?;
        self.live = Some(Live { handle, spec });
        Ok(())
    }

    /// Destroy the current drawable, if any. Returns whether one was live.
    pub fn teardown(&mut self) -> bool {
        let Some(mut live) = self.live.take() else {
            return false;
        };
        live.handle.destroy();
        true
    }
}

impl<F: DrawableFactory> Drop for ManagedVisual<F> {
    fn drop(&mut self) {
        self.teardown();
    }
}
