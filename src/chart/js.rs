//! Chart.js binding used as the browser drawing library.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is expected to load Chart.js as a global `Chart` constructor.
//! Configuration crosses the boundary as JSON text so no JS object is
//! assembled by hand on the Rust side.

use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::ChartError;
use super::managed::{Drawable, DrawableConfig, DrawableFactory, VisualKind};

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);
}

/// Live Chart.js instance.
pub struct ChartJsHandle {
    chart: Chart,
}

impl Drawable for ChartJsHandle {
    fn destroy(&mut self) {
        self.chart.destroy();
    }
}

/// Builds Chart.js instances on canvas elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartJsFactory;

impl DrawableFactory for ChartJsFactory {
    type Surface = HtmlCanvasElement;
    type Handle = ChartJsHandle;

    fn create(
        &mut self,
        surface: &HtmlCanvasElement,
        kind: &VisualKind,
        data: &Value,
        options: &Value,
    ) -> Result<ChartJsHandle, ChartError> {
        if !library_loaded() {
            return Err(ChartError::LibraryMissing);
        }
        let ctx = surface
            .get_context("2d")
            .map_err(|_| ChartError::SurfaceUnavailable)?
            .ok_or(ChartError::SurfaceUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::SurfaceUnavailable)?;

        let text = DrawableConfig::new(kind, data, options).to_json()?;
        let config = js_sys::JSON::parse(&text).map_err(|e| ChartError::InvalidConfig(describe(&e)))?;

        let chart = Chart::new(&ctx, &config).map_err(|e| ChartError::Construction(describe(&e)))?;
        Ok(ChartJsHandle { chart })
    }
}

fn library_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
