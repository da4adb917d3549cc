//! Pre-built chart flavors.
//!
//! Each builder only fills in a `VisualSpec`; lifecycle stays with
//! `ManagedVisual`. Caller options are merged last so they override the
//! flavor defaults.

#[cfg(test)]
#[path = "variants_test.rs"]
mod variants_test;

use serde_json::{Value, json};

use super::managed::{VisualKind, VisualSpec, merge_options};

/// Line chart with index-mode tooltips.
#[must_use]
pub fn line_spec(data: Value, options: &Value) -> VisualSpec {
    let defaults = json!({
        "interaction": { "mode": "index", "intersect": false },
    });
    VisualSpec::new(VisualKind::Line, data).with_options(merge_options(&defaults, options))
}

/// Bar chart, optionally horizontal and/or stacked.
#[must_use]
pub fn bar_spec(data: Value, horizontal: bool, stacked: bool, options: &Value) -> VisualSpec {
    let mut defaults = json!({
        "indexAxis": if horizontal { "y" } else { "x" },
    });
    if stacked {
        defaults["scales"] = json!({
            "x": { "stacked": true },
            "y": { "stacked": true },
        });
    }
    VisualSpec::new(VisualKind::Bar, data).with_options(merge_options(&defaults, options))
}

/// Pie chart, or a doughnut with a `cutout_percent` hole.
///
/// The percentage is clamped to `0..=100` and passed to the library in its
/// `"NN%"` string form.
#[must_use]
pub fn pie_spec(data: Value, doughnut: bool, cutout_percent: f64, options: &Value) -> VisualSpec {
    let kind = if doughnut { VisualKind::Doughnut } else { VisualKind::Pie };
    let defaults = if doughnut {
        json!({ "cutout": cutout_value(cutout_percent) })
    } else {
        json!({ "cutout": 0 })
    };
    VisualSpec::new(kind, data).with_options(merge_options(&defaults, options))
}

/// Line chart whose every series renders filled down to the axis.
#[must_use]
pub fn area_spec(mut data: Value, options: &Value) -> VisualSpec {
    fill_series(&mut data);
    line_spec(data, options)
}

fn cutout_value(percent: f64) -> String {
    let percent = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
    format!("{percent}%")
}

fn fill_series(data: &mut Value) {
    let Some(datasets) = data.get_mut("datasets").and_then(Value::as_array_mut) else {
        return;
    };
    for series in datasets.iter_mut() {
        if let Value::Object(map) = series {
            map.insert("fill".to_owned(), Value::Bool(true));
        }
    }
}
