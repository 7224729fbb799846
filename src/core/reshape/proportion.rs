use serde_json::Value;
use tracing::trace;

use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::{cell_label, coerce_numeric};
use crate::core::spec::{ChartSpec, SeriesBinding};
use crate::core::types::{Record, field_present};

use super::numeric_column;

#[derive(Debug, Clone, PartialEq)]
pub struct ProportionSlice {
    pub name: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProportionData {
    pub slices: Vec<ProportionSlice>,
}

/// Builds `{name, value}` slices for pie-family and funnel charts.
///
/// Resolution order:
/// 1. cells of the first visible binding that already are `{name, value}` objects;
/// 2. one visible binding plus an x field: one slice per row;
/// 3. otherwise each visible binding collapses to one slice holding the sum of
///    its column, with missing and non-numeric cells counted as zero. A sum
///    that overflows to infinity becomes a `None` slice.
#[must_use]
pub fn reshape_proportion(
    rows: &[Record],
    spec: &ChartSpec,
    diagnostics: &mut Diagnostics,
) -> ProportionData {
    let visible: Vec<&SeriesBinding> = spec.visible_series().collect();
    let Some(first) = visible.first() else {
        if !rows.is_empty() {
            diagnostics.missing_binding("series");
        }
        return ProportionData::default();
    };

    if let Some(slices) = named_value_cells(rows, &first.id) {
        trace!(slices = slices.len(), "proportion slices from named cells");
        return ProportionData { slices };
    }

    let x_field = spec
        .x_axis_field
        .as_deref()
        .filter(|field| !field.is_empty() && field_present(rows, field));

    let slices: Vec<ProportionSlice> = match (visible.as_slice(), x_field) {
        ([single], Some(x_field)) => {
            let values = numeric_column(rows, &single.id, diagnostics);
            rows.iter()
                .zip(values)
                .map(|(row, value)| ProportionSlice {
                    name: cell_label(row.get(x_field)),
                    value,
                })
                .collect()
        }
        _ => visible
            .iter()
            .map(|binding| {
                let total = numeric_column(rows, &binding.id, diagnostics)
                    .into_iter()
                    .map(|value| value.unwrap_or(0.0))
                    .sum::<f64>();
                let value = if total.is_finite() {
                    Some(total)
                } else {
                    diagnostics.non_finite(&binding.id);
                    None
                };
                ProportionSlice {
                    name: binding.display_name().to_owned(),
                    value,
                }
            })
            .collect(),
    };

    trace!(slices = slices.len(), "proportion slices");
    ProportionData { slices }
}

fn named_value_cells(rows: &[Record], field: &str) -> Option<Vec<ProportionSlice>> {
    let first_cell = rows.iter().find_map(|row| row.get(field))?;
    if !is_named_value(first_cell) {
        return None;
    }

    Some(
        rows.iter()
            .filter_map(|row| match row.get(field) {
                Some(Value::Object(item)) if item.contains_key("name") => Some(ProportionSlice {
                    name: cell_label(item.get("name")),
                    value: coerce_numeric(item.get("value")).value(),
                }),
                _ => None,
            })
            .collect(),
    )
}

fn is_named_value(cell: &Value) -> bool {
    matches!(cell, Value::Object(item) if item.contains_key("name") && item.contains_key("value"))
}
