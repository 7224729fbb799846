use tracing::trace;

use crate::core::chart_kind::ChartKind;
use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::{cell_label, coerce_numeric};
use crate::core::spec::ChartSpec;
use crate::core::types::{Record, field_present};

use super::numeric_column;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSeries {
    /// Position among the visible bindings; drives palette selection.
    pub ordinal: usize,
    pub id: String,
    pub name: String,
    pub color_override: Option<String>,
    /// One entry per row; `None` is a gap.
    pub values: Vec<Option<f64>>,
    /// Plotted against the secondary value axis (combo second half).
    pub secondary: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisData {
    /// Category labels, one per row.
    pub categories: Vec<String>,
    /// Numeric x per row, used by scatter.
    pub x_values: Vec<Option<f64>>,
    pub series: Vec<AxisSeries>,
}

/// Pass-through keyed by the x field and each visible binding.
///
/// Series lengths always equal the row count; non-numeric cells become gaps.
/// Without an x field the categories fall back to 1-based row positions.
#[must_use]
pub fn reshape_axis(
    rows: &[Record],
    spec: &ChartSpec,
    kind: ChartKind,
    diagnostics: &mut Diagnostics,
) -> AxisData {
    let x_field = spec
        .x_axis_field
        .as_deref()
        .filter(|field| !field.is_empty());

    let (categories, x_values) = match x_field {
        Some(field) => {
            if !rows.is_empty() && !field_present(rows, field) {
                diagnostics.missing_binding(field);
            }
            rows.iter()
                .map(|row| {
                    let cell = row.get(field);
                    (cell_label(cell), coerce_numeric(cell).value())
                })
                .unzip()
        }
        None => {
            if !rows.is_empty() {
                diagnostics.missing_binding("xAxisField");
            }
            (1..=rows.len())
                .map(|position| (position.to_string(), Some(position as f64)))
                .unzip()
        }
    };

    let visible: Vec<_> = spec.visible_series().collect();
    if visible.is_empty() && !rows.is_empty() {
        diagnostics.missing_binding("series");
    }

    let secondary_from = if kind == ChartKind::Combo && visible.len() >= 2 {
        Some(visible.len().div_ceil(2))
    } else {
        None
    };

    let series = visible
        .into_iter()
        .enumerate()
        .map(|(ordinal, binding)| AxisSeries {
            ordinal,
            id: binding.id.clone(),
            name: binding.display_name().to_owned(),
            color_override: binding.color.clone(),
            values: numeric_column(rows, &binding.id, diagnostics),
            secondary: secondary_from.is_some_and(|split| ordinal >= split),
        })
        .collect::<Vec<_>>();

    trace!(
        rows = rows.len(),
        series = series.len(),
        chart_type = kind.id(),
        "reshape axis data"
    );

    AxisData {
        categories,
        x_values,
        series,
    }
}
