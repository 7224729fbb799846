use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::chart_kind::ChartKind;
use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::coerce_numeric;
use crate::core::spec::{ChartSpec, KpiAggregation};
use crate::core::types::{Record, field_present};

#[derive(Debug, Clone, PartialEq)]
pub struct KpiData {
    pub label: String,
    pub value: f64,
    pub field: Option<String>,
    pub aggregation: KpiAggregation,
}

/// Reduces one numeric field to a single value.
///
/// Unparsable cells are skipped. `count` returns the row count regardless of
/// the field. Other aggregations yield 0 when the field is absent or holds no
/// numeric cells, or when a sum overflows.
#[must_use]
pub fn reshape_kpi(
    rows: &[Record],
    spec: &ChartSpec,
    kind: ChartKind,
    diagnostics: &mut Diagnostics,
) -> KpiData {
    let binding = spec.kpi.clone().unwrap_or_default();
    let aggregation = binding.aggregation;
    let field = binding
        .field
        .clone()
        .filter(|field| !field.is_empty())
        .or_else(|| spec.visible_series().next().map(|b| b.id.clone()));

    let mut values = Vec::new();
    match field.as_deref() {
        Some(field) if field_present(rows, field) => {
            let mut invalid = 0usize;
            for row in rows {
                let numeric = coerce_numeric(row.get(field));
                if numeric.is_invalid() {
                    invalid += 1;
                }
                values.extend(numeric.value());
            }
            diagnostics.non_numeric(field, invalid);
        }
        Some(field) if aggregation != KpiAggregation::Count => diagnostics.missing_binding(field),
        None if aggregation != KpiAggregation::Count => diagnostics.missing_binding("kpi.field"),
        _ => {}
    }

    let mut value = aggregate(aggregation, &values, rows.len());
    if !value.is_finite() {
        diagnostics.non_finite(field.as_deref().unwrap_or("kpi.field"));
        value = 0.0;
    }
    let label = binding
        .label
        .clone()
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| default_label(kind, aggregation, field.as_deref()));

    trace!(
        aggregation = aggregation.upper_name(),
        samples = values.len(),
        value,
        "reshape kpi"
    );
    KpiData {
        label,
        value,
        field,
        aggregation,
    }
}

fn aggregate(aggregation: KpiAggregation, values: &[f64], row_count: usize) -> f64 {
    if aggregation == KpiAggregation::Count {
        return row_count as f64;
    }
    if values.is_empty() {
        return 0.0;
    }
    match aggregation {
        KpiAggregation::Sum => values.iter().sum(),
        KpiAggregation::Avg => values.iter().sum::<f64>() / values.len() as f64,
        KpiAggregation::Min => values
            .iter()
            .copied()
            .map(OrderedFloat)
            .min()
            .map_or(0.0, |v| v.0),
        KpiAggregation::Max => values
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |v| v.0),
        KpiAggregation::Count => row_count as f64,
    }
}

fn default_label(kind: ChartKind, aggregation: KpiAggregation, field: Option<&str>) -> String {
    match kind {
        ChartKind::Number => aggregation.upper_name().to_owned(),
        _ => field.unwrap_or("Value").to_owned(),
    }
}
