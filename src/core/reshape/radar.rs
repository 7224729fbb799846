use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::{cell_label, coerce_numeric, is_json_number, round_to_decimals};
use crate::core::spec::{ChartSpec, SeriesBinding};
use crate::core::types::{Record, field_present};

use super::numeric_or_zero;

const DEFAULT_INDICATOR_MAX: f64 = 100.0;
const INDICATOR_HEADROOM: f64 = 1.1;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarIndicator {
    pub name: String,
    pub max: f64,
}

/// One polygon: a row's values in indicator order.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarEntry {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadarData {
    pub indicators: Vec<RadarIndicator>,
    pub entries: Vec<RadarEntry>,
}

/// One indicator per visible metric, one entry per row.
///
/// Indicator max is `ceil(observed_max * 1.1)` over cells that are JSON
/// numbers, or 100 when there are none. Entry values coerce non-numeric cells
/// to zero.
#[must_use]
pub fn reshape_radar(
    rows: &[Record],
    spec: &ChartSpec,
    diagnostics: &mut Diagnostics,
) -> RadarData {
    let metrics: Vec<&SeriesBinding> = spec.visible_series().collect();
    let name_field = spec.x_axis_field.as_deref().filter(|f| !f.is_empty());

    if metrics.is_empty() {
        if !rows.is_empty() {
            diagnostics.missing_binding("series");
        }
        return RadarData {
            indicators: vec![RadarIndicator {
                name: "No Metrics".to_owned(),
                max: DEFAULT_INDICATOR_MAX,
            }],
            entries: Vec::new(),
        };
    }

    let indicators = metrics
        .iter()
        .map(|metric| {
            if !rows.is_empty() && !field_present(rows, &metric.id) {
                diagnostics.missing_binding(metric.id.as_str());
            }
            RadarIndicator {
                name: metric.display_name().to_owned(),
                max: indicator_max(rows, &metric.id),
            }
        })
        .collect();

    let mut invalid = vec![0usize; metrics.len()];
    let entries = rows
        .iter()
        .map(|row| {
            let name = name_field
                .map(|field| cell_label(row.get(field)))
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Unknown".to_owned());
            let values = metrics
                .iter()
                .enumerate()
                .map(|(index, metric)| {
                    let numeric = coerce_numeric(row.get(&metric.id));
                    if numeric.is_invalid() {
                        invalid[index] += 1;
                    }
                    numeric_or_zero(numeric)
                })
                .collect();
            RadarEntry { name, values }
        })
        .collect();

    for (metric, count) in metrics.iter().zip(invalid) {
        diagnostics.non_numeric(metric.id.as_str(), count);
    }

    trace!(metrics = metrics.len(), entries = rows.len(), "reshape radar");
    RadarData {
        indicators,
        entries,
    }
}

fn indicator_max(rows: &[Record], field: &str) -> f64 {
    let observed = rows
        .iter()
        .map(|row| row.get(field))
        .filter(|cell| is_json_number(*cell))
        .filter_map(|cell| coerce_numeric(cell).value())
        .map(OrderedFloat)
        .max();

    match observed {
        Some(OrderedFloat(max)) => {
            // Binary noise (100 * 1.1 = 110.00000000000001) must not bump the ceiling.
            let scaled = round_to_decimals(max * INDICATOR_HEADROOM, 9).ceil();
            // Headroom past f64::MAX falls back to the observed max.
            let scaled = if scaled.is_finite() { scaled } else { max };
            if scaled > 0.0 { scaled } else { DEFAULT_INDICATOR_MAX }
        }
        None => DEFAULT_INDICATOR_MAX,
    }
}
