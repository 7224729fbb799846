use tracing::trace;

use crate::core::chart_kind::ChartKind;
use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::{cell_label, coerce_numeric, is_json_number};
use crate::core::spec::{ChartSpec, SeriesBinding};
use crate::core::types::{Record, column_names, field_present};

const DEFAULT_REGION: &str = "indonesia";

/// Dataset spellings mapped to the boundary names of the map assets.
const NAME_CORRECTIONS: [(&str, &str); 4] = [
    ("Papua Barat", "Irian Jaya Barat"),
    ("DKI Jakarta", "Jakarta Raya"),
    ("Daerah Istimewa Yogyakarta", "Yogyakarta"),
    ("United States", "United States of America"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub name: String,
    pub value: Option<f64>,
}

/// Per-region values of one extra binding, drawn as pie overlays.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoOverlay {
    pub ordinal: usize,
    pub name: String,
    pub color_override: Option<String>,
    pub points: Vec<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoData {
    pub region: String,
    pub points: Vec<GeoPoint>,
    pub overlays: Vec<GeoOverlay>,
}

/// Trims a region name and applies the fixed correction table.
#[must_use]
pub fn correct_region_name(raw: &str) -> String {
    let trimmed = raw.trim();
    NAME_CORRECTIONS
        .iter()
        .find(|(from, _)| *from == trimmed)
        .map_or_else(|| trimmed.to_owned(), |(_, to)| (*to).to_owned())
}

/// Maps rows to named region values.
///
/// Rows without a region name are dropped. Values strip thousands separators;
/// anything unparsable becomes `null`. With boundary names supplied, a
/// corrected name outside that set keeps its row but loses its value.
#[must_use]
pub fn reshape_geographic(
    rows: &[Record],
    spec: &ChartSpec,
    kind: ChartKind,
    diagnostics: &mut Diagnostics,
) -> GeoData {
    let binding = spec.map.clone().unwrap_or_default();
    let region = binding
        .region
        .clone()
        .filter(|region| !region.is_empty())
        .unwrap_or_else(|| DEFAULT_REGION.to_owned());

    let key_field = binding
        .key_field
        .clone()
        .or_else(|| spec.x_axis_field.clone())
        .filter(|field| !field.is_empty());
    let Some(key_field) = key_field else {
        diagnostics.missing_binding("map.keyField");
        return GeoData {
            region,
            ..GeoData::default()
        };
    };

    let visible: Vec<&SeriesBinding> = spec.visible_series().collect();
    let value_field = binding
        .value_field
        .clone()
        .filter(|field| !field.is_empty())
        .or_else(|| visible.first().map(|b| b.id.clone()))
        .or_else(|| first_numeric_column(rows, &key_field));
    if value_field
        .as_deref()
        .is_none_or(|field| !rows.is_empty() && !field_present(rows, field))
    {
        diagnostics.missing_binding(value_field.as_deref().unwrap_or("map.valueField"));
    }

    let boundary = binding.boundary_names.as_deref();
    let mut invalid = 0usize;
    let mut points = Vec::new();
    let mut kept_rows = Vec::new();
    for row in rows {
        let raw_name = cell_label(row.get(&key_field));
        if raw_name.trim().is_empty() {
            continue;
        }
        let name = correct_region_name(&raw_name);
        let numeric = coerce_numeric(value_field.as_ref().and_then(|field| row.get(field)));
        if numeric.is_invalid() {
            invalid += 1;
        }
        let resolved = boundary.is_none_or(|names| names.iter().any(|known| *known == name));
        if !resolved {
            diagnostics.unresolved_name(name.as_str());
        }
        points.push(GeoPoint {
            name,
            value: numeric.value().filter(|_| resolved),
        });
        kept_rows.push(row);
    }
    if let Some(field) = value_field.as_deref() {
        diagnostics.non_numeric(field, invalid);
    }

    let overlays = if kind == ChartKind::GeomapPie {
        visible
            .iter()
            .enumerate()
            .map(|(ordinal, binding)| GeoOverlay {
                ordinal,
                name: binding.display_name().to_owned(),
                color_override: binding.color.clone(),
                points: points
                    .iter()
                    .zip(&kept_rows)
                    .map(|(point, row)| GeoPoint {
                        name: point.name.clone(),
                        value: coerce_numeric(row.get(&binding.id)).value(),
                    })
                    .collect(),
            })
            .collect()
    } else {
        Vec::new()
    };

    trace!(
        region = %region,
        points = points.len(),
        overlays = overlays.len(),
        "reshape geographic"
    );
    GeoData {
        region,
        points,
        overlays,
    }
}

fn first_numeric_column(rows: &[Record], key_field: &str) -> Option<String> {
    let first = rows.first()?;
    column_names(rows)
        .into_iter()
        .filter(|name| *name != key_field)
        .find(|name| is_json_number(first.get(*name)))
        .map(str::to_owned)
}
