//! Per-category reshape algorithms.
//!
//! Each reshaper is a pure function of `(rows, spec, kind)` that returns the
//! category's intermediate shape. Reshapers never fail: bad bindings degrade
//! to empty or zeroed shapes and are reported through [`Diagnostics`].

mod axis;
mod calendar;
mod financial;
mod geographic;
mod hierarchy;
mod kpi;
mod matrix;
mod network;
mod proportion;
mod radar;

pub use axis::{AxisData, AxisSeries, reshape_axis};
pub use calendar::{CalendarData, CalendarEntry, reshape_calendar};
pub use financial::{OhlcGroup, FinancialData, reshape_financial};
pub use geographic::{
    GeoData, GeoOverlay, GeoPoint, correct_region_name, reshape_geographic,
};
pub use hierarchy::{HierarchyData, HierarchyNode, reshape_hierarchy};
pub use kpi::{KpiData, reshape_kpi};
pub use matrix::{MatrixCell, MatrixData, reshape_matrix};
pub use network::{NetworkData, NetworkLink, NetworkNode, NodeRole, reshape_network};
pub use proportion::{ProportionData, ProportionSlice, reshape_proportion};
pub use radar::{RadarData, RadarEntry, RadarIndicator, reshape_radar};

use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::{Numeric, coerce_numeric};
use crate::core::types::{Record, field_present};

/// Numeric column with gaps for missing or non-numeric cells.
///
/// Reports `MissingBinding` when no row carries `field` and
/// `NonNumericValue` for cells that could not be coerced.
pub(crate) fn numeric_column(
    rows: &[Record],
    field: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<Option<f64>> {
    if !rows.is_empty() && !field_present(rows, field) {
        diagnostics.missing_binding(field);
    }

    let mut invalid = 0usize;
    let values = rows
        .iter()
        .map(|row| {
            let numeric = coerce_numeric(row.get(field));
            if numeric.is_invalid() {
                invalid += 1;
            }
            numeric.value()
        })
        .collect();
    diagnostics.non_numeric(field, invalid);
    values
}

/// Coerces one cell, with absent and invalid both becoming zero.
pub(crate) fn numeric_or_zero(numeric: Numeric) -> f64 {
    numeric.value().unwrap_or(0.0)
}
