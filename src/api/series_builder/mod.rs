//! Series builders: reshaped data plus encoding choices into descriptors.
//!
//! One builder per category. Decoration rules shared across categories
//! (label content, stacking, palette-or-override color) live here.

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

pub use axis::build_axis_series;
pub use calendar::build_calendar_series;
pub use financial::build_financial_series;
pub use geographic::build_geographic_series;
pub use hierarchy::build_hierarchy_series;
pub use kpi::build_kpi_series;
pub use matrix::build_matrix_series;
pub use network::{build_network_series, graph_category_names, node_symbol_size};
pub use proportion::build_proportion_series;
pub use radar::build_radar_series;

use crate::core::{ChartSpec, LabelPlacement, StackingMode};
use crate::render::{LabelContent, LabelPolicy, LabelPosition};

pub(crate) const STACK_ID: &str = "total";

/// Label for value-bearing marks: name, value, or both joined.
pub(super) fn point_label(spec: &ChartSpec, position: LabelPosition) -> LabelPolicy {
    let content = match (spec.show_labels, spec.show_values) {
        (true, true) => LabelContent::NameAndValue,
        (true, false) => LabelContent::Name,
        (false, _) => LabelContent::Value,
    };
    LabelPolicy::when(
        spec.show_labels || spec.show_values,
        content,
        position,
        spec.number_format,
    )
}

pub(super) fn stack_id(spec: &ChartSpec) -> Option<String> {
    match spec.stacking {
        StackingMode::None => None,
        StackingMode::Normal | StackingMode::Percent => Some(STACK_ID.to_owned()),
    }
}

pub(super) fn placement(placement: LabelPlacement) -> LabelPosition {
    match placement {
        LabelPlacement::Outside => LabelPosition::Outside,
        LabelPlacement::Inside => LabelPosition::Inside,
    }
}
