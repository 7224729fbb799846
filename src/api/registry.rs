use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{Category, ChartKind};
use crate::error::{ChartError, ChartResult};

/// Catalog entry for one chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartTypeMeta {
    pub kind: ChartKind,
    pub id: &'static str,
    /// Display name for chart pickers.
    pub label: &'static str,
    /// Picker grouping, coarser than [`Category`] for some types.
    pub group: &'static str,
}

const fn entry(kind: ChartKind, label: &'static str, group: &'static str) -> ChartTypeMeta {
    ChartTypeMeta {
        kind,
        id: kind.id(),
        label,
        group,
    }
}

/// Registration order; listings preserve it.
static CHART_TYPES: [ChartTypeMeta; 28] = [
    entry(ChartKind::Bar, "Bar", "Basic"),
    entry(ChartKind::Line, "Line", "Basic"),
    entry(ChartKind::Area, "Area", "Basic"),
    entry(ChartKind::Row, "Row", "Basic"),
    entry(ChartKind::Combo, "Combo", "Basic"),
    entry(ChartKind::Pie, "Pie", "Proportion"),
    entry(ChartKind::Donut, "Donut", "Proportion"),
    entry(ChartKind::HalfDonut, "Half Donut", "Proportion"),
    entry(ChartKind::Nightingale, "Nightingale", "Proportion"),
    entry(ChartKind::Funnel, "Funnel", "Proportion"),
    entry(ChartKind::Scatter, "Scatter", "Comparison"),
    entry(ChartKind::Radar, "Radar", "Comparison"),
    entry(ChartKind::Matrix, "Matrix", "Comparison"),
    entry(ChartKind::Candlestick, "Candlestick", "Financial"),
    entry(ChartKind::Calendar, "Calendar", "Time"),
    entry(ChartKind::Graph, "Graph", "Network"),
    entry(ChartKind::CircularGraph, "Circular Graph", "Network"),
    entry(ChartKind::Sankey, "Sankey", "Flow"),
    entry(ChartKind::Chord, "Chord", "Flow"),
    entry(ChartKind::Tree, "Tree", "Hierarchy"),
    entry(ChartKind::RadialTree, "Radial Tree", "Hierarchy"),
    entry(ChartKind::Treemap, "Treemap", "Hierarchy"),
    entry(ChartKind::Sunburst, "Sunburst", "Hierarchy"),
    entry(ChartKind::Gauge, "Gauge", "KPI"),
    entry(ChartKind::GaugeSpeed, "Speedometer", "KPI"),
    entry(ChartKind::Number, "Number", "KPI"),
    entry(ChartKind::Geomap, "GeoMap", "Geographic"),
    entry(ChartKind::GeomapPie, "GeoMap Pie", "Geographic"),
];

/// Every registered chart type in registration order.
#[must_use]
pub fn chart_types() -> &'static [ChartTypeMeta] {
    &CHART_TYPES
}

pub fn meta(chart_type: &str) -> ChartResult<&'static ChartTypeMeta> {
    CHART_TYPES
        .iter()
        .find(|meta| meta.id == chart_type)
        .ok_or_else(|| ChartError::unknown_chart_type(chart_type))
}

/// Resolves a wire `chartType` id; the pipeline's only chart-type lookup.
pub fn kind_of(chart_type: &str) -> ChartResult<ChartKind> {
    meta(chart_type).map(|meta| meta.kind)
}

pub fn category_of(chart_type: &str) -> ChartResult<Category> {
    kind_of(chart_type).map(ChartKind::category)
}

/// Chart types keyed by rendering category, first-registered category first.
#[must_use]
pub fn list_by_category() -> IndexMap<Category, Vec<&'static ChartTypeMeta>> {
    let mut out: IndexMap<Category, Vec<&'static ChartTypeMeta>> = IndexMap::new();
    for meta in &CHART_TYPES {
        out.entry(meta.kind.category()).or_default().push(meta);
    }
    out
}

/// Chart types keyed by picker group.
#[must_use]
pub fn list_by_group() -> IndexMap<&'static str, Vec<&'static ChartTypeMeta>> {
    let mut out: IndexMap<&'static str, Vec<&'static ChartTypeMeta>> = IndexMap::new();
    for meta in &CHART_TYPES {
        out.entry(meta.group).or_default().push(meta);
    }
    out
}
