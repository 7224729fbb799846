use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::number_format::NumberFormat;

/// Declarative chart configuration as edited by the dashboard user.
///
/// The wire format is camelCase so configurations saved by the dashboard
/// deserialize directly. Every field except `chartType` has a default; see
/// `ChartSpec::validate` (in `api`) for the structural checks applied at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub chart_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_axis_field: Option<String>,
    #[serde(default)]
    pub series: Vec<SeriesBinding>,

    #[serde(default)]
    pub show_labels: bool,
    #[serde(default)]
    pub show_values: bool,
    #[serde(default)]
    pub show_min_max: bool,
    #[serde(default = "default_true")]
    pub show_grid_lines: bool,
    #[serde(default = "default_true")]
    pub show_data_zoom: bool,
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    #[serde(default)]
    pub legend_position: LegendPosition,
    #[serde(default)]
    pub stacking: StackingMode,

    #[serde(default)]
    pub x_axis_title: Option<String>,
    #[serde(default)]
    pub y_axis_title: Option<String>,
    #[serde(default)]
    pub y_axis_min: Option<f64>,
    #[serde(default)]
    pub y_axis_max: Option<f64>,
    #[serde(default)]
    pub y_axis_scale: AxisScale,

    #[serde(default)]
    pub number_format: NumberFormat,
    #[serde(default = "default_palette")]
    pub palette: String,

    #[serde(default)]
    pub goal_value: Option<f64>,
    #[serde(default)]
    pub goal_label: Option<String>,

    #[serde(default)]
    pub label_name_position: LabelPlacement,
    #[serde(default)]
    pub label_value_position: LabelPlacement,

    #[serde(default)]
    pub matrix: Option<MatrixBinding>,
    #[serde(default)]
    pub candlestick: Option<CandlestickBinding>,
    #[serde(default)]
    pub map: Option<MapBinding>,
    #[serde(default)]
    pub gauge: GaugeOptions,
    #[serde(default)]
    pub kpi: Option<KpiBinding>,
    #[serde(default)]
    pub calendar: Option<CalendarBinding>,
    /// Nested `{name, value?, children?}` payload for hierarchy charts.
    #[serde(default)]
    pub hierarchy: Option<Value>,
    #[serde(default)]
    pub tree_orient: TreeOrient,
    #[serde(default)]
    pub sankey_orient: SankeyOrient,
    /// Graph node categories; empty means a single `Node` category.
    #[serde(default)]
    pub graph_categories: Vec<String>,
}

impl ChartSpec {
    /// Minimal spec for `chart_type` with every option at its default.
    #[must_use]
    pub fn new(chart_type: impl Into<String>) -> Self {
        Self {
            chart_type: chart_type.into(),
            title: String::new(),
            x_axis_field: None,
            series: Vec::new(),
            show_labels: false,
            show_values: false,
            show_min_max: false,
            show_grid_lines: true,
            show_data_zoom: true,
            enable_animations: true,
            legend_position: LegendPosition::default(),
            stacking: StackingMode::default(),
            x_axis_title: None,
            y_axis_title: None,
            y_axis_min: None,
            y_axis_max: None,
            y_axis_scale: AxisScale::default(),
            number_format: NumberFormat::default(),
            palette: default_palette(),
            goal_value: None,
            goal_label: None,
            label_name_position: LabelPlacement::default(),
            label_value_position: LabelPlacement::default(),
            matrix: None,
            candlestick: None,
            map: None,
            gauge: GaugeOptions::default(),
            kpi: None,
            calendar: None,
            hierarchy: None,
            tree_orient: TreeOrient::default(),
            sankey_orient: SankeyOrient::default(),
            graph_categories: Vec::new(),
        }
    }

    /// Visible bindings in render order.
    pub fn visible_series(&self) -> impl Iterator<Item = &SeriesBinding> {
        self.series.iter().filter(|binding| binding.visible)
    }
}

/// One bound data column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesBinding {
    /// Row field holding the series values.
    pub id: String,
    /// Display label; empty falls back to `id`.
    #[serde(default)]
    pub name: String,
    /// Hex color override.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl SeriesBinding {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackingMode {
    #[default]
    None,
    Normal,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPlacement {
    #[default]
    Outside,
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TreeOrient {
    #[serde(rename = "LR")]
    LeftToRight,
    #[serde(rename = "RL")]
    RightToLeft,
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "BT")]
    BottomToTop,
}

impl TreeOrient {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::TopToBottom | Self::BottomToTop)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SankeyOrient {
    #[default]
    #[serde(rename = "horizontal")]
    Horizontal,
    #[serde(rename = "vertical")]
    Vertical,
    /// Horizontal with link direction reversed.
    #[serde(rename = "RL")]
    RightToLeft,
}

/// Field bindings for the 2-D categorical heat matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixBinding {
    #[serde(default)]
    pub x_field: Option<String>,
    #[serde(default)]
    pub y_field: Option<String>,
    #[serde(default)]
    pub value_field: Option<String>,
}

/// Explicit OHLC field bindings for the financial chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlestickBinding {
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default)]
    pub low: Option<String>,
    #[serde(default)]
    pub high: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBinding {
    #[serde(default)]
    pub key_field: Option<String>,
    #[serde(default)]
    pub value_field: Option<String>,
    /// Map asset name; defaults to `indonesia`.
    #[serde(default)]
    pub region: Option<String>,
    /// Known boundary names of the map asset, when the caller has them.
    #[serde(default)]
    pub boundary_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeOptions {
    #[serde(default = "default_gauge_min")]
    pub min: f64,
    #[serde(default = "default_gauge_max")]
    pub max: f64,
    #[serde(default = "default_gauge_start_angle")]
    pub start_angle: f64,
    #[serde(default = "default_gauge_end_angle")]
    pub end_angle: f64,
    #[serde(default = "default_gauge_split_number")]
    pub split_number: u32,
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            min: default_gauge_min(),
            max: default_gauge_max(),
            start_angle: default_gauge_start_angle(),
            end_angle: default_gauge_end_angle(),
            split_number: default_gauge_split_number(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum KpiAggregation {
    #[default]
    Sum,
    Avg,
    Min,
    Max,
    Count,
}

impl From<String> for KpiAggregation {
    fn from(name: String) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "avg" | "average" => Self::Avg,
            "min" => Self::Min,
            "max" => Self::Max,
            "count" => Self::Count,
            _ => Self::Sum,
        }
    }
}

impl KpiAggregation {
    #[must_use]
    pub fn upper_name(self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Count => "COUNT",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiBinding {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub aggregation: KpiAggregation,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarBinding {
    #[serde(default)]
    pub date_field: Option<String>,
    #[serde(default)]
    pub value_field: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

fn default_true() -> bool {
    true
}

fn default_palette() -> String {
    "default".to_owned()
}

fn default_gauge_min() -> f64 {
    0.0
}

fn default_gauge_max() -> f64 {
    100.0
}

fn default_gauge_start_angle() -> f64 {
    225.0
}

fn default_gauge_end_angle() -> f64 {
    -45.0
}

fn default_gauge_split_number() -> u32 {
    10
}
