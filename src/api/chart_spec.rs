use serde_json::Value;

use crate::api::registry::kind_of;
use crate::core::{
    AxisScale, CalendarBinding, CandlestickBinding, ChartKind, ChartSpec, GaugeOptions,
    KpiBinding, LegendPosition, MapBinding, MatrixBinding, NumberFormat, SankeyOrient,
    SeriesBinding, StackingMode, TreeOrient,
};
use crate::error::{ChartError, ChartResult};

use super::validation::{validate_chart_spec, validate_gauge_options, validate_y_axis_range};

impl ChartSpec {
    /// Checks the chart spec is structurally usable and resolves its chart kind.
    pub fn validate(&self) -> ChartResult<ChartKind> {
        validate_chart_spec(self)
    }

    /// Chart kind named by `chart_type`.
    pub fn kind(&self) -> ChartResult<ChartKind> {
        kind_of(&self.chart_type)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart spec: {e}")))
    }

    /// Deserializes and validates a spec.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let spec: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidSpec(format!("failed to parse chart spec: {e}")))?;
        spec.validate()?;
        Ok(spec)
    }
}

/// Typed construction of a [`ChartSpec`]; [`build`](Self::build) validates.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpecBuilder {
    spec: ChartSpec,
}

impl ChartSpecBuilder {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            spec: ChartSpec::new(kind.id()),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.spec.title = title.into();
        self
    }

    #[must_use]
    pub fn with_x_axis_field(mut self, field: impl Into<String>) -> Self {
        self.spec.x_axis_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_series(mut self, binding: SeriesBinding) -> Self {
        self.spec.series.push(binding);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show_labels: bool, show_values: bool) -> Self {
        self.spec.show_labels = show_labels;
        self.spec.show_values = show_values;
        self
    }

    #[must_use]
    pub fn with_min_max_markers(mut self, enabled: bool) -> Self {
        self.spec.show_min_max = enabled;
        self
    }

    #[must_use]
    pub fn with_grid_lines(mut self, enabled: bool) -> Self {
        self.spec.show_grid_lines = enabled;
        self
    }

    #[must_use]
    pub fn with_data_zoom(mut self, enabled: bool) -> Self {
        self.spec.show_data_zoom = enabled;
        self
    }

    #[must_use]
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.spec.enable_animations = enabled;
        self
    }

    #[must_use]
    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.spec.legend_position = position;
        self
    }

    #[must_use]
    pub fn with_stacking(mut self, stacking: StackingMode) -> Self {
        self.spec.stacking = stacking;
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x: Option<String>, y: Option<String>) -> Self {
        self.spec.x_axis_title = x;
        self.spec.y_axis_title = y;
        self
    }

    #[must_use]
    pub fn with_y_axis_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.spec.y_axis_min = min;
        self.spec.y_axis_max = max;
        self
    }

    #[must_use]
    pub fn with_y_axis_scale(mut self, scale: AxisScale) -> Self {
        self.spec.y_axis_scale = scale;
        self
    }

    #[must_use]
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.spec.number_format = format;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.spec.palette = palette.into();
        self
    }

    #[must_use]
    pub fn with_goal(mut self, value: f64, label: Option<String>) -> Self {
        self.spec.goal_value = Some(value);
        self.spec.goal_label = label;
        self
    }

    #[must_use]
    pub fn with_matrix(mut self, binding: MatrixBinding) -> Self {
        self.spec.matrix = Some(binding);
        self
    }

    #[must_use]
    pub fn with_candlestick(mut self, binding: CandlestickBinding) -> Self {
        self.spec.candlestick = Some(binding);
        self
    }

    #[must_use]
    pub fn with_map(mut self, binding: MapBinding) -> Self {
        self.spec.map = Some(binding);
        self
    }

    /// Gauge range is checked here so a bad dial fails at the call site.
    pub fn with_gauge(mut self, gauge: GaugeOptions) -> ChartResult<Self> {
        self.spec.gauge = validate_gauge_options(gauge)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_kpi(mut self, binding: KpiBinding) -> Self {
        self.spec.kpi = Some(binding);
        self
    }

    #[must_use]
    pub fn with_calendar(mut self, binding: CalendarBinding) -> Self {
        self.spec.calendar = Some(binding);
        self
    }

    #[must_use]
    pub fn with_hierarchy(mut self, root: Value) -> Self {
        self.spec.hierarchy = Some(root);
        self
    }

    #[must_use]
    pub fn with_tree_orient(mut self, orient: TreeOrient) -> Self {
        self.spec.tree_orient = orient;
        self
    }

    #[must_use]
    pub fn with_sankey_orient(mut self, orient: SankeyOrient) -> Self {
        self.spec.sankey_orient = orient;
        self
    }

    #[must_use]
    pub fn with_graph_categories(mut self, categories: Vec<String>) -> Self {
        self.spec.graph_categories = categories;
        self
    }

    pub fn build(self) -> ChartResult<ChartSpec> {
        validate_y_axis_range(self.spec.y_axis_min, self.spec.y_axis_max)?;
        self.spec.validate()?;
        Ok(self.spec)
    }
}
