use serde::{Deserialize, Serialize};

use crate::core::{Category, ChartKind, Color, LegendPosition, NumberFormat, PlanDiagnostic};
use crate::error::{ChartError, ChartResult};
use crate::render::series::SeriesDescriptor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleFragment {
    pub text: String,
    pub top: f64,
    pub font_size: f64,
    pub centered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationPolicy {
    pub enabled: bool,
    pub duration_ms: u32,
    pub easing: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipTrigger {
    Axis,
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPointer {
    Line,
    Cross,
    Shadow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipFragment {
    pub trigger: TooltipTrigger,
    pub axis_pointer: Option<AxisPointer>,
    pub value_format: NumberFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orient {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendFragment {
    pub position: LegendPosition,
    pub orient: Orient,
    /// Distance from the anchoring edge; vertical legends are centered.
    pub edge_offset: f64,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub contain_label: bool,
}

impl GridInsets {
    fn validate(self) -> ChartResult<()> {
        for (edge, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "grid inset `{edge}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    Category,
    Value,
    Log,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFragment {
    pub kind: AxisKind,
    #[serde(default)]
    pub name: Option<String>,
    pub name_gap: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Tick formatting for value axes.
    #[serde(default)]
    pub label_format: Option<NumberFormat>,
    #[serde(default)]
    pub label_rotate: f64,
    pub split_line: bool,
    #[serde(default)]
    pub split_area: bool,
    /// Value range hugs the data instead of starting at zero.
    #[serde(default)]
    pub scale_to_data: bool,
}

impl AxisFragment {
    #[must_use]
    pub fn category(categories: Vec<String>) -> Self {
        Self {
            kind: AxisKind::Category,
            name: None,
            name_gap: 35.0,
            categories,
            min: None,
            max: None,
            label_format: None,
            label_rotate: 0.0,
            split_line: false,
            split_area: false,
            scale_to_data: false,
        }
    }

    #[must_use]
    pub fn value(kind: AxisKind, label_format: NumberFormat) -> Self {
        Self {
            kind,
            name: None,
            name_gap: 50.0,
            categories: Vec::new(),
            min: None,
            max: None,
            label_format: Some(label_format),
            label_rotate: 0.0,
            split_line: true,
            split_area: false,
            scale_to_data: false,
        }
    }
}

/// Category axis plus one or more value axes (or the reverse for row charts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartesianAxes {
    pub x: AxisFragment,
    pub y: Vec<AxisFragment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomControl {
    Slider,
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataZoomFragment {
    pub control: ZoomControl,
    pub orient: Orient,
    pub start: f64,
    pub end: f64,
    /// Distance from the bottom (horizontal) or left (vertical) edge.
    #[serde(default)]
    pub offset: Option<f64>,
    #[serde(default)]
    pub thickness: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualPiece {
    pub min: f64,
    pub max: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualMapFragment {
    Continuous {
        min: f64,
        max: f64,
        in_range: Vec<Color>,
        calculable: bool,
    },
    /// Horizontal bucket legend, centered.
    Piecewise {
        pieces: Vec<VisualPiece>,
        /// Hidden pieces still color the cells.
        show: bool,
        anchor: LegendPosition,
        /// Distance from the anchoring edge; `None` lets the engine place it.
        edge_offset: Option<f64>,
    },
}

impl VisualMapFragment {
    fn validate(&self) -> ChartResult<()> {
        let ranges: Vec<(f64, f64)> = match self {
            Self::Continuous { min, max, .. } => vec![(*min, *max)],
            Self::Piecewise { pieces, .. } => pieces.iter().map(|p| (p.min, p.max)).collect(),
        };
        if ranges
            .iter()
            .all(|(min, max)| min.is_finite() && max.is_finite() && min <= max)
        {
            Ok(())
        } else {
            Err(ChartError::InvalidData(
                "visual map ranges must be finite with min <= max".to_owned(),
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub name: String,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarCoordinate {
    pub indicators: Vec<RadarAxis>,
    pub polygon: bool,
    pub split_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCoordinate {
    /// Year shown, e.g. `2024`.
    pub range: Option<String>,
    pub top: f64,
    pub cell_height: f64,
}

/// Engine-agnostic description of one chart.
///
/// Fragments absent from a category are `None` (or empty), never present and
/// hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub chart_type: ChartKind,
    pub category: Category,
    pub title: TitleFragment,
    pub animation: AnimationPolicy,
    #[serde(default)]
    pub tooltip: Option<TooltipFragment>,
    #[serde(default)]
    pub legend: Option<LegendFragment>,
    #[serde(default)]
    pub grid: Option<GridInsets>,
    #[serde(default)]
    pub axes: Option<CartesianAxes>,
    #[serde(default)]
    pub data_zoom: Vec<DataZoomFragment>,
    #[serde(default)]
    pub visual_map: Option<VisualMapFragment>,
    #[serde(default)]
    pub radar: Option<RadarCoordinate>,
    #[serde(default)]
    pub calendar: Option<CalendarCoordinate>,
    pub series: Vec<SeriesDescriptor>,
    #[serde(default)]
    pub diagnostics: Vec<PlanDiagnostic>,
}

impl RenderPlan {
    /// Checks numeric sanity and cross-fragment references.
    pub fn validate(&self) -> ChartResult<()> {
        if let Some(grid) = self.grid {
            grid.validate()?;
        }
        if let Some(visual_map) = &self.visual_map {
            visual_map.validate()?;
        }
        let value_axes = self.axes.as_ref().map_or(0, |axes| axes.y.len());
        for series in &self.series {
            series.validate()?;
            if series.y_axis_index > 0 && series.y_axis_index >= value_axes {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` references missing y axis {}",
                    series.name, series.y_axis_index
                )));
            }
        }
        if let Some(radar) = &self.radar {
            if radar.indicators.iter().any(|axis| !axis.max.is_finite()) {
                return Err(ChartError::InvalidData(
                    "radar indicator max must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// `true` when no series holds any point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|series| series.data.is_empty())
    }
}
