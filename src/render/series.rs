use serde::{Deserialize, Serialize};

use crate::core::{Color, NumberFormat, TreeOrient};
use crate::error::{ChartError, ChartResult};

/// Visual grammar the engine draws a descriptor with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualType {
    Bar,
    Line,
    Scatter,
    Pie,
    Funnel,
    Radar,
    Candlestick,
    Heatmap,
    Graph,
    Sankey,
    Chord,
    Tree,
    Treemap,
    Sunburst,
    Gauge,
    KpiText,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelContent {
    Name,
    Value,
    /// `name: value`.
    NameAndValue,
    /// Share of the whole, e.g. `25%`.
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPosition {
    Top,
    Right,
    Left,
    Bottom,
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelPolicy {
    pub visible: bool,
    pub content: LabelContent,
    pub position: LabelPosition,
    pub value_format: NumberFormat,
}

impl LabelPolicy {
    #[must_use]
    pub fn shown(
        content: LabelContent,
        position: LabelPosition,
        value_format: NumberFormat,
    ) -> Self {
        Self {
            visible: true,
            content,
            position,
            value_format,
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            content: LabelContent::Value,
            position: LabelPosition::Top,
            value_format: NumberFormat::Default,
        }
    }

    /// Label shown only when `visible` is true, keeping content and position.
    #[must_use]
    pub fn when(
        visible: bool,
        content: LabelContent,
        position: LabelPosition,
        value_format: NumberFormat,
    ) -> Self {
        Self {
            visible,
            content,
            position,
            value_format,
        }
    }
}

/// Hover behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmphasisPolicy {
    #[default]
    None,
    Shadow,
    FocusSeries,
    FocusAdjacency,
    FocusDescendant,
    FocusAncestor,
    Scale,
}

/// Fixed horizontal marker line on the value axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalLine {
    pub value: f64,
    pub label: String,
    pub color: Color,
    pub dashed: bool,
    pub silent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaFill {
    pub from: Color,
    pub to: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GraphLayout {
    Force {
        repulsion: f64,
        gravity: f64,
        edge_length: [f64; 2],
    },
    Circular {
        curveness: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphCategory {
    pub name: String,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapCoordinate {
    Cartesian,
    Calendar,
}

/// Visual-type specific geometry and styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesLayout {
    Cartesian {
        smooth: bool,
        horizontal: bool,
        bar_max_width: Option<f64>,
        symbol_size: Option<f64>,
        area_fill: Option<AreaFill>,
        opacity: Option<f64>,
    },
    Pie {
        inner_radius_pct: f64,
        outer_radius_pct: f64,
        center_y_pct: f64,
        start_angle: Option<f64>,
        end_angle: Option<f64>,
        rose: bool,
    },
    Funnel {
        descending: bool,
    },
    Radar,
    Candlestick {
        down_color: Color,
    },
    Heatmap {
        coordinate: HeatmapCoordinate,
    },
    Graph {
        layout: GraphLayout,
        categories: Vec<GraphCategory>,
        roam: bool,
    },
    Sankey {
        vertical: bool,
    },
    Chord,
    Tree {
        orient: TreeOrient,
        radial: bool,
        initial_depth: u32,
    },
    Treemap {
        breadcrumb: bool,
    },
    Sunburst,
    Gauge {
        min: f64,
        max: f64,
        start_angle: f64,
        end_angle: f64,
        split_number: u32,
        speedometer: bool,
    },
    KpiText {
        text: String,
        caption: String,
    },
    Map {
        region: String,
        area_color: Color,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedVector {
    pub name: String,
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixPoint {
    pub x: usize,
    pub y: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
    pub value: f64,
    pub symbol_size: f64,
    pub category: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

/// Pre-shaped points of one descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "points", rename_all = "snake_case")]
pub enum SeriesData {
    /// One value per category; `None` is a gap.
    Values(Vec<Option<f64>>),
    /// `[x, y]` per row.
    Pairs(Vec<[Option<f64>; 2]>),
    Named(Vec<NamedValue>),
    /// `[open, close, low, high]` per category; `None` is a gap.
    Ohlc(Vec<Option<[f64; 4]>>),
    Vectors(Vec<NamedVector>),
    Cells(Vec<MatrixPoint>),
    Dated(Vec<DatedValue>),
    Graph {
        nodes: Vec<GraphNode>,
        links: Vec<GraphLink>,
    },
    Tree(Vec<TreeNode>),
}

impl SeriesData {
    /// Number of top-level points (nodes for graphs).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(points) => points.len(),
            Self::Pairs(points) => points.len(),
            Self::Named(points) => points.len(),
            Self::Ohlc(points) => points.len(),
            Self::Vectors(points) => points.len(),
            Self::Cells(points) => points.len(),
            Self::Dated(points) => points.len(),
            Self::Graph { nodes, .. } => nodes.len(),
            Self::Tree(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self) -> ChartResult<()> {
        let finite = |value: f64| value.is_finite();
        let ok = match self {
            Self::Values(points) => points.iter().flatten().copied().all(finite),
            Self::Pairs(points) => points.iter().flatten().flatten().copied().all(finite),
            Self::Named(points) => points.iter().filter_map(|p| p.value).all(finite),
            Self::Ohlc(points) => points.iter().flatten().flatten().copied().all(finite),
            Self::Vectors(points) => points.iter().flat_map(|p| &p.values).copied().all(finite),
            Self::Cells(points) => points.iter().map(|p| p.value).all(finite),
            Self::Dated(points) => points.iter().map(|p| p.value).all(finite),
            Self::Graph { nodes, links } => {
                nodes.iter().all(|n| finite(n.value) && finite(n.symbol_size))
                    && links.iter().all(|l| finite(l.value))
            }
            Self::Tree(points) => points.iter().all(tree_is_finite),
        };
        if ok {
            Ok(())
        } else {
            Err(ChartError::InvalidData(
                "series data values must be finite".to_owned(),
            ))
        }
    }
}

fn tree_is_finite(node: &TreeNode) -> bool {
    node.value.is_none_or(f64::is_finite) && node.children.iter().all(tree_is_finite)
}

/// One engine-ready series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub visual: VisualType,
    pub name: String,
    pub data: SeriesData,
    #[serde(default)]
    pub color: Option<Color>,
    pub label: LabelPolicy,
    #[serde(default)]
    pub emphasis: EmphasisPolicy,
    pub layout: SeriesLayout,
    /// Max/min point markers.
    #[serde(default)]
    pub extreme_markers: bool,
    #[serde(default)]
    pub goal_line: Option<GoalLine>,
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default)]
    pub y_axis_index: usize,
    /// Non-interactive overlay.
    #[serde(default)]
    pub silent: bool,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(
        visual: VisualType,
        name: impl Into<String>,
        data: SeriesData,
        layout: SeriesLayout,
    ) -> Self {
        Self {
            visual,
            name: name.into(),
            data,
            color: None,
            label: LabelPolicy::hidden(),
            emphasis: EmphasisPolicy::None,
            layout,
            extreme_markers: false,
            goal_line: None,
            stack: None,
            y_axis_index: 0,
            silent: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelPolicy) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn with_emphasis(mut self, emphasis: EmphasisPolicy) -> Self {
        self.emphasis = emphasis;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.data.validate()?;
        if let Some(goal) = &self.goal_line {
            if !goal.value.is_finite() {
                return Err(ChartError::InvalidData(
                    "goal line value must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
