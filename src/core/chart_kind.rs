use serde::{Deserialize, Serialize};

/// Reshape family shared by several chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Axis,
    Proportion,
    Financial,
    Radar,
    Network,
    Hierarchy,
    Matrix,
    Geographic,
    Kpi,
    Calendar,
}

impl Category {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Axis => "axis",
            Self::Proportion => "proportion",
            Self::Financial => "financial",
            Self::Radar => "radar",
            Self::Network => "network",
            Self::Hierarchy => "hierarchy",
            Self::Matrix => "matrix",
            Self::Geographic => "geographic",
            Self::Kpi => "kpi",
            Self::Calendar => "calendar",
        }
    }
}

/// Every chart type the pipeline can plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "area")]
    Area,
    #[serde(rename = "row")]
    Row,
    #[serde(rename = "combo")]
    Combo,
    #[serde(rename = "scatter")]
    Scatter,
    #[serde(rename = "pie")]
    Pie,
    #[serde(rename = "donut")]
    Donut,
    #[serde(rename = "halfDonut")]
    HalfDonut,
    #[serde(rename = "nightingale")]
    Nightingale,
    #[serde(rename = "funnel")]
    Funnel,
    #[serde(rename = "radar")]
    Radar,
    #[serde(rename = "candlestick")]
    Candlestick,
    #[serde(rename = "matrix")]
    Matrix,
    #[serde(rename = "calendar")]
    Calendar,
    #[serde(rename = "graph")]
    Graph,
    #[serde(rename = "circularGraph")]
    CircularGraph,
    #[serde(rename = "sankey")]
    Sankey,
    #[serde(rename = "chord")]
    Chord,
    #[serde(rename = "tree")]
    Tree,
    #[serde(rename = "radialTree")]
    RadialTree,
    #[serde(rename = "treemap")]
    Treemap,
    #[serde(rename = "sunburst")]
    Sunburst,
    #[serde(rename = "gauge")]
    Gauge,
    #[serde(rename = "gaugeSpeed")]
    GaugeSpeed,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "geomap")]
    Geomap,
    #[serde(rename = "geomapPie")]
    GeomapPie,
}

impl ChartKind {
    /// All kinds in registration order.
    pub const ALL: [ChartKind; 28] = [
        Self::Bar,
        Self::Line,
        Self::Area,
        Self::Row,
        Self::Combo,
        Self::Pie,
        Self::Donut,
        Self::HalfDonut,
        Self::Nightingale,
        Self::Funnel,
        Self::Scatter,
        Self::Radar,
        Self::Matrix,
        Self::Candlestick,
        Self::Calendar,
        Self::Graph,
        Self::CircularGraph,
        Self::Sankey,
        Self::Chord,
        Self::Tree,
        Self::RadialTree,
        Self::Treemap,
        Self::Sunburst,
        Self::Gauge,
        Self::GaugeSpeed,
        Self::Number,
        Self::Geomap,
        Self::GeomapPie,
    ];

    /// Wire identifier, e.g. `halfDonut`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Area => "area",
            Self::Row => "row",
            Self::Combo => "combo",
            Self::Scatter => "scatter",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::HalfDonut => "halfDonut",
            Self::Nightingale => "nightingale",
            Self::Funnel => "funnel",
            Self::Radar => "radar",
            Self::Candlestick => "candlestick",
            Self::Matrix => "matrix",
            Self::Calendar => "calendar",
            Self::Graph => "graph",
            Self::CircularGraph => "circularGraph",
            Self::Sankey => "sankey",
            Self::Chord => "chord",
            Self::Tree => "tree",
            Self::RadialTree => "radialTree",
            Self::Treemap => "treemap",
            Self::Sunburst => "sunburst",
            Self::Gauge => "gauge",
            Self::GaugeSpeed => "gaugeSpeed",
            Self::Number => "number",
            Self::Geomap => "geomap",
            Self::GeomapPie => "geomapPie",
        }
    }

    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::Bar | Self::Line | Self::Area | Self::Row | Self::Combo | Self::Scatter => {
                Category::Axis
            }
            Self::Pie | Self::Donut | Self::HalfDonut | Self::Nightingale | Self::Funnel => {
                Category::Proportion
            }
            Self::Radar => Category::Radar,
            Self::Candlestick => Category::Financial,
            Self::Matrix => Category::Matrix,
            Self::Calendar => Category::Calendar,
            Self::Graph | Self::CircularGraph | Self::Sankey | Self::Chord => Category::Network,
            Self::Tree | Self::RadialTree | Self::Treemap | Self::Sunburst => Category::Hierarchy,
            Self::Gauge | Self::GaugeSpeed | Self::Number => Category::Kpi,
            Self::Geomap | Self::GeomapPie => Category::Geographic,
        }
    }

    /// Chart types that get a pan/zoom control.
    #[must_use]
    pub fn supports_data_zoom(self) -> bool {
        matches!(
            self,
            Self::Bar
                | Self::Line
                | Self::Area
                | Self::Row
                | Self::Combo
                | Self::Scatter
                | Self::Candlestick
        )
    }

    /// Chart types that can carry a goal line.
    #[must_use]
    pub fn supports_goal_line(self) -> bool {
        matches!(self, Self::Bar | Self::Line | Self::Area | Self::Combo)
    }
}
