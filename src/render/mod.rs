mod null_renderer;
mod plan;
mod series;

pub use null_renderer::NullRenderer;
pub use plan::{
    AnimationPolicy, AxisFragment, AxisKind, AxisPointer, CalendarCoordinate, CartesianAxes,
    DataZoomFragment, GridInsets, LegendFragment, Orient, RadarAxis, RadarCoordinate, RenderPlan,
    TitleFragment, TooltipFragment, TooltipTrigger, VisualMapFragment, VisualPiece, ZoomControl,
};
pub use series::{
    AreaFill, DatedValue, EmphasisPolicy, GoalLine, GraphCategory, GraphLayout, GraphLink,
    GraphNode, HeatmapCoordinate, LabelContent, LabelPolicy, LabelPosition, MatrixPoint,
    NamedValue, NamedVector, SeriesData, SeriesDescriptor, SeriesLayout, TreeNode, VisualType,
};

use crate::error::ChartResult;

/// Contract implemented by any visualization engine adapter.
///
/// Adapters receive a fully resolved, deterministic `RenderPlan` so engine
/// code stays isolated from reshape and composition logic.
pub trait PlanRenderer {
    fn render(&mut self, plan: &RenderPlan) -> ChartResult<()>;
}
