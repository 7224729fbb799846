//! Assembles shared chrome and category fragments into a `RenderPlan`.
//!
//! Shared chrome (title, animation, tooltip skeleton, default grid) is built
//! once by [`PlanChrome::new`]; each category's `compose_*` function then
//! constructs only the fragments that category shows. Nothing is built and
//! deleted afterwards.

mod cartesian;
mod categories;
mod visual_map;

pub use categories::{
    compose_axis, compose_calendar, compose_financial, compose_geographic, compose_hierarchy,
    compose_kpi, compose_matrix, compose_network, compose_proportion, compose_radar,
};

use crate::api::plan_context::PlanContext;
use crate::core::{Diagnostics, LegendPosition};
use crate::render::{
    AnimationPolicy, GridInsets, LegendFragment, Orient, RenderPlan, SeriesDescriptor,
    TitleFragment, TooltipFragment, TooltipTrigger,
};

pub(crate) const DEFAULT_GRID: GridInsets = GridInsets {
    top: 60.0,
    right: 40.0,
    bottom: 60.0,
    left: 60.0,
    contain_label: true,
};

const ANIMATION_DURATION_MS: u32 = 500;
const ANIMATION_EASING: &str = "cubicOut";

const LEGEND_TOP_WITH_TITLE: f64 = 40.0;
const LEGEND_EDGE: f64 = 10.0;

const LEGEND_BOTTOM_MIN_GRID: f64 = 85.0;
const LEGEND_TOP_TITLED_MIN_GRID: f64 = 90.0;
const LEGEND_SIDE_MIN_GRID: f64 = 150.0;

/// Chrome common to every chart type.
#[derive(Debug, Clone)]
pub(crate) struct PlanChrome {
    pub title: TitleFragment,
    pub animation: AnimationPolicy,
    pub tooltip: TooltipFragment,
}

impl PlanChrome {
    pub(crate) fn new(ctx: &PlanContext<'_>) -> Self {
        Self {
            title: TitleFragment {
                text: ctx.spec.title.clone(),
                top: 5.0,
                font_size: 16.0,
                centered: true,
            },
            animation: AnimationPolicy {
                enabled: ctx.spec.enable_animations,
                duration_ms: ANIMATION_DURATION_MS,
                easing: ANIMATION_EASING.to_owned(),
            },
            tooltip: TooltipFragment {
                trigger: TooltipTrigger::Axis,
                axis_pointer: None,
                value_format: ctx.spec.number_format,
            },
        }
    }

    pub(crate) fn item_tooltip(&self) -> TooltipFragment {
        TooltipFragment {
            trigger: TooltipTrigger::Item,
            ..self.tooltip
        }
    }

    /// Plan with only the shared chrome; callers add their fragments.
    pub(crate) fn into_plan(
        self,
        ctx: &PlanContext<'_>,
        series: Vec<SeriesDescriptor>,
        diagnostics: Diagnostics,
    ) -> RenderPlan {
        RenderPlan {
            chart_type: ctx.kind,
            category: ctx.kind.category(),
            title: self.title,
            animation: self.animation,
            tooltip: None,
            legend: None,
            grid: None,
            axes: None,
            data_zoom: Vec::new(),
            visual_map: None,
            radar: None,
            calendar: None,
            series,
            diagnostics: diagnostics.into_vec(),
        }
    }
}

/// Legend at the configured position, or `None` when hidden.
pub(crate) fn legend(ctx: &PlanContext<'_>, entries: Vec<String>) -> Option<LegendFragment> {
    let position = ctx.spec.legend_position;
    let (orient, edge_offset) = match position {
        LegendPosition::None => return None,
        LegendPosition::Top if ctx.has_title() => (Orient::Horizontal, LEGEND_TOP_WITH_TITLE),
        LegendPosition::Top | LegendPosition::Bottom => (Orient::Horizontal, LEGEND_EDGE),
        LegendPosition::Left | LegendPosition::Right => (Orient::Vertical, LEGEND_EDGE),
    };
    Some(LegendFragment {
        position,
        orient,
        edge_offset,
        entries,
    })
}

/// Widens the grid so the legend does not overlap the plot area.
///
/// Applied last, after zoom controls adjusted the grid.
pub(crate) fn apply_legend_insets(plan: &mut RenderPlan, has_title: bool) {
    let (Some(grid), Some(legend)) = (plan.grid.as_mut(), plan.legend.as_ref()) else {
        return;
    };
    match legend.position {
        LegendPosition::Bottom => grid.bottom = grid.bottom.max(LEGEND_BOTTOM_MIN_GRID),
        LegendPosition::Top if has_title => grid.top = grid.top.max(LEGEND_TOP_TITLED_MIN_GRID),
        LegendPosition::Left => grid.left = grid.left.max(LEGEND_SIDE_MIN_GRID),
        LegendPosition::Right => grid.right = grid.right.max(LEGEND_SIDE_MIN_GRID),
        LegendPosition::Top | LegendPosition::None => {}
    }
}

/// Distinct names in first-seen order.
pub(crate) fn unique_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if !out.iter().any(|existing| existing == name) {
            out.push(name.to_owned());
        }
    }
    out
}
