use crate::api::plan_context::PlanContext;
use crate::core::primitives::format_plain_number;
use crate::core::{AxisScale, ChartKind, Color, LegendPosition};
use crate::render::{
    AxisFragment, AxisKind, CartesianAxes, DataZoomFragment, GoalLine, GridInsets, Orient,
    SeriesDescriptor, ZoomControl,
};

const GOAL_COLOR: Color = Color::rgb(0xEF, 0x8C, 0x8C);

const SLIDER_THICKNESS: f64 = 20.0;
const SLIDER_OFFSET: f64 = 10.0;
const SLIDER_OFFSET_ABOVE_LEGEND: f64 = 45.0;
const ZOOM_GRID_BOTTOM: f64 = 80.0;
const ZOOM_GRID_BOTTOM_WITH_LEGEND: f64 = 110.0;
const ZOOM_GRID_LEFT: f64 = 80.0;

const FINANCIAL_LABEL_ROTATE: f64 = 45.0;
const FINANCIAL_PRICE_TITLE: &str = "Price ($)";

fn value_axis(ctx: &PlanContext<'_>) -> AxisFragment {
    let spec = ctx.spec;
    let kind = match spec.y_axis_scale {
        AxisScale::Linear => AxisKind::Value,
        AxisScale::Log => AxisKind::Log,
    };
    AxisFragment {
        name: spec.y_axis_title.clone(),
        min: spec.y_axis_min,
        max: spec.y_axis_max,
        split_line: spec.show_grid_lines,
        ..AxisFragment::value(kind, spec.number_format)
    }
}

fn category_axis(ctx: &PlanContext<'_>, categories: Vec<String>) -> AxisFragment {
    AxisFragment {
        name: ctx.spec.x_axis_title.clone(),
        ..AxisFragment::category(categories)
    }
}

/// Axes for bar-like, line-like and scatter charts.
///
/// Row charts put categories on the vertical axis; scatter charts use two
/// value axes; combo charts add a right-hand value axis for line series.
pub(super) fn axis_chart_axes(ctx: &PlanContext<'_>, categories: Vec<String>) -> CartesianAxes {
    match ctx.kind {
        ChartKind::Row => CartesianAxes {
            x: value_axis(ctx),
            y: vec![category_axis(ctx, categories)],
        },
        ChartKind::Scatter => {
            let mut x = AxisFragment::value(AxisKind::Value, ctx.spec.number_format);
            x.name = ctx.spec.x_axis_title.clone();
            x.split_line = ctx.spec.show_grid_lines;
            x.scale_to_data = true;
            CartesianAxes {
                x,
                y: vec![value_axis(ctx)],
            }
        }
        ChartKind::Combo => {
            let secondary = AxisFragment {
                split_line: false,
                name: None,
                ..value_axis(ctx)
            };
            CartesianAxes {
                x: category_axis(ctx, categories),
                y: vec![value_axis(ctx), secondary],
            }
        }
        _ => CartesianAxes {
            x: category_axis(ctx, categories),
            y: vec![value_axis(ctx)],
        },
    }
}

pub(super) fn financial_axes(ctx: &PlanContext<'_>, categories: Vec<String>) -> CartesianAxes {
    let x = AxisFragment {
        label_rotate: FINANCIAL_LABEL_ROTATE,
        ..category_axis(ctx, categories)
    };
    let mut y = value_axis(ctx);
    y.scale_to_data = true;
    if y.name.is_none() {
        y.name = Some(FINANCIAL_PRICE_TITLE.to_owned());
    }
    CartesianAxes { x, y: vec![y] }
}

/// Slider plus inside-drag zoom, and the grid room the slider needs.
pub(super) fn data_zoom(
    ctx: &PlanContext<'_>,
    grid: &mut GridInsets,
) -> Vec<DataZoomFragment> {
    if !ctx.spec.show_data_zoom || !ctx.kind.supports_data_zoom() {
        return Vec::new();
    }

    let (orient, offset) = if ctx.kind == ChartKind::Row {
        grid.left = grid.left.max(ZOOM_GRID_LEFT);
        (Orient::Vertical, SLIDER_OFFSET)
    } else if ctx.spec.legend_position == LegendPosition::Bottom {
        grid.bottom = grid.bottom.max(ZOOM_GRID_BOTTOM_WITH_LEGEND);
        (Orient::Horizontal, SLIDER_OFFSET_ABOVE_LEGEND)
    } else {
        grid.bottom = grid.bottom.max(ZOOM_GRID_BOTTOM);
        (Orient::Horizontal, SLIDER_OFFSET)
    };

    vec![
        DataZoomFragment {
            control: ZoomControl::Slider,
            orient,
            start: 0.0,
            end: 100.0,
            offset: Some(offset),
            thickness: Some(SLIDER_THICKNESS),
        },
        DataZoomFragment {
            control: ZoomControl::Inside,
            orient,
            start: 0.0,
            end: 100.0,
            offset: None,
            thickness: None,
        },
    ]
}

/// Attaches the configured goal line to the first series.
pub(super) fn attach_goal_line(ctx: &PlanContext<'_>, series: &mut [SeriesDescriptor]) {
    if !ctx.kind.supports_goal_line() {
        return;
    }
    let (Some(value), Some(first)) = (ctx.spec.goal_value, series.first_mut()) else {
        return;
    };
    let label = ctx
        .spec
        .goal_label
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map_or_else(
            || format!("Goal: {}", format_plain_number(value)),
            str::to_owned,
        );
    first.goal_line = Some(GoalLine {
        value,
        label,
        color: GOAL_COLOR,
        dashed: true,
        silent: true,
    });
}
