use crate::api::option_composer::cartesian::{
    attach_goal_line, axis_chart_axes, data_zoom, financial_axes,
};
use crate::api::option_composer::visual_map::{calendar_pieces, geographic_scale, matrix_scale};
use crate::api::option_composer::{
    DEFAULT_GRID, PlanChrome, apply_legend_insets, legend, unique_names,
};
use crate::api::plan_context::PlanContext;
use crate::api::series_builder::graph_category_names;
use crate::core::reshape::{
    AxisData, CalendarData, FinancialData, GeoData, HierarchyData, KpiData, MatrixData,
    NetworkData, ProportionData, RadarData,
};
use crate::core::{ChartKind, Diagnostics};
use crate::render::{
    AxisFragment, AxisPointer, CalendarCoordinate, CartesianAxes, GridInsets, RadarAxis,
    RadarCoordinate, RenderPlan, SeriesDescriptor, TooltipFragment,
};

const MATRIX_GRID: GridInsets = GridInsets {
    top: 60.0,
    right: 120.0,
    bottom: 100.0,
    left: 120.0,
    contain_label: true,
};

const RADAR_SPLIT_NUMBER: u32 = 5;
const CALENDAR_TOP: f64 = 120.0;
const CALENDAR_CELL_HEIGHT: f64 = 20.0;

fn series_names(series: &[SeriesDescriptor]) -> Vec<String> {
    unique_names(series.iter().map(|descriptor| descriptor.name.as_str()))
}

pub fn compose_axis(
    data: &AxisData,
    ctx: &PlanContext<'_>,
    mut series: Vec<SeriesDescriptor>,
    diagnostics: Diagnostics,
) -> RenderPlan {
    let chrome = PlanChrome::new(ctx);
    let tooltip = if ctx.kind == ChartKind::Scatter {
        chrome.item_tooltip()
    } else {
        chrome.tooltip
    };
    attach_goal_line(ctx, &mut series);
    let entries = series_names(&series);

    let mut grid = DEFAULT_GRID;
    let data_zoom = data_zoom(ctx, &mut grid);

    let mut plan = chrome.into_plan(ctx, series, diagnostics);
    plan.tooltip = Some(tooltip);
    plan.legend = legend(ctx, entries);
    plan.axes = Some(axis_chart_axes(ctx, data.categories.clone()));
    plan.grid = Some(grid);
    plan.data_zoom = data_zoom;
    apply_legend_insets(&mut plan, ctx.has_title());
    plan
}

pub fn compose_financial(
    data: &FinancialData,
    ctx: &PlanContext<'_>,
    series: Vec<SeriesDescriptor>,
    diagnostics: Diagnostics,
) -> RenderPlan {
    let chrome = PlanChrome::new(ctx);
    let tooltip = TooltipFragment {
        axis_pointer: Some(AxisPointer::Cross),
        ..chrome.tooltip
    };
    let entries = series_names(&series);

    let mut grid = DEFAULT_GRID;
    let data_zoom = data_zoom(ctx, &mut grid);

    let mut plan = chrome.into_plan(ctx, series, diagnostics);
    plan.tooltip = Some(tooltip);
    plan.legend = legend(ctx, entries);
    plan.axes = Some(financial_axes(ctx, data.categories.clone()));
    plan.grid = Some(grid);
    plan.data_zoom = data_zoom;
    apply_legend_insets(&mut plan, ctx.has_title());
    plan
}

pub fn compose_proportion(
    data: &ProportionData,
    ctx: &PlanContext<'_>,
    series: Vec<SeriesDescriptor>,
    diagnostics: Diagnostics,
) -> RenderPlan {
    let chrome = PlanChrome::new(ctx);
    let tooltip = chrome.item_tooltip();
    let entries = unique_names(data.slices.iter().map(|slice| slice.name.as_str()));

    let mut plan = chrome.into_plan(ctx, series, diagnostics);
    plan.tooltip = Some(tooltip);
    plan.legend = legend(ctx, entries);
    plan.grid = Some(DEFAULT_GRID);
    apply_legend_insets(&mut plan, ctx.has_title());
    plan
}

pub fn compose_radar(
    data: &RadarData,
    ctx: &PlanContext<'_>,
    series: Vec<SeriesDescriptor>,
    diagnostics: Diagnostics,
) -> RenderPlan {
    let chrome = PlanChrome::new(ctx);
    let tooltip = chrome.tooltip;
    let entries = unique_names(data.entries.iter().map(|entry| entry.name.as_str()));

    let mut plan = chrome.into_plan(ctx, series, diagnostics);
    plan.tooltip = Some(tooltip);
    plan.legend = legend(ctx, entries);
    plan.radar = Some(RadarCoordinate {
        indicators: data
            .indicators
            .iter()
            .map(|indicator| RadarAxis {
                name: indicator.name.clone(),
                max: indicator.max,
            })
            .collect(),
        polygon: true,
        split_number: RADAR_SPLIT_NUMBER,
    });
    plan
}

pub fn compose_matrix(
    data: &MatrixData,
    ctx: &PlanContext<'_>,
    series: Vec<SeriesDescriptor>,
    diagnostics: Diagnostics,
) -> RenderPlan {
    let chrome = PlanChrome::new(ctx);
    let tooltip = chrome.item_tooltip();
    let entries = series_names(&series);

    let banded = |categories: &[String]| AxisFragment {
        split_area: true,
        ..AxisFragment::category(categories.to_vec())
    };
    let mut x = banded(&data.x_categories);
    x.name = ctx.spec.x_axis_title.clone();
    let mut y = banded(&data.y_categories);
    y.name = ctx.spec.y_axis_title.clone();

    let mut plan = chrome.into_plan(ctx, series, diagnostics);
    plan.tooltip = Some(tooltip);
    plan.legend = legend(ctx, entries);
    plan.grid = Some(MATRIX_GRID);
    plan.axes = Some(CartesianAxes { x, y: vec![y] });
    plan.visual_map = Some(matrix_scale(data));
    apply_legend_insets(&mut plan, ctx.has_title());
    plan
}

pub fn compose_calendar(
    data: &CalendarData,
    ctx: &PlanContext<'_>,
    series: Vec<SeriesDescriptor>,
    diagnostics: Diagnostics,
) -> RenderPlan {
    let chrome = PlanChrome::new(ctx);
    let tooltip = chrome.item_tooltip();

    let mut plan = chrome.into_plan(ctx, series, diagnostics);
    plan.tooltip = Some(tooltip);
    plan.calendar = Some(CalendarCoordinate {
        range: data.year.clone(),
        top: CALENDAR_TOP,
        cell_height: CALENDAR_CELL_HEIGHT,
    });
    plan.visual_map = Some(calendar_pieces(ctx.palette.color(0), ctx.spec.legend_position));
    plan
}

pub fn compose_network(
    _data: &NetworkData,
    ctx: &PlanContext<'_>,
    series: Vec<SeriesDescriptor>,
    diagnostics: Diagnostics,
) -> RenderPlan {
    let chrome = PlanChrome::new(ctx);
    let tooltip = chrome.item_tooltip();
    let legend = match ctx.kind {
        ChartKind::Graph | ChartKind::CircularGraph => legend(ctx, graph_category_names(ctx)),
        _ => None,
    };

    let mut plan = chrome.into_plan(ctx, series, diagnostics);
    plan.tooltip = Some(tooltip);
    plan.legend = legend;
    plan
}

pub fn compose_hierarchy(
    _data: &HierarchyData,
    ctx: &PlanContext<'_>,
    series: Vec<SeriesDescriptor>,
    diagnostics: Diagnostics,
) -> RenderPlan {
    let chrome = PlanChrome::new(ctx);
    let tooltip = chrome.item_tooltip();
    let mut plan = chrome.into_plan(ctx, series, diagnostics);
    plan.tooltip = Some(tooltip);
    plan
}

pub fn compose_kpi(
    _data: &KpiData,
    ctx: &PlanContext<'_>,
    series: Vec<SeriesDescriptor>,
    diagnostics: Diagnostics,
) -> RenderPlan {
    let chrome = PlanChrome::new(ctx);
    // Big numbers have nothing to hover.
    let tooltip = (ctx.kind != ChartKind::Number).then(|| chrome.item_tooltip());
    let mut plan = chrome.into_plan(ctx, series, diagnostics);
    plan.tooltip = tooltip;
    plan
}

pub fn compose_geographic(
    data: &GeoData,
    ctx: &PlanContext<'_>,
    series: Vec<SeriesDescriptor>,
    diagnostics: Diagnostics,
) -> RenderPlan {
    let chrome = PlanChrome::new(ctx);
    let tooltip = chrome.item_tooltip();
    let mut plan = chrome.into_plan(ctx, series, diagnostics);
    plan.tooltip = Some(tooltip);
    plan.visual_map = Some(geographic_scale(data, ctx.palette));
    plan
}
