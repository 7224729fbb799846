use crate::api::plan_context::PlanContext;
use crate::core::reshape::{AxisData, AxisSeries};
use crate::core::{ChartKind, Diagnostics};
use crate::render::{
    AreaFill, EmphasisPolicy, LabelContent, LabelPolicy, LabelPosition, SeriesData,
    SeriesDescriptor, SeriesLayout, VisualType,
};

use super::{point_label, stack_id};

const BAR_MAX_WIDTH: f64 = 40.0;
const ROW_BAR_MAX_WIDTH: f64 = 30.0;
const AREA_FILL_TOP_ALPHA: u8 = 0x40;
const AREA_FILL_BOTTOM_ALPHA: u8 = 0x05;

/// Builds bar, line, area, row, combo and scatter series.
#[must_use]
pub fn build_axis_series(
    data: &AxisData,
    ctx: &PlanContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Vec<SeriesDescriptor> {
    data.series
        .iter()
        .map(|series| {
            let color = ctx.series_color(
                series.ordinal,
                series.color_override.as_deref(),
                &series.name,
                diagnostics,
            );
            let descriptor = match ctx.kind {
                ChartKind::Line => line(series, ctx, None),
                ChartKind::Area => line(
                    series,
                    ctx,
                    Some(AreaFill {
                        from: color.with_alpha(AREA_FILL_TOP_ALPHA),
                        to: color.with_alpha(AREA_FILL_BOTTOM_ALPHA),
                    }),
                ),
                ChartKind::Row => row(series, ctx),
                ChartKind::Scatter => scatter(series, data),
                ChartKind::Combo if series.secondary => combo_line(series, ctx),
                ChartKind::Combo if data.series.len() >= 2 => combo_bar(series, ctx),
                _ => bar(series, ctx),
            };
            descriptor.with_color(color)
        })
        .collect()
}

fn cartesian(
    horizontal: bool,
    smooth: bool,
    bar_max_width: Option<f64>,
    symbol_size: Option<f64>,
) -> SeriesLayout {
    SeriesLayout::Cartesian {
        smooth,
        horizontal,
        bar_max_width,
        symbol_size,
        area_fill: None,
        opacity: None,
    }
}

fn values(series: &AxisSeries) -> SeriesData {
    SeriesData::Values(series.values.clone())
}

fn bar(series: &AxisSeries, ctx: &PlanContext<'_>) -> SeriesDescriptor {
    let mut descriptor = SeriesDescriptor::new(
        VisualType::Bar,
        series.name.clone(),
        values(series),
        cartesian(false, false, Some(BAR_MAX_WIDTH), None),
    )
    .with_label(point_label(ctx.spec, LabelPosition::Top))
    .with_emphasis(EmphasisPolicy::Shadow);
    descriptor.stack = stack_id(ctx.spec);
    descriptor.extreme_markers = ctx.spec.show_min_max;
    descriptor
}

fn line(
    series: &AxisSeries,
    ctx: &PlanContext<'_>,
    area_fill: Option<AreaFill>,
) -> SeriesDescriptor {
    let mut descriptor = SeriesDescriptor::new(
        VisualType::Line,
        series.name.clone(),
        values(series),
        SeriesLayout::Cartesian {
            smooth: true,
            horizontal: false,
            bar_max_width: None,
            symbol_size: Some(6.0),
            area_fill,
            opacity: None,
        },
    )
    .with_label(point_label(ctx.spec, LabelPosition::Top))
    .with_emphasis(EmphasisPolicy::FocusSeries);
    descriptor.stack = stack_id(ctx.spec);
    descriptor.extreme_markers = ctx.spec.show_min_max;
    descriptor
}

fn row(series: &AxisSeries, ctx: &PlanContext<'_>) -> SeriesDescriptor {
    let mut descriptor = SeriesDescriptor::new(
        VisualType::Bar,
        series.name.clone(),
        values(series),
        cartesian(true, false, Some(ROW_BAR_MAX_WIDTH), None),
    )
    .with_label(LabelPolicy::when(
        ctx.spec.show_values,
        LabelContent::Value,
        LabelPosition::Right,
        ctx.spec.number_format,
    ))
    .with_emphasis(EmphasisPolicy::Shadow);
    descriptor.stack = stack_id(ctx.spec);
    descriptor.extreme_markers = ctx.spec.show_min_max;
    descriptor
}

fn combo_bar(series: &AxisSeries, ctx: &PlanContext<'_>) -> SeriesDescriptor {
    let mut descriptor = SeriesDescriptor::new(
        VisualType::Bar,
        series.name.clone(),
        values(series),
        cartesian(false, false, Some(BAR_MAX_WIDTH), None),
    )
    .with_label(combo_label(ctx))
    .with_emphasis(EmphasisPolicy::Shadow);
    descriptor.stack = stack_id(ctx.spec);
    descriptor.extreme_markers = ctx.spec.show_min_max;
    descriptor
}

fn combo_line(series: &AxisSeries, ctx: &PlanContext<'_>) -> SeriesDescriptor {
    let mut descriptor = SeriesDescriptor::new(
        VisualType::Line,
        series.name.clone(),
        values(series),
        cartesian(false, true, None, Some(8.0)),
    )
    .with_label(combo_label(ctx))
    .with_emphasis(EmphasisPolicy::FocusSeries);
    descriptor.stack = stack_id(ctx.spec);
    descriptor.extreme_markers = ctx.spec.show_min_max;
    descriptor.y_axis_index = 1;
    descriptor
}

fn combo_label(ctx: &PlanContext<'_>) -> LabelPolicy {
    LabelPolicy::when(
        ctx.spec.show_values,
        LabelContent::Value,
        LabelPosition::Top,
        ctx.spec.number_format,
    )
}

/// Non-numeric x values fall back to the 1-based row position.
fn scatter(series: &AxisSeries, data: &AxisData) -> SeriesDescriptor {
    let points = data
        .x_values
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(index, (x, y))| [x.or(Some((index + 1) as f64)), *y])
        .collect();
    SeriesDescriptor::new(
        VisualType::Scatter,
        series.name.clone(),
        SeriesData::Pairs(points),
        SeriesLayout::Cartesian {
            smooth: false,
            horizontal: false,
            bar_max_width: None,
            symbol_size: Some(15.0),
            area_fill: None,
            opacity: Some(0.7),
        },
    )
    .with_emphasis(EmphasisPolicy::Scale)
}
