use tracing::debug;

use crate::api::option_composer::{
    compose_axis, compose_calendar, compose_financial, compose_geographic, compose_hierarchy,
    compose_kpi, compose_matrix, compose_network, compose_proportion, compose_radar,
};
use crate::api::plan_context::PlanContext;
use crate::api::registry::kind_of;
use crate::api::series_builder::{
    build_axis_series, build_calendar_series, build_financial_series, build_geographic_series,
    build_hierarchy_series, build_kpi_series, build_matrix_series, build_network_series,
    build_proportion_series, build_radar_series,
};
use crate::core::reshape::{
    AxisData, CalendarData, FinancialData, GeoData, HierarchyData, KpiData, MatrixData,
    NetworkData, ProportionData, RadarData, reshape_axis, reshape_calendar, reshape_financial,
    reshape_geographic, reshape_hierarchy, reshape_kpi, reshape_matrix, reshape_network,
    reshape_proportion, reshape_radar,
};
use crate::core::{Category, ChartKind, ChartSpec, Diagnostics, Record};
use crate::error::ChartResult;
use crate::render::{RenderPlan, SeriesDescriptor};

/// The three pipeline stages one category owns.
pub trait CategoryStrategy {
    type Shape;

    fn reshape(rows: &[Record], ctx: &PlanContext<'_>, diagnostics: &mut Diagnostics)
    -> Self::Shape;

    fn build_series(
        shape: &Self::Shape,
        ctx: &PlanContext<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Vec<SeriesDescriptor>;

    fn compose(
        shape: &Self::Shape,
        ctx: &PlanContext<'_>,
        series: Vec<SeriesDescriptor>,
        diagnostics: Diagnostics,
    ) -> RenderPlan;
}

macro_rules! category_strategy {
    (
        $strategy:ident,
        $shape:ty,
        |$rows:ident, $ctx:ident, $diag:ident| $reshape:expr,
        $build:path,
        $compose:path
    ) => {
        pub struct $strategy;

        impl CategoryStrategy for $strategy {
            type Shape = $shape;

            fn reshape(
                $rows: &[Record],
                $ctx: &PlanContext<'_>,
                $diag: &mut Diagnostics,
            ) -> Self::Shape {
                $reshape
            }

            fn build_series(
                shape: &Self::Shape,
                ctx: &PlanContext<'_>,
                diagnostics: &mut Diagnostics,
            ) -> Vec<SeriesDescriptor> {
                $build(shape, ctx, diagnostics)
            }

            fn compose(
                shape: &Self::Shape,
                ctx: &PlanContext<'_>,
                series: Vec<SeriesDescriptor>,
                diagnostics: Diagnostics,
            ) -> RenderPlan {
                $compose(shape, ctx, series, diagnostics)
            }
        }
    };
}

category_strategy!(
    AxisStrategy,
    AxisData,
    |rows, ctx, diag| reshape_axis(rows, ctx.spec, ctx.kind, diag),
    build_axis_series,
    compose_axis
);
category_strategy!(
    ProportionStrategy,
    ProportionData,
    |rows, ctx, diag| reshape_proportion(rows, ctx.spec, diag),
    build_proportion_series,
    compose_proportion
);
category_strategy!(
    FinancialStrategy,
    FinancialData,
    |rows, ctx, diag| reshape_financial(rows, ctx.spec, diag),
    build_financial_series,
    compose_financial
);
category_strategy!(
    RadarStrategy,
    RadarData,
    |rows, ctx, diag| reshape_radar(rows, ctx.spec, diag),
    build_radar_series,
    compose_radar
);
category_strategy!(
    NetworkStrategy,
    NetworkData,
    |rows, ctx, diag| reshape_network(rows, ctx.spec, diag),
    build_network_series,
    compose_network
);
category_strategy!(
    HierarchyStrategy,
    HierarchyData,
    |rows, ctx, diag| reshape_hierarchy(rows, ctx.spec, diag),
    build_hierarchy_series,
    compose_hierarchy
);
category_strategy!(
    MatrixStrategy,
    MatrixData,
    |rows, ctx, diag| reshape_matrix(rows, ctx.spec, diag),
    build_matrix_series,
    compose_matrix
);
category_strategy!(
    GeographicStrategy,
    GeoData,
    |rows, ctx, diag| reshape_geographic(rows, ctx.spec, ctx.kind, diag),
    build_geographic_series,
    compose_geographic
);
category_strategy!(
    KpiStrategy,
    KpiData,
    |rows, ctx, diag| reshape_kpi(rows, ctx.spec, ctx.kind, diag),
    build_kpi_series,
    compose_kpi
);
category_strategy!(
    CalendarStrategy,
    CalendarData,
    |rows, ctx, diag| reshape_calendar(rows, ctx.spec, diag),
    build_calendar_series,
    compose_calendar
);

fn run<S: CategoryStrategy>(rows: &[Record], ctx: &PlanContext<'_>) -> RenderPlan {
    let mut diagnostics = Diagnostics::default();
    let shape = S::reshape(rows, ctx, &mut diagnostics);
    let series = S::build_series(&shape, ctx, &mut diagnostics);
    S::compose(&shape, ctx, series, diagnostics)
}

/// Turns rows plus a chart spec into an engine-agnostic render plan.
///
/// Only an unregistered `chartType` fails. Missing bindings, non-numeric
/// cells and unresolved region names degrade the plan and are listed in
/// [`RenderPlan::diagnostics`].
pub fn build_render_plan(rows: &[Record], spec: &ChartSpec) -> ChartResult<RenderPlan> {
    let kind = kind_of(&spec.chart_type)?;
    Ok(build_render_plan_for(rows, spec, kind))
}

/// [`build_render_plan`] with the chart kind already resolved.
#[must_use]
pub fn build_render_plan_for(rows: &[Record], spec: &ChartSpec, kind: ChartKind) -> RenderPlan {
    let ctx = PlanContext::new(spec, kind);
    let plan = match kind.category() {
        Category::Axis => run::<AxisStrategy>(rows, &ctx),
        Category::Proportion => run::<ProportionStrategy>(rows, &ctx),
        Category::Financial => run::<FinancialStrategy>(rows, &ctx),
        Category::Radar => run::<RadarStrategy>(rows, &ctx),
        Category::Network => run::<NetworkStrategy>(rows, &ctx),
        Category::Hierarchy => run::<HierarchyStrategy>(rows, &ctx),
        Category::Matrix => run::<MatrixStrategy>(rows, &ctx),
        Category::Geographic => run::<GeographicStrategy>(rows, &ctx),
        Category::Kpi => run::<KpiStrategy>(rows, &ctx),
        Category::Calendar => run::<CalendarStrategy>(rows, &ctx),
    };
    debug!(
        chart_type = kind.id(),
        rows = rows.len(),
        series = plan.series.len(),
        diagnostics = plan.diagnostics.len(),
        "built render plan"
    );
    plan
}
