//! Public pipeline surface: registry lookup, spec validation, series
//! building, option composition and the persisted-record helpers.

mod chart_spec;
mod json_contract;
mod option_composer;
mod pipeline;
mod plan_context;
mod registry;
mod saved_design;
mod series_builder;
mod validation;

pub use chart_spec::ChartSpecBuilder;
pub use json_contract::{RENDER_PLAN_JSON_SCHEMA_V1, RenderPlanJsonContractV1};
pub use option_composer::{
    compose_axis, compose_calendar, compose_financial, compose_geographic, compose_hierarchy,
    compose_kpi, compose_matrix, compose_network, compose_proportion, compose_radar,
};
pub use pipeline::{CategoryStrategy, build_render_plan, build_render_plan_for};
pub use plan_context::PlanContext;
pub use registry::{
    ChartTypeMeta, category_of, chart_types, kind_of, list_by_category, list_by_group, meta,
};
pub use saved_design::{DashboardLayout, PublishSettings, SavedChartDesign};
pub use series_builder::{
    build_axis_series, build_calendar_series, build_financial_series, build_geographic_series,
    build_hierarchy_series, build_kpi_series, build_matrix_series, build_network_series,
    build_proportion_series, build_radar_series, graph_category_names, node_symbol_size,
};
