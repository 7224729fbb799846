use approx::assert_relative_eq;
use chart_plan::api::build_render_plan;
use chart_plan::core::{
    ChartSpec, GaugeOptions, KpiAggregation, KpiBinding, NumberFormat, PlanDiagnostic, Record,
    SeriesBinding,
};
use chart_plan::render::{
    NamedValue, NullRenderer, PlanRenderer, SeriesData, SeriesLayout, TooltipTrigger, VisualType,
};
use serde_json::json;

fn rows(value: serde_json::Value) -> Vec<Record> {
    serde_json::from_value(value).expect("rows fixture")
}

fn revenue_rows() -> Vec<Record> {
    rows(json!([
        { "region": "North", "revenue": 1234 },
        { "region": "South", "revenue": "1,000" },
        { "region": "East", "revenue": "n/a" },
        { "region": "West", "revenue": null }
    ]))
}

fn kpi_spec(chart_type: &str, aggregation: KpiAggregation) -> ChartSpec {
    let mut spec = ChartSpec::new(chart_type);
    spec.kpi = Some(KpiBinding {
        field: Some("revenue".to_owned()),
        aggregation,
        label: None,
    });
    spec
}

fn single_point(data: &SeriesData) -> &NamedValue {
    match data {
        SeriesData::Named(points) if points.len() == 1 => &points[0],
        other => panic!("expected one named point, got {other:?}"),
    }
}

#[test]
fn number_chart_sums_and_formats_compact() {
    let plan = build_render_plan(&revenue_rows(), &kpi_spec("number", KpiAggregation::Sum))
        .expect("plan");

    assert_eq!(plan.series.len(), 1);
    let series = &plan.series[0];
    assert_eq!(series.visual, VisualType::KpiText);
    assert_eq!(series.name, "SUM");
    assert_relative_eq!(single_point(&series.data).value.expect("value"), 2234.0);
    let SeriesLayout::KpiText { text, caption } = &series.layout else {
        panic!("expected kpi text layout");
    };
    assert_eq!(text, "2.2K");
    assert_eq!(caption, "SUM");
    assert!(plan.tooltip.is_none());
    assert!(plan.legend.is_none());
    assert!(plan.diagnostics.contains(&PlanDiagnostic::NonNumericValue {
        field: "revenue".to_owned(),
        rows: 1,
    }));
}

#[test]
fn number_chart_keeps_an_explicit_format() {
    let mut spec = kpi_spec("number", KpiAggregation::Avg);
    spec.number_format = NumberFormat::Currency;

    let plan = build_render_plan(&revenue_rows(), &spec).expect("plan");

    let SeriesLayout::KpiText { text, .. } = &plan.series[0].layout else {
        panic!("expected kpi text layout");
    };
    assert_eq!(text, "$1,117");
}

#[test]
fn count_uses_row_count_even_without_field() {
    let mut spec = ChartSpec::new("number");
    spec.kpi = Some(KpiBinding {
        field: None,
        aggregation: KpiAggregation::Count,
        label: Some("Orders".to_owned()),
    });

    let plan = build_render_plan(&revenue_rows(), &spec).expect("plan");

    let point = single_point(&plan.series[0].data);
    assert_eq!(point.name, "Orders");
    assert_relative_eq!(point.value.expect("value"), 4.0);
    assert!(plan.diagnostics.is_empty());
}

#[test]
fn min_and_max_skip_unparsable_cells() {
    let min_plan = build_render_plan(&revenue_rows(), &kpi_spec("gauge", KpiAggregation::Min))
        .expect("plan");
    let max_plan = build_render_plan(&revenue_rows(), &kpi_spec("gauge", KpiAggregation::Max))
        .expect("plan");

    assert_relative_eq!(
        single_point(&min_plan.series[0].data).value.expect("min"),
        1000.0
    );
    assert_relative_eq!(
        single_point(&max_plan.series[0].data).value.expect("max"),
        1234.0
    );
}

#[test]
fn gauge_carries_dial_geometry_and_field_label() {
    let mut spec = kpi_spec("gaugeSpeed", KpiAggregation::Sum);
    spec.gauge = GaugeOptions {
        min: 0.0,
        max: 5000.0,
        split_number: 5,
        ..GaugeOptions::default()
    };

    let plan = build_render_plan(&revenue_rows(), &spec).expect("plan");

    let series = &plan.series[0];
    assert_eq!(series.visual, VisualType::Gauge);
    assert_eq!(series.name, "revenue");
    assert_eq!(
        series.layout,
        SeriesLayout::Gauge {
            min: 0.0,
            max: 5000.0,
            start_angle: 225.0,
            end_angle: -45.0,
            split_number: 5,
            speedometer: true,
        }
    );
    assert_eq!(plan.tooltip.expect("tooltip").trigger, TooltipTrigger::Item);
}

#[test]
fn missing_kpi_field_yields_zero_with_diagnostic() {
    let mut spec = ChartSpec::new("gauge");
    spec.series = vec![SeriesBinding::new("profit", "")];

    let plan = build_render_plan(&revenue_rows(), &spec).expect("plan");

    assert_relative_eq!(
        single_point(&plan.series[0].data).value.expect("value"),
        0.0
    );
    assert!(plan.diagnostics.contains(&PlanDiagnostic::MissingBinding {
        binding: "profit".to_owned(),
    }));
}

fn radar_rows() -> Vec<Record> {
    rows(json!([
        { "player": "Ana", "speed": 100, "power": "50" },
        { "player": "Ben", "speed": 80, "power": 30 },
        { "player": "", "speed": "fast", "power": 10 }
    ]))
}

fn radar_spec() -> ChartSpec {
    let mut spec = ChartSpec::new("radar");
    spec.x_axis_field = Some("player".to_owned());
    spec.series = vec![
        SeriesBinding::new("speed", "Speed"),
        SeriesBinding::new("power", "Power"),
    ];
    spec
}

#[test]
fn radar_indicator_max_adds_headroom_over_numeric_cells() {
    let plan = build_render_plan(&radar_rows(), &radar_spec()).expect("plan");

    let radar = plan.radar.as_ref().expect("radar coordinate");
    assert!(radar.polygon);
    assert_eq!(radar.split_number, 5);
    assert_eq!(radar.indicators[0].name, "Speed");
    assert_relative_eq!(radar.indicators[0].max, 110.0);
    // The quoted "50" does not count toward the scale.
    assert_relative_eq!(radar.indicators[1].max, 33.0);
}

#[test]
fn radar_entries_follow_rows_with_zero_for_bad_cells() {
    let plan = build_render_plan(&radar_rows(), &radar_spec()).expect("plan");

    let series = &plan.series[0];
    assert_eq!(series.visual, VisualType::Radar);
    assert_eq!(series.name, "Radar");
    let SeriesData::Vectors(entries) = &series.data else {
        panic!("expected vectors");
    };
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].values, vec![100.0, 50.0]);
    assert_eq!(entries[2].name, "Unknown");
    assert_eq!(entries[2].values, vec![0.0, 10.0]);
    assert_eq!(
        plan.legend.as_ref().expect("legend").entries,
        vec!["Ana", "Ben", "Unknown"]
    );
    assert_eq!(plan.tooltip.expect("tooltip").trigger, TooltipTrigger::Axis);
    assert!(plan.grid.is_none());
}

#[test]
fn radar_without_metrics_shows_placeholder_indicator() {
    let plan = build_render_plan(&radar_rows(), &ChartSpec::new("radar")).expect("plan");

    let radar = plan.radar.as_ref().expect("radar coordinate");
    assert_eq!(radar.indicators.len(), 1);
    assert_eq!(radar.indicators[0].name, "No Metrics");
    assert_relative_eq!(radar.indicators[0].max, 100.0);
    assert!(plan.is_empty());
}

#[test]
fn overflowing_kpi_sum_falls_back_to_zero() {
    let data = rows(json!([{ "revenue": 1e308 }, { "revenue": 1e308 }]));

    for aggregation in [KpiAggregation::Sum, KpiAggregation::Avg] {
        let plan = build_render_plan(&data, &kpi_spec("gauge", aggregation)).expect("plan");

        assert_relative_eq!(
            single_point(&plan.series[0].data).value.expect("value"),
            0.0
        );
        assert!(plan.diagnostics.contains(&PlanDiagnostic::NonFiniteAggregate {
            field: "revenue".to_owned(),
        }));
        NullRenderer::default()
            .render(&plan)
            .expect("overflowed plan still renders");
    }
}

#[test]
fn radar_headroom_past_float_range_keeps_observed_max() {
    let data = rows(json!([{ "player": "Ana", "speed": 1.7e308 }]));
    let mut spec = ChartSpec::new("radar");
    spec.x_axis_field = Some("player".to_owned());
    spec.series = vec![SeriesBinding::new("speed", "Speed")];

    let plan = build_render_plan(&data, &spec).expect("plan");

    let radar = plan.radar.as_ref().expect("radar coordinate");
    assert!(radar.indicators[0].max.is_finite());
    assert_relative_eq!(radar.indicators[0].max, 1.7e308);
    NullRenderer::default().render(&plan).expect("plan renders");
}
