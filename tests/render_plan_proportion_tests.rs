use approx::assert_relative_eq;
use chart_plan::api::build_render_plan;
use chart_plan::core::{
    Category, ChartSpec, LabelPlacement, LegendPosition, PlanDiagnostic, Record, SeriesBinding,
    palette_color,
};
use chart_plan::render::{
    LabelContent, LabelPosition, NamedValue, NullRenderer, PlanRenderer, SeriesData, SeriesLayout,
    TooltipTrigger, VisualType,
};
use serde_json::json;

fn rows(value: serde_json::Value) -> Vec<Record> {
    serde_json::from_value(value).expect("rows fixture")
}

fn named(plan_series: &SeriesData) -> &[NamedValue] {
    match plan_series {
        SeriesData::Named(points) => points,
        other => panic!("expected named points, got {other:?}"),
    }
}

#[test]
fn multiple_bindings_collapse_to_one_slice_each() {
    let data = rows(json!([
        { "a": 1, "b": 1, "c": 2 },
        { "a": 2, "b": "x", "c": 2 },
        { "a": null, "b": 2, "c": 0 }
    ]));
    let mut spec = ChartSpec::new("pie");
    spec.series = vec![
        SeriesBinding::new("a", "Alpha"),
        SeriesBinding::new("b", "Beta"),
        SeriesBinding::new("c", "Gamma"),
    ];

    let plan = build_render_plan(&data, &spec).expect("plan");

    assert_eq!(plan.category, Category::Proportion);
    assert_eq!(plan.series.len(), 1);
    let slices = named(&plan.series[0].data);
    let values: Vec<Option<f64>> = slices.iter().map(|slice| slice.value).collect();
    assert_eq!(values, vec![Some(3.0), Some(3.0), Some(4.0)]);
    assert_eq!(slices[2].color, Some(palette_color(2, "default")));
    assert_eq!(
        plan.legend.as_ref().expect("legend").entries,
        vec!["Alpha", "Beta", "Gamma"]
    );
    assert!(plan.axes.is_none());
    assert!(plan.data_zoom.is_empty());
    assert_eq!(plan.tooltip.expect("tooltip").trigger, TooltipTrigger::Item);
}

#[test]
fn single_binding_with_category_field_yields_slice_per_row() {
    let data = rows(json!([
        { "region": "North", "sales": 10 },
        { "region": "South", "sales": 30 }
    ]));
    let mut spec = ChartSpec::new("donut");
    spec.x_axis_field = Some("region".to_owned());
    spec.series = vec![SeriesBinding::new("sales", "Sales")];

    let plan = build_render_plan(&data, &spec).expect("plan");

    let slices = named(&plan.series[0].data);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].name, "North");
    assert_eq!(slices[1].value, Some(30.0));
    assert_eq!(plan.series[0].name, "Sales");
    let SeriesLayout::Pie {
        inner_radius_pct, ..
    } = plan.series[0].layout
    else {
        panic!("expected pie layout");
    };
    assert_relative_eq!(inner_radius_pct, 45.0);
}

#[test]
fn named_value_cells_are_used_directly() {
    let data = rows(json!([
        { "slice": { "name": "Chrome", "value": 60 } },
        { "slice": { "name": "Firefox", "value": "25" } }
    ]));
    let mut spec = ChartSpec::new("pie");
    spec.series = vec![SeriesBinding::new("slice", "")];

    let plan = build_render_plan(&data, &spec).expect("plan");

    let slices = named(&plan.series[0].data);
    assert_eq!(slices[0].name, "Chrome");
    assert_eq!(slices[1].value, Some(25.0));
    assert_eq!(
        plan.legend.expect("legend").entries,
        vec!["Chrome", "Firefox"]
    );
}

#[test]
fn labels_and_values_at_same_position_merge_into_one_descriptor() {
    let data = rows(json!([{ "a": 1, "b": 2 }]));
    let mut spec = ChartSpec::new("pie");
    spec.series = vec![SeriesBinding::new("a", ""), SeriesBinding::new("b", "")];
    spec.show_labels = true;
    spec.show_values = true;

    let plan = build_render_plan(&data, &spec).expect("plan");

    assert_eq!(plan.series.len(), 1);
    assert_eq!(plan.series[0].label.content, LabelContent::NameAndValue);
    assert_eq!(plan.series[0].label.position, LabelPosition::Outside);
}

#[test]
fn split_label_positions_emit_name_series_and_silent_percent_overlay() {
    let data = rows(json!([{ "a": 1, "b": 2 }]));
    let mut spec = ChartSpec::new("pie");
    spec.series = vec![SeriesBinding::new("a", ""), SeriesBinding::new("b", "")];
    spec.show_labels = true;
    spec.show_values = true;
    spec.label_value_position = LabelPlacement::Inside;

    let plan = build_render_plan(&data, &spec).expect("plan");

    assert_eq!(plan.series.len(), 2);
    assert_eq!(plan.series[0].label.content, LabelContent::Name);
    assert!(!plan.series[0].silent);
    assert_eq!(plan.series[1].label.content, LabelContent::Percent);
    assert_eq!(plan.series[1].label.position, LabelPosition::Inside);
    assert!(plan.series[1].silent);
    assert_eq!(plan.series[0].data, plan.series[1].data);
}

#[test]
fn no_labels_gives_single_unlabeled_descriptor() {
    let data = rows(json!([{ "a": 1 }]));
    let mut spec = ChartSpec::new("nightingale");
    spec.series = vec![SeriesBinding::new("a", "")];

    let plan = build_render_plan(&data, &spec).expect("plan");

    assert_eq!(plan.series.len(), 1);
    assert!(!plan.series[0].label.visible);
    assert!(matches!(
        plan.series[0].layout,
        SeriesLayout::Pie { rose: true, .. }
    ));
}

#[test]
fn half_donut_uses_upper_half_angles() {
    let data = rows(json!([{ "a": 1 }]));
    let mut spec = ChartSpec::new("halfDonut");
    spec.series = vec![SeriesBinding::new("a", "")];

    let plan = build_render_plan(&data, &spec).expect("plan");

    let SeriesLayout::Pie {
        inner_radius_pct,
        center_y_pct,
        start_angle,
        end_angle,
        ..
    } = plan.series[0].layout
    else {
        panic!("expected pie layout");
    };
    assert_relative_eq!(inner_radius_pct, 45.0);
    assert_relative_eq!(center_y_pct, 70.0);
    assert_eq!(start_angle, Some(180.0));
    assert_eq!(end_angle, Some(360.0));
}

#[test]
fn funnel_stages_sort_descending_with_missing_last() {
    let data = rows(json!([
        { "stage": "Visit", "count": 50 },
        { "stage": "Lead", "count": null },
        { "stage": "Signup", "count": 200 },
        { "stage": "Paid", "count": 10 }
    ]));
    let mut spec = ChartSpec::new("funnel");
    spec.x_axis_field = Some("stage".to_owned());
    spec.series = vec![SeriesBinding::new("count", "Users")];
    spec.show_values = true;

    let plan = build_render_plan(&data, &spec).expect("plan");

    assert_eq!(plan.series.len(), 1);
    let series = &plan.series[0];
    assert_eq!(series.visual, VisualType::Funnel);
    assert_eq!(series.label.content, LabelContent::NameAndValue);
    assert_eq!(series.label.position, LabelPosition::Inside);
    let names: Vec<&str> = named(&series.data)
        .iter()
        .map(|stage| stage.name.as_str())
        .collect();
    assert_eq!(names, vec!["Signup", "Visit", "Paid", "Lead"]);
}

#[test]
fn bottom_legend_raises_grid_bottom() {
    let data = rows(json!([{ "a": 1 }]));
    let mut spec = ChartSpec::new("pie");
    spec.series = vec![SeriesBinding::new("a", "")];
    spec.legend_position = LegendPosition::Bottom;

    let plan = build_render_plan(&data, &spec).expect("plan");

    assert_relative_eq!(plan.grid.expect("grid").bottom, 85.0);
}

#[test]
fn no_bindings_gives_empty_plan_with_diagnostic() {
    let data = rows(json!([{ "a": 1 }]));
    let plan = build_render_plan(&data, &ChartSpec::new("pie")).expect("plan");

    assert!(plan.is_empty());
    assert!(!plan.diagnostics.is_empty());
}

#[test]
fn overflowing_collapse_becomes_null_slice() {
    let data = rows(json!([{ "a": 1e308, "b": 2 }, { "a": 1e308, "b": 3 }]));
    let mut spec = ChartSpec::new("pie");
    spec.series = vec![SeriesBinding::new("a", "A"), SeriesBinding::new("b", "B")];

    let plan = build_render_plan(&data, &spec).expect("plan");

    let SeriesData::Named(slices) = &plan.series[0].data else {
        panic!("expected named slices");
    };
    assert_eq!(slices[0].value, None);
    assert_relative_eq!(slices[1].value.expect("b total"), 5.0);
    assert!(plan.diagnostics.contains(&PlanDiagnostic::NonFiniteAggregate {
        field: "a".to_owned(),
    }));
    NullRenderer::default()
        .render(&plan)
        .expect("overflowed plan still renders");
}
