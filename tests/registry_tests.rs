use chart_plan::api::{
    build_render_plan, category_of, chart_types, kind_of, list_by_category, list_by_group, meta,
};
use chart_plan::core::{Category, ChartKind, ChartSpec};
use chart_plan::error::ChartError;

#[test]
fn registry_holds_all_twenty_eight_types_once() {
    let types = chart_types();
    assert_eq!(types.len(), 28);
    for (index, entry) in types.iter().enumerate() {
        assert!(
            types[index + 1..].iter().all(|other| other.id != entry.id),
            "duplicate id `{}`",
            entry.id
        );
    }
}

#[test]
fn lookup_resolves_kind_category_and_label() {
    assert_eq!(kind_of("halfDonut").expect("kind"), ChartKind::HalfDonut);
    assert_eq!(category_of("halfDonut").expect("category"), Category::Proportion);
    assert_eq!(category_of("gaugeSpeed").expect("category"), Category::Kpi);
    assert_eq!(category_of("chord").expect("category"), Category::Network);
    assert_eq!(category_of("geomapPie").expect("category"), Category::Geographic);
    assert_eq!(meta("radialTree").expect("meta").label, "Radial Tree");
}

#[test]
fn registry_resolves_every_kind_the_pipeline_builds() {
    let ids: Vec<&str> = chart_types().iter().map(|entry| entry.id).collect();
    let kind_ids: Vec<&str> = ChartKind::ALL.iter().map(|kind| kind.id()).collect();
    assert_eq!(ids, kind_ids);

    for entry in chart_types() {
        assert_eq!(kind_of(entry.id).expect("kind"), entry.kind);
        let plan = build_render_plan(&[], &ChartSpec::new(entry.id)).expect("plan");
        assert_eq!(plan.chart_type, entry.kind);
        assert_eq!(plan.category, category_of(entry.id).expect("category"));
    }
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    for id in ["Bar", "half_donut", "", "waterfall", "HalfDonut"] {
        assert!(matches!(
            kind_of(id),
            Err(ChartError::UnknownChartType { .. })
        ));
        assert!(matches!(
            build_render_plan(&[], &ChartSpec::new(id)),
            Err(ChartError::UnknownChartType { .. })
        ));
    }
}

#[test]
fn category_listing_preserves_registration_order() {
    let by_category = list_by_category();

    assert_eq!(by_category.len(), 10);
    let first: Vec<&Category> = by_category.keys().take(3).collect();
    assert_eq!(
        first,
        vec![&Category::Axis, &Category::Proportion, &Category::Radar]
    );
    let axis_ids: Vec<&str> = by_category[&Category::Axis]
        .iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(axis_ids, vec!["bar", "line", "area", "row", "combo", "scatter"]);
    assert_eq!(by_category[&Category::Hierarchy].len(), 4);
}

#[test]
fn picker_groups_follow_dashboard_menu() {
    let groups = list_by_group();

    let names: Vec<&str> = groups.keys().copied().collect();
    assert_eq!(
        names,
        vec![
            "Basic",
            "Proportion",
            "Comparison",
            "Financial",
            "Time",
            "Network",
            "Flow",
            "Hierarchy",
            "KPI",
            "Geographic",
        ]
    );
    let flow: Vec<&str> = groups["Flow"].iter().map(|entry| entry.id).collect();
    assert_eq!(flow, vec!["sankey", "chord"]);
}

#[test]
fn metadata_serializes_for_pickers() {
    let entry = meta("gaugeSpeed").expect("meta");
    let value = serde_json::to_value(entry).expect("json");
    assert_eq!(value["id"], "gaugeSpeed");
    assert_eq!(value["label"], "Speedometer");
    assert_eq!(value["group"], "KPI");
}
