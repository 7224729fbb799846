use chart_plan::api::build_render_plan;
use chart_plan::core::{ChartSpec, MapBinding, PlanDiagnostic, Record, SeriesBinding};
use chart_plan::render::{NamedValue, SeriesData, SeriesLayout, VisualMapFragment, VisualType};
use serde_json::json;

fn rows(value: serde_json::Value) -> Vec<Record> {
    serde_json::from_value(value).expect("rows fixture")
}

fn named(data: &SeriesData) -> &[NamedValue] {
    match data {
        SeriesData::Named(points) => points.as_slice(),
        other => panic!("expected named points, got {other:?}"),
    }
}

fn province_rows() -> Vec<Record> {
    rows(json!([
        { "province": " DKI Jakarta ", "population": "10,562,088", "schools": 40 },
        { "province": "Papua Barat", "population": 1134068, "schools": 8 },
        { "province": "Atlantis", "population": 5, "schools": 1 },
        { "province": "", "population": 9, "schools": 2 }
    ]))
}

fn map_spec(chart_type: &str) -> ChartSpec {
    let mut spec = ChartSpec::new(chart_type);
    spec.map = Some(MapBinding {
        key_field: Some("province".to_owned()),
        value_field: None,
        region: None,
        boundary_names: Some(vec![
            "Jakarta Raya".to_owned(),
            "Irian Jaya Barat".to_owned(),
        ]),
    });
    spec.series = vec![SeriesBinding::new("population", "Population")];
    spec
}

#[test]
fn region_names_are_corrected_and_unknowns_lose_their_value() {
    let plan = build_render_plan(&province_rows(), &map_spec("geomap")).expect("plan");

    assert_eq!(plan.series.len(), 1);
    let series = &plan.series[0];
    assert_eq!(series.visual, VisualType::Map);
    assert_eq!(series.name, "Population");
    let SeriesLayout::Map { region, .. } = &series.layout else {
        panic!("expected map layout");
    };
    assert_eq!(region, "indonesia");

    let points = named(&series.data);
    let names: Vec<&str> = points.iter().map(|point| point.name.as_str()).collect();
    assert_eq!(names, vec!["Jakarta Raya", "Irian Jaya Barat", "Atlantis"]);
    assert_eq!(points[0].value, Some(10_562_088.0));
    assert_eq!(points[2].value, None);
    assert!(
        plan.diagnostics
            .contains(&PlanDiagnostic::UnresolvedGeographicName {
                name: "Atlantis".to_owned(),
            })
    );
}

#[test]
fn visual_map_spans_resolved_values() {
    let plan = build_render_plan(&province_rows(), &map_spec("geomap")).expect("plan");

    let Some(VisualMapFragment::Continuous {
        min, max, in_range, ..
    }) = &plan.visual_map
    else {
        panic!("expected continuous visual map");
    };
    assert!((min - 1_134_068.0).abs() <= 1e-9);
    assert!((max - 10_562_088.0).abs() <= 1e-9);
    assert_eq!(in_range.len(), 10);
    assert!(plan.axes.is_none());
    assert!(plan.legend.is_none());
}

#[test]
fn single_value_widens_scale_and_empty_uses_default_range() {
    let data = rows(json!([{ "country": "Chile", "gdp": 7 }]));
    let mut spec = ChartSpec::new("geomap");
    spec.x_axis_field = Some("country".to_owned());

    let plan = build_render_plan(&data, &spec).expect("plan");
    let Some(VisualMapFragment::Continuous { min, max, .. }) = plan.visual_map else {
        panic!("expected continuous visual map");
    };
    assert!((min - 6.0).abs() <= 1e-9);
    assert!((max - 8.0).abs() <= 1e-9);
    // Falls back to the first numeric column and the generic series name.
    assert_eq!(plan.series[0].name, "Value");

    let plan = build_render_plan(&[], &spec).expect("plan");
    let Some(VisualMapFragment::Continuous { min, max, .. }) = plan.visual_map else {
        panic!("expected continuous visual map");
    };
    assert!(min.abs() <= 1e-9);
    assert!((max - 100.0).abs() <= 1e-9);
}

#[test]
fn explicit_region_and_world_corrections() {
    let data = rows(json!([{ "country": "United States", "gdp": 25 }]));
    let mut spec = ChartSpec::new("geomap");
    spec.map = Some(MapBinding {
        key_field: Some("country".to_owned()),
        value_field: Some("gdp".to_owned()),
        region: Some("world".to_owned()),
        boundary_names: None,
    });

    let plan = build_render_plan(&data, &spec).expect("plan");

    let SeriesLayout::Map { region, .. } = &plan.series[0].layout else {
        panic!("expected map layout");
    };
    assert_eq!(region, "world");
    assert_eq!(
        named(&plan.series[0].data)[0].name,
        "United States of America"
    );
}

#[test]
fn geomap_pie_adds_one_pie_per_region() {
    let mut spec = map_spec("geomapPie");
    spec.series.push(SeriesBinding::new("schools", "Schools"));

    let plan = build_render_plan(&province_rows(), &spec).expect("plan");

    // Base map plus three regions.
    assert_eq!(plan.series.len(), 4);
    let pie = &plan.series[1];
    assert_eq!(pie.visual, VisualType::Pie);
    assert_eq!(pie.name, "Jakarta Raya");
    let slices = named(&pie.data);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].name, "Population");
    assert_eq!(slices[1].value, Some(40.0));
    assert!(slices.iter().all(|slice| slice.color.is_some()));
}

#[test]
fn missing_key_field_degrades() {
    let plan = build_render_plan(&province_rows(), &ChartSpec::new("geomap")).expect("plan");

    assert!(plan.is_empty());
    assert!(plan.diagnostics.contains(&PlanDiagnostic::MissingBinding {
        binding: "map.keyField".to_owned(),
    }));
}
