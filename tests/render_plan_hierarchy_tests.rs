use chart_plan::api::{ChartSpecBuilder, build_render_plan};
use chart_plan::core::{ChartKind, ChartSpec, PlanDiagnostic, Record, TreeOrient, palette_color};
use chart_plan::render::{LabelPosition, SeriesData, SeriesLayout, TreeNode, VisualType};
use serde_json::json;

fn rows(value: serde_json::Value) -> Vec<Record> {
    serde_json::from_value(value).expect("rows fixture")
}

fn org_chart() -> serde_json::Value {
    json!({
        "name": "Company",
        "children": [
            { "name": "Sales", "value": 40, "children": [
                { "name": "EMEA", "value": 25 },
                { "name": "APAC", "value": 15 }
            ] },
            { "name": "R&D", "value": "60" },
            "not a node"
        ]
    })
}

fn tree(data: &SeriesData) -> &[TreeNode] {
    match data {
        SeriesData::Tree(nodes) => nodes.as_slice(),
        other => panic!("expected tree data, got {other:?}"),
    }
}

fn spec_for(kind: ChartKind) -> ChartSpec {
    ChartSpecBuilder::new(kind)
        .with_hierarchy(org_chart())
        .build()
        .expect("valid spec")
}

#[test]
fn tree_keeps_whole_hierarchy_under_root() {
    let mut spec = spec_for(ChartKind::Tree);
    spec.tree_orient = TreeOrient::LeftToRight;

    let plan = build_render_plan(&[], &spec).expect("plan");

    let series = &plan.series[0];
    assert_eq!(series.visual, VisualType::Tree);
    assert_eq!(series.name, "Company");
    assert_eq!(series.label.position, LabelPosition::Right);
    let roots = tree(&series.data);
    assert_eq!(roots.len(), 1);
    // Non-object children are skipped.
    assert_eq!(roots[0].children.len(), 2);
    assert_eq!(roots[0].children[1].value, Some(60.0));
    assert_eq!(roots[0].children[0].children[1].name, "APAC");
    assert!(plan.legend.is_none());
    assert!(plan.grid.is_none());
    assert!(plan.diagnostics.is_empty());
}

#[test]
fn radial_tree_labels_on_top() {
    let plan = build_render_plan(&[], &spec_for(ChartKind::RadialTree)).expect("plan");

    let series = &plan.series[0];
    assert_eq!(series.label.position, LabelPosition::Top);
    assert!(matches!(
        series.layout,
        SeriesLayout::Tree { radial: true, .. }
    ));
}

#[test]
fn treemap_colors_first_level_blocks() {
    let plan = build_render_plan(&[], &spec_for(ChartKind::Treemap)).expect("plan");

    let series = &plan.series[0];
    assert_eq!(series.visual, VisualType::Treemap);
    let roots = tree(&series.data);
    assert_eq!(roots[0].color, None);
    assert_eq!(roots[0].children[0].color, Some(palette_color(0, "default")));
    assert_eq!(roots[0].children[1].color, Some(palette_color(1, "default")));
    assert_eq!(roots[0].children[0].children[0].color, None);
}

#[test]
fn sunburst_starts_at_root_children_with_depth_shifted_colors() {
    let plan = build_render_plan(&[], &spec_for(ChartKind::Sunburst)).expect("plan");

    let series = &plan.series[0];
    assert_eq!(series.visual, VisualType::Sunburst);
    let rings = tree(&series.data);
    let names: Vec<&str> = rings.iter().map(|node| node.name.as_str()).collect();
    assert_eq!(names, vec!["Sales", "R&D"]);
    assert_eq!(rings[0].color, Some(palette_color(1, "default")));
    assert_eq!(rings[1].color, Some(palette_color(2, "default")));
    assert_eq!(
        rings[0].children[1].color,
        Some(palette_color(3, "default"))
    );
}

#[test]
fn first_row_is_used_when_spec_has_no_payload() {
    let data = rows(json!([
        { "name": "Root", "children": [{ "name": "Leaf", "value": 1 }] }
    ]));
    let plan = build_render_plan(&data, &ChartSpec::new("tree")).expect("plan");

    let roots = tree(&plan.series[0].data);
    assert_eq!(roots[0].name, "Root");
    assert_eq!(roots[0].children[0].name, "Leaf");
}

#[test]
fn nested_object_cell_is_found_in_first_row() {
    let data = rows(json!([
        { "id": 7, "payload": { "name": "Nested", "children": [] } }
    ]));
    let plan = build_render_plan(&data, &ChartSpec::new("treemap")).expect("plan");

    assert_eq!(plan.series[0].name, "Nested");
}

#[test]
fn missing_hierarchy_degrades_to_empty_tree() {
    let data = rows(json!([{ "x": 1 }]));
    let plan = build_render_plan(&data, &ChartSpec::new("sunburst")).expect("plan");

    assert_eq!(plan.series.len(), 1);
    assert_eq!(plan.series[0].name, "Hierarchy");
    assert!(plan.is_empty());
    assert!(plan.diagnostics.contains(&PlanDiagnostic::MissingBinding {
        binding: "hierarchy".to_owned(),
    }));
}
