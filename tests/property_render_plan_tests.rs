use chart_plan::api::build_render_plan;
use chart_plan::core::{ChartKind, ChartSpec, Record, SeriesBinding};
use chart_plan::render::{NullRenderer, PlanRenderer, SeriesData};
use proptest::prelude::*;
use serde_json::{Value, json};

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-1_000_000i64..1_000_000).prop_map(|v| json!(v)),
        (-1.0e6f64..1.0e6).prop_map(|v| json!(v)),
        "[a-z0-9,.]{0,6}".prop_map(Value::String),
        Just(Value::Null),
    ]
}

fn table(min_rows: usize, max_rows: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (
            "[A-D]{1,2}",
            "[A-D]{1,2}",
            cell(),
            cell(),
            (-500.0f64..500.0),
        ),
        min_rows..max_rows,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(source, target, a, b, value)| {
                let mut row = Record::new();
                row.insert("source".to_owned(), json!(source));
                row.insert("target".to_owned(), json!(target));
                row.insert("a".to_owned(), a);
                row.insert("b".to_owned(), b);
                row.insert("value".to_owned(), json!(value));
                row
            })
            .collect()
    })
}

fn spec_for(kind: ChartKind) -> ChartSpec {
    let mut spec = ChartSpec::new(kind.id());
    spec.x_axis_field = Some("source".to_owned());
    spec.series = vec![SeriesBinding::new("a", "A"), SeriesBinding::new("b", "B")];
    spec.show_labels = true;
    spec.show_values = true;
    spec.goal_value = Some(10.0);
    spec
}

proptest! {
    #[test]
    fn plans_are_deterministic_and_valid_for_every_kind(
        rows in table(0, 24),
        kind_index in 0usize..ChartKind::ALL.len()
    ) {
        let kind = ChartKind::ALL[kind_index];
        let spec = spec_for(kind);

        let first = build_render_plan(&rows, &spec).expect("plan");
        let second = build_render_plan(&rows, &spec).expect("plan");
        prop_assert_eq!(&first, &second);

        let mut renderer = NullRenderer::default();
        prop_assert!(renderer.render(&first).is_ok());
        prop_assert_eq!(first.chart_type, kind);
    }

    #[test]
    fn axis_series_always_span_every_row(
        rows in table(0, 40),
        kind_index in 0usize..5
    ) {
        let kind = ChartKind::ALL[kind_index];
        let plan = build_render_plan(&rows, &spec_for(kind)).expect("plan");

        prop_assert_eq!(plan.series.len(), 2);
        for series in &plan.series {
            prop_assert_eq!(series.data.len(), rows.len());
        }
        let axes = plan.axes.as_ref().expect("axes");
        let categories = if kind == ChartKind::Row { &axes.y[0].categories } else { &axes.x.categories };
        prop_assert_eq!(categories.len(), rows.len());
    }

    #[test]
    fn collapsed_slices_equal_column_sums(rows in table(1, 30)) {
        let mut spec = ChartSpec::new("pie");
        spec.series = vec![SeriesBinding::new("value", "Value"), SeriesBinding::new("a", "A")];

        let plan = build_render_plan(&rows, &spec).expect("plan");

        let SeriesData::Named(slices) = &plan.series[0].data else {
            panic!("expected named slices");
        };
        let expected: f64 = rows
            .iter()
            .filter_map(|row| row.get("value").and_then(Value::as_f64))
            .sum();
        let total = slices[0].value.expect("sum");
        prop_assert!((total - expected).abs() <= 1e-6 * expected.abs().max(1.0));
    }

    #[test]
    fn graph_degrees_count_link_endpoints(rows in table(1, 30)) {
        let plan = build_render_plan(&rows, &ChartSpec::new("graph")).expect("plan");

        let SeriesData::Graph { nodes, links } = &plan.series[0].data else {
            panic!("expected graph data");
        };
        prop_assert_eq!(links.len(), rows.len());
        let total_degree: f64 = nodes.iter().map(|node| node.value).sum();
        prop_assert!((total_degree - 2.0 * links.len() as f64).abs() <= 1e-9);
        for node in nodes {
            prop_assert!((node.symbol_size - (10.0 + 2.0 * node.value)).abs() <= 1e-9);
        }
    }

    #[test]
    fn radar_indicator_max_covers_numeric_cells(rows in table(0, 30)) {
        let mut spec = ChartSpec::new("radar");
        spec.series = vec![SeriesBinding::new("value", "Value")];

        let plan = build_render_plan(&rows, &spec).expect("plan");

        let radar = plan.radar.as_ref().expect("radar");
        let observed = rows
            .iter()
            .filter_map(|row| row.get("value").and_then(Value::as_f64))
            .fold(f64::NEG_INFINITY, f64::max);
        let max = radar.indicators[0].max;
        prop_assert!(max > 0.0);
        prop_assert!(max >= observed);
        prop_assert!((max - max.round()).abs() <= 1e-9);
    }
}
