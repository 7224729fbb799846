use chart_plan::api::build_render_plan;
use chart_plan::core::{ChartSpec, Record, SeriesBinding};
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

fn sales_rows(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let mut row = Record::new();
            row.insert("month".to_owned(), json!(format!("M{i:05}")));
            row.insert("sales".to_owned(), json!(100.0 + (i % 37) as f64 * 3.5));
            row.insert("profit".to_owned(), json!(format!("{}", 10 + i % 11)));
            row.insert("cost".to_owned(), json!(50.0 + (i % 13) as f64));
            row
        })
        .collect()
}

fn axis_spec(chart_type: &str) -> ChartSpec {
    let mut spec = ChartSpec::new(chart_type);
    spec.title = "Monthly".to_owned();
    spec.x_axis_field = Some("month".to_owned());
    spec.series = vec![
        SeriesBinding::new("sales", "Sales"),
        SeriesBinding::new("profit", "Profit"),
        SeriesBinding::new("cost", "Cost"),
    ];
    spec.goal_value = Some(150.0);
    spec
}

fn bench_bar_plan_10k(c: &mut Criterion) {
    let rows = sales_rows(10_000);
    let spec = axis_spec("bar");

    c.bench_function("bar_plan_10k", |b| {
        b.iter(|| {
            let _ = build_render_plan(black_box(&rows), black_box(&spec))
                .expect("plan should build");
        })
    });
}

fn bench_matrix_plan_10k(c: &mut Criterion) {
    let rows: Vec<Record> = (0..10_000)
        .map(|i| {
            let mut row = Record::new();
            row.insert("day".to_owned(), json!(format!("D{}", i % 7)));
            row.insert("hour".to_owned(), json!(format!("H{:02}", i % 24)));
            row.insert("load".to_owned(), json!((i % 97) as f64));
            row
        })
        .collect();
    let spec: ChartSpec = serde_json::from_value(json!({
        "chartType": "matrix",
        "matrix": { "xField": "day", "yField": "hour", "valueField": "load" }
    }))
    .expect("valid spec");

    c.bench_function("matrix_plan_10k", |b| {
        b.iter(|| {
            let _ = build_render_plan(black_box(&rows), black_box(&spec))
                .expect("plan should build");
        })
    });
}

fn bench_plan_contract_json_2k(c: &mut Criterion) {
    let rows = sales_rows(2_000);
    let spec = axis_spec("combo");
    let plan = build_render_plan(&rows, &spec).expect("plan should build");

    c.bench_function("plan_contract_json_2k", |b| {
        b.iter(|| {
            let _ = black_box(&plan)
                .to_json_contract_v1_pretty()
                .expect("serialize contract");
        })
    });
}

criterion_group!(
    benches,
    bench_bar_plan_10k,
    bench_matrix_plan_10k,
    bench_plan_contract_json_2k
);
criterion_main!(benches);
