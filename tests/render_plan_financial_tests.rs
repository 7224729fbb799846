use chart_plan::api::build_render_plan;
use chart_plan::core::{CandlestickBinding, ChartSpec, PlanDiagnostic, Record, SeriesBinding};
use chart_plan::render::{AxisPointer, SeriesData, TooltipTrigger, VisualType};
use serde_json::json;

fn rows(value: serde_json::Value) -> Vec<Record> {
    serde_json::from_value(value).expect("rows fixture")
}

fn ohlc(series: &SeriesData) -> &[Option<[f64; 4]>] {
    match series {
        SeriesData::Ohlc(bars) => bars,
        other => panic!("expected ohlc bars, got {other:?}"),
    }
}

fn two_ticker_rows() -> Vec<Record> {
    rows(json!([
        {
            "date": "2024-03-01T00:00:00Z",
            "AAPL_open": 10, "AAPL_close": 12, "AAPL_low": 9, "AAPL_high": 13,
            "MSFT_open": 20, "MSFT_close": 19, "MSFT_low": 18, "MSFT_high": 21
        },
        {
            "date": "2024/03/04",
            "AAPL_open": 12, "AAPL_close": 11, "AAPL_low": 10, "AAPL_high": 12.5,
            "MSFT_open": 19, "MSFT_close": null, "MSFT_low": 18, "MSFT_high": 20
        }
    ]))
}

fn ticker_bindings(count: usize) -> Vec<SeriesBinding> {
    ["AAPL", "MSFT"]
        .iter()
        .flat_map(|ticker| {
            ["open", "close", "low", "high"]
                .iter()
                .map(move |part| SeriesBinding::new(format!("{ticker}_{part}"), ""))
        })
        .take(count)
        .collect()
}

#[test]
fn eight_bindings_form_two_named_groups() {
    let mut spec = ChartSpec::new("candlestick");
    spec.x_axis_field = Some("date".to_owned());
    spec.series = ticker_bindings(8);

    let plan = build_render_plan(&two_ticker_rows(), &spec).expect("plan");

    assert_eq!(plan.series.len(), 2);
    assert_eq!(plan.series[0].name, "AAPL");
    assert_eq!(plan.series[1].name, "MSFT");
    assert!(
        plan.series
            .iter()
            .all(|series| series.visual == VisualType::Candlestick)
    );
    assert_eq!(
        ohlc(&plan.series[0].data)[0],
        Some([10.0, 12.0, 9.0, 13.0])
    );
    // One missing quote drops the whole candle.
    assert_eq!(ohlc(&plan.series[1].data)[1], None);
    assert_eq!(
        plan.legend.as_ref().expect("legend").entries,
        vec!["AAPL", "MSFT"]
    );
}

#[test]
fn trailing_incomplete_chunk_is_discarded() {
    let mut spec = ChartSpec::new("candlestick");
    spec.x_axis_field = Some("date".to_owned());
    spec.series = ticker_bindings(7);

    let plan = build_render_plan(&two_ticker_rows(), &spec).expect("plan");

    assert_eq!(plan.series.len(), 1);
    assert_eq!(plan.series[0].name, "AAPL");
}

#[test]
fn date_categories_are_normalized_and_axis_is_financial() {
    let mut spec = ChartSpec::new("candlestick");
    spec.x_axis_field = Some("date".to_owned());
    spec.series = ticker_bindings(4);

    let plan = build_render_plan(&two_ticker_rows(), &spec).expect("plan");

    let axes = plan.axes.as_ref().expect("axes");
    assert_eq!(axes.x.categories, vec!["2024-03-01", "2024-03-04"]);
    assert!((axes.x.label_rotate - 45.0).abs() <= 1e-9);
    assert_eq!(axes.y[0].name.as_deref(), Some("Price ($)"));
    assert!(axes.y[0].scale_to_data);

    let tooltip = plan.tooltip.expect("tooltip");
    assert_eq!(tooltip.trigger, TooltipTrigger::Axis);
    assert_eq!(tooltip.axis_pointer, Some(AxisPointer::Cross));
    assert_eq!(plan.data_zoom.len(), 2);
}

#[test]
fn explicit_binding_wins_over_series_list() {
    let data = rows(json!([
        { "day": "2024-01-02", "o": 1, "c": 2, "l": 0.5, "h": 2.5 }
    ]));
    let mut spec = ChartSpec::new("candlestick");
    spec.x_axis_field = Some("day".to_owned());
    spec.series = ticker_bindings(8);
    spec.candlestick = Some(CandlestickBinding {
        open: Some("o".to_owned()),
        close: Some("c".to_owned()),
        low: Some("l".to_owned()),
        high: Some("h".to_owned()),
        name: None,
    });

    let plan = build_render_plan(&data, &spec).expect("plan");

    assert_eq!(plan.series.len(), 1);
    assert_eq!(plan.series[0].name, "Price");
    assert_eq!(ohlc(&plan.series[0].data), &[Some([1.0, 2.0, 0.5, 2.5])]);
}

#[test]
fn columns_are_detected_by_name_when_unbound() {
    let data = rows(json!([
        { "Date": "2024-01-02", "High Price": 5, "Low Price": 1, "Open Price": 2, "Close Price": 4 }
    ]));
    let mut spec = ChartSpec::new("candlestick");
    spec.x_axis_field = Some("Date".to_owned());
    spec.y_axis_title = Some("USD".to_owned());

    let plan = build_render_plan(&data, &spec).expect("plan");

    assert_eq!(plan.series.len(), 1);
    assert_eq!(plan.series[0].name, "Price");
    assert_eq!(ohlc(&plan.series[0].data), &[Some([2.0, 4.0, 1.0, 5.0])]);
    assert_eq!(
        plan.axes.as_ref().expect("axes").y[0].name.as_deref(),
        Some("USD")
    );
}

#[test]
fn undetectable_columns_degrade_to_empty_plan() {
    let data = rows(json!([{ "date": "2024-01-02", "price": 3 }]));
    let mut spec = ChartSpec::new("candlestick");
    spec.x_axis_field = Some("date".to_owned());

    let plan = build_render_plan(&data, &spec).expect("plan");

    assert!(plan.series.is_empty());
    assert!(plan.diagnostics.contains(&PlanDiagnostic::MissingBinding {
        binding: "open/close/low/high".to_owned(),
    }));
}
