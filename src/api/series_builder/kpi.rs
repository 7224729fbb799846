use crate::api::plan_context::PlanContext;
use crate::core::reshape::KpiData;
use crate::core::{ChartKind, Diagnostics, NumberFormat};
use crate::render::{
    LabelContent, LabelPolicy, LabelPosition, NamedValue, SeriesData, SeriesDescriptor,
    SeriesLayout, VisualType,
};

/// Gauge dial or big-number text; both carry exactly one point.
#[must_use]
pub fn build_kpi_series(
    data: &KpiData,
    ctx: &PlanContext<'_>,
    _diagnostics: &mut Diagnostics,
) -> Vec<SeriesDescriptor> {
    let point = SeriesData::Named(vec![NamedValue {
        name: data.label.clone(),
        value: Some(data.value),
        color: None,
    }]);
    let color = ctx.palette.color(0);

    let descriptor = if ctx.kind == ChartKind::Number {
        // Big numbers read best abbreviated unless a format was chosen.
        let format = match ctx.spec.number_format {
            NumberFormat::Default => NumberFormat::Compact,
            chosen => chosen,
        };
        SeriesDescriptor::new(
            VisualType::KpiText,
            data.label.clone(),
            point,
            SeriesLayout::KpiText {
                text: format.format(Some(data.value)),
                caption: data.label.clone(),
            },
        )
        .with_label(LabelPolicy::shown(LabelContent::Value, LabelPosition::Inside, format))
    } else {
        let gauge = ctx.spec.gauge;
        SeriesDescriptor::new(
            VisualType::Gauge,
            data.label.clone(),
            point,
            SeriesLayout::Gauge {
                min: gauge.min,
                max: gauge.max,
                start_angle: gauge.start_angle,
                end_angle: gauge.end_angle,
                split_number: gauge.split_number,
                speedometer: ctx.kind == ChartKind::GaugeSpeed,
            },
        )
        .with_label(LabelPolicy::shown(
            LabelContent::Value,
            LabelPosition::Bottom,
            ctx.spec.number_format,
        ))
    };
    vec![descriptor.with_color(color)]
}
