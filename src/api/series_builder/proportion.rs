use std::cmp::Ordering;

use crate::api::plan_context::PlanContext;
use crate::core::reshape::ProportionData;
use crate::core::{ChartKind, Diagnostics};
use crate::render::{
    EmphasisPolicy, LabelContent, LabelPolicy, LabelPosition, NamedValue, SeriesData,
    SeriesDescriptor, SeriesLayout, VisualType,
};

use super::placement;

/// Builds pie-family and funnel descriptors.
///
/// Pie labels: names and values at the same position merge into one
/// `name: value` descriptor; otherwise a name descriptor and a silent percent
/// overlay are emitted (only those enabled); with neither, one unlabeled
/// descriptor.
#[must_use]
pub fn build_proportion_series(
    data: &ProportionData,
    ctx: &PlanContext<'_>,
    _diagnostics: &mut Diagnostics,
) -> Vec<SeriesDescriptor> {
    let name = series_name(ctx);
    if ctx.kind == ChartKind::Funnel {
        return vec![funnel(data, ctx, name)];
    }

    let spec = ctx.spec;
    let slices = slice_points(data, ctx);
    let layout = pie_layout(ctx.kind);
    let descriptor = |label: LabelPolicy| {
        SeriesDescriptor::new(
            VisualType::Pie,
            name.clone(),
            SeriesData::Named(slices.clone()),
            layout.clone(),
        )
        .with_label(label)
        .with_emphasis(EmphasisPolicy::Shadow)
    };

    let name_position = placement(spec.label_name_position);
    let value_position = placement(spec.label_value_position);

    if spec.show_labels && spec.show_values && name_position == value_position {
        return vec![descriptor(LabelPolicy::shown(
            LabelContent::NameAndValue,
            name_position,
            spec.number_format,
        ))];
    }

    let mut out = Vec::with_capacity(2);
    if spec.show_labels {
        out.push(descriptor(LabelPolicy::shown(
            LabelContent::Name,
            name_position,
            spec.number_format,
        )));
    }
    if spec.show_values {
        let mut overlay = descriptor(LabelPolicy::shown(
            LabelContent::Percent,
            value_position,
            spec.number_format,
        ));
        overlay.silent = spec.show_labels;
        out.push(overlay);
    }
    if out.is_empty() {
        out.push(descriptor(LabelPolicy::hidden()));
    }
    out
}

fn series_name(ctx: &PlanContext<'_>) -> String {
    ctx.spec
        .visible_series()
        .next()
        .map(|binding| binding.display_name().to_owned())
        .unwrap_or_else(|| ctx.kind.id().to_owned())
}

fn slice_points(data: &ProportionData, ctx: &PlanContext<'_>) -> Vec<NamedValue> {
    data.slices
        .iter()
        .enumerate()
        .map(|(index, slice)| NamedValue {
            name: slice.name.clone(),
            value: slice.value,
            color: Some(ctx.palette.color(index)),
        })
        .collect()
}

fn pie_layout(kind: ChartKind) -> SeriesLayout {
    let donut = matches!(kind, ChartKind::Donut | ChartKind::HalfDonut);
    let half = kind == ChartKind::HalfDonut;
    SeriesLayout::Pie {
        inner_radius_pct: if donut { 45.0 } else { 0.0 },
        outer_radius_pct: 70.0,
        center_y_pct: if half { 70.0 } else { 50.0 },
        start_angle: half.then_some(180.0),
        end_angle: half.then_some(360.0),
        rose: kind == ChartKind::Nightingale,
    }
}

/// Funnel stages sorted by descending value, missing values last.
fn funnel(data: &ProportionData, ctx: &PlanContext<'_>, name: String) -> SeriesDescriptor {
    let mut stages = slice_points(data, ctx);
    stages.sort_by(|a, b| match (a.value, b.value) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let content = if ctx.spec.show_values {
        LabelContent::NameAndValue
    } else {
        LabelContent::Name
    };
    SeriesDescriptor::new(
        VisualType::Funnel,
        name,
        SeriesData::Named(stages),
        SeriesLayout::Funnel { descending: true },
    )
    .with_label(LabelPolicy::shown(
        content,
        LabelPosition::Inside,
        ctx.spec.number_format,
    ))
    .with_emphasis(EmphasisPolicy::Scale)
}
