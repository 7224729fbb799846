use crate::api::plan_context::PlanContext;
use crate::core::Diagnostics;
use crate::core::reshape::RadarData;
use crate::render::{
    EmphasisPolicy, LabelContent, LabelPolicy, LabelPosition, NamedVector, SeriesData,
    SeriesDescriptor, SeriesLayout, VisualType,
};

#[must_use]
pub fn build_radar_series(
    data: &RadarData,
    ctx: &PlanContext<'_>,
    _diagnostics: &mut Diagnostics,
) -> Vec<SeriesDescriptor> {
    let entries = data
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| NamedVector {
            name: entry.name.clone(),
            values: entry.values.clone(),
            color: Some(ctx.palette.color(index)),
        })
        .collect();

    let name = if ctx.spec.title.is_empty() {
        "Radar".to_owned()
    } else {
        ctx.spec.title.clone()
    };
    vec![
        SeriesDescriptor::new(
            VisualType::Radar,
            name,
            SeriesData::Vectors(entries),
            SeriesLayout::Radar,
        )
        .with_color(ctx.palette.color(0))
        .with_label(LabelPolicy::when(
            ctx.spec.show_values,
            LabelContent::Value,
            LabelPosition::Top,
            ctx.spec.number_format,
        ))
        .with_emphasis(EmphasisPolicy::FocusSeries),
    ]
}
