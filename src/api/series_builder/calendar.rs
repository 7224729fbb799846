use crate::api::plan_context::PlanContext;
use crate::core::Diagnostics;
use crate::core::reshape::CalendarData;
use crate::render::{
    DatedValue, EmphasisPolicy, HeatmapCoordinate, SeriesData, SeriesDescriptor, SeriesLayout,
    VisualType,
};

#[must_use]
pub fn build_calendar_series(
    data: &CalendarData,
    ctx: &PlanContext<'_>,
    _diagnostics: &mut Diagnostics,
) -> Vec<SeriesDescriptor> {
    let days = data
        .entries
        .iter()
        .map(|entry| DatedValue {
            date: entry.date.clone(),
            value: entry.value,
        })
        .collect();

    vec![
        SeriesDescriptor::new(
            VisualType::Heatmap,
            "Activity",
            SeriesData::Dated(days),
            SeriesLayout::Heatmap {
                coordinate: HeatmapCoordinate::Calendar,
            },
        )
        .with_color(ctx.palette.color(0))
        .with_emphasis(EmphasisPolicy::Shadow),
    ]
}
