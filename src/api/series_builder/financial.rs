use crate::api::plan_context::PlanContext;
use crate::core::reshape::FinancialData;
use crate::core::{Color, Diagnostics};
use crate::render::{EmphasisPolicy, SeriesData, SeriesDescriptor, SeriesLayout, VisualType};

const DOWN_COLOR: Color = Color::rgb(0xEF, 0x8C, 0x8C);

/// One candlestick descriptor per OHLC group; rising candles take the group color.
#[must_use]
pub fn build_financial_series(
    data: &FinancialData,
    ctx: &PlanContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Vec<SeriesDescriptor> {
    data.groups
        .iter()
        .map(|group| {
            let color = ctx.series_color(
                group.ordinal,
                group.color_override.as_deref(),
                &group.name,
                diagnostics,
            );
            SeriesDescriptor::new(
                VisualType::Candlestick,
                group.name.clone(),
                SeriesData::Ohlc(group.bars.clone()),
                SeriesLayout::Candlestick {
                    down_color: DOWN_COLOR,
                },
            )
            .with_color(color)
            .with_emphasis(EmphasisPolicy::FocusSeries)
        })
        .collect()
}
