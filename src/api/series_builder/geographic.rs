use crate::api::plan_context::PlanContext;
use crate::core::reshape::GeoData;
use crate::core::{Color, Diagnostics};
use crate::render::{
    EmphasisPolicy, LabelContent, LabelPolicy, LabelPosition, NamedValue, SeriesData,
    SeriesDescriptor, SeriesLayout, VisualType,
};

const AREA_COLOR: Color = Color::rgb(0xCC, 0xCC, 0xCC);
const OVERLAY_RADIUS_PCT: f64 = 8.0;

/// Base choropleth plus, for map-pie charts, one small pie per region.
#[must_use]
pub fn build_geographic_series(
    data: &GeoData,
    ctx: &PlanContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Vec<SeriesDescriptor> {
    let name = ctx
        .spec
        .visible_series()
        .next()
        .map(|binding| binding.display_name().to_owned())
        .unwrap_or_else(|| "Value".to_owned());

    let points = data
        .points
        .iter()
        .map(|point| NamedValue {
            name: point.name.clone(),
            value: point.value,
            color: None,
        })
        .collect();

    let mut out = vec![
        SeriesDescriptor::new(
            VisualType::Map,
            name,
            SeriesData::Named(points),
            SeriesLayout::Map {
                region: data.region.clone(),
                area_color: AREA_COLOR,
            },
        )
        .with_label(LabelPolicy::when(
            ctx.spec.show_labels,
            LabelContent::Name,
            LabelPosition::Inside,
            ctx.spec.number_format,
        ))
        .with_emphasis(EmphasisPolicy::Shadow),
    ];

    if data.overlays.is_empty() {
        return out;
    }

    let overlay_colors: Vec<Color> = data
        .overlays
        .iter()
        .map(|overlay| {
            ctx.series_color(
                overlay.ordinal,
                overlay.color_override.as_deref(),
                &overlay.name,
                diagnostics,
            )
        })
        .collect();

    for (index, region) in data.points.iter().enumerate() {
        let slices = data
            .overlays
            .iter()
            .zip(&overlay_colors)
            .map(|(overlay, color)| NamedValue {
                name: overlay.name.clone(),
                value: overlay.points.get(index).and_then(|point| point.value),
                color: Some(*color),
            })
            .collect();
        let pie = SeriesDescriptor::new(
            VisualType::Pie,
            region.name.clone(),
            SeriesData::Named(slices),
            SeriesLayout::Pie {
                inner_radius_pct: 0.0,
                outer_radius_pct: OVERLAY_RADIUS_PCT,
                center_y_pct: 50.0,
                start_angle: None,
                end_angle: None,
                rose: false,
            },
        )
        .with_emphasis(EmphasisPolicy::Scale);
        out.push(pie);
    }
    out
}
