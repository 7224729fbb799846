use crate::api::plan_context::PlanContext;
use crate::core::Diagnostics;
use crate::core::reshape::MatrixData;
use crate::render::{
    EmphasisPolicy, HeatmapCoordinate, LabelContent, LabelPolicy, LabelPosition, MatrixPoint,
    SeriesData, SeriesDescriptor, SeriesLayout, VisualType,
};

#[must_use]
pub fn build_matrix_series(
    data: &MatrixData,
    ctx: &PlanContext<'_>,
    _diagnostics: &mut Diagnostics,
) -> Vec<SeriesDescriptor> {
    let cells = data
        .cells
        .iter()
        .map(|cell| MatrixPoint {
            x: cell.x,
            y: cell.y,
            value: cell.value,
        })
        .collect();
    let name = ctx
        .spec
        .matrix
        .as_ref()
        .and_then(|binding| binding.value_field.clone())
        .unwrap_or_else(|| "Matrix".to_owned());

    vec![
        SeriesDescriptor::new(
            VisualType::Heatmap,
            name,
            SeriesData::Cells(cells),
            SeriesLayout::Heatmap {
                coordinate: HeatmapCoordinate::Cartesian,
            },
        )
        .with_label(LabelPolicy::shown(
            LabelContent::Value,
            LabelPosition::Inside,
            ctx.spec.number_format,
        ))
        .with_emphasis(EmphasisPolicy::Shadow),
    ]
}
