use ordered_float::OrderedFloat;

use crate::core::reshape::{GeoData, MatrixData};
use crate::core::{Color, LegendPosition, Palette};
use crate::render::{VisualMapFragment, VisualPiece};

const MATRIX_RAMP: [Color; 4] = [
    Color::rgb(0xF0, 0xF9, 0xFF),
    Color::rgb(0xA6, 0xD9, 0x6A),
    Color::rgb(0xFD, 0xAE, 0x61),
    Color::rgb(0xD7, 0x19, 0x1C),
];

const CALENDAR_EMPTY: Color = Color::rgb(0xEB, 0xED, 0xF0);
const CALENDAR_LEGEND_TOP: f64 = 30.0;
const CALENDAR_LEGEND_BOTTOM: f64 = 20.0;

const GEO_DEFAULT_RANGE: (f64, f64) = (0.0, 100.0);

/// Continuous scale from zero to the largest cell value.
pub(super) fn matrix_scale(data: &MatrixData) -> VisualMapFragment {
    let max = data
        .cells
        .iter()
        .map(|cell| OrderedFloat(cell.value))
        .max()
        .map_or(0.0, OrderedFloat::into_inner);
    VisualMapFragment::Continuous {
        min: 0.0,
        max: max.max(0.0),
        in_range: MATRIX_RAMP.to_vec(),
        calculable: true,
    }
}

/// Five activity buckets shading from empty to the full base color.
///
/// The bucket legend follows the chart's legend position and is hidden for
/// `None`.
pub(super) fn calendar_pieces(base: Color, position: LegendPosition) -> VisualMapFragment {
    let bands: [(f64, f64, Color); 5] = [
        (0.0, 2.0, CALENDAR_EMPTY),
        (3.0, 4.0, base.with_alpha(0x40)),
        (5.0, 6.0, base.with_alpha(0x80)),
        (7.0, 8.0, base.with_alpha(0xB0)),
        (9.0, 10.0, base),
    ];
    VisualMapFragment::Piecewise {
        pieces: bands
            .into_iter()
            .map(|(min, max, color)| VisualPiece { min, max, color })
            .collect(),
        show: position != LegendPosition::None,
        anchor: position,
        edge_offset: match position {
            LegendPosition::Top => Some(CALENDAR_LEGEND_TOP),
            LegendPosition::Bottom => Some(CALENDAR_LEGEND_BOTTOM),
            LegendPosition::Left | LegendPosition::Right | LegendPosition::None => None,
        },
    }
}

/// Continuous scale over resolved region values, colored by the palette.
pub(super) fn geographic_scale(data: &GeoData, palette: Palette) -> VisualMapFragment {
    let values = data.points.iter().filter_map(|point| point.value);
    let min = values.clone().map(OrderedFloat).min();
    let max = values.map(OrderedFloat).max();

    let (min, max) = match (min, max) {
        (Some(min), Some(max)) if min == max => (min.0 - 1.0, max.0 + 1.0),
        (Some(min), Some(max)) => (min.0, max.0),
        _ => GEO_DEFAULT_RANGE,
    };
    VisualMapFragment::Continuous {
        min,
        max,
        in_range: palette.colors().to_vec(),
        calculable: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reshape::GeoPoint;

    fn geo(values: &[Option<f64>]) -> GeoData {
        GeoData {
            region: "indonesia".to_owned(),
            points: values
                .iter()
                .enumerate()
                .map(|(index, value)| GeoPoint {
                    name: format!("R{index}"),
                    value: *value,
                })
                .collect(),
            overlays: Vec::new(),
        }
    }

    #[test]
    fn geographic_scale_ignores_unresolved_regions() {
        let VisualMapFragment::Continuous { min, max, .. } =
            geographic_scale(&geo(&[Some(4.0), None, Some(9.0)]), Palette::Default)
        else {
            panic!("expected continuous scale");
        };
        assert_eq!((min, max), (4.0, 9.0));
    }

    #[test]
    fn geographic_scale_widens_single_value() {
        let VisualMapFragment::Continuous { min, max, .. } =
            geographic_scale(&geo(&[Some(5.0)]), Palette::Default)
        else {
            panic!("expected continuous scale");
        };
        assert_eq!((min, max), (4.0, 6.0));
    }

    #[test]
    fn geographic_scale_defaults_without_values() {
        let VisualMapFragment::Continuous { min, max, .. } =
            geographic_scale(&geo(&[None]), Palette::Default)
        else {
            panic!("expected continuous scale");
        };
        assert_eq!((min, max), GEO_DEFAULT_RANGE);
    }

    #[test]
    fn calendar_pieces_shade_base_color() {
        let base = Color::rgb(0x10, 0x20, 0x30);
        let VisualMapFragment::Piecewise { pieces, .. } =
            calendar_pieces(base, LegendPosition::Bottom)
        else {
            panic!("expected piecewise scale");
        };
        assert_eq!(pieces.len(), 5);
        assert_eq!(pieces[0].color, CALENDAR_EMPTY);
        assert_eq!(pieces[1].color.alpha, 0x40);
        assert_eq!(pieces[4].color, base);
    }

    #[test]
    fn calendar_pieces_anchor_follows_legend_position() {
        let base = Color::rgb(0x10, 0x20, 0x30);
        let anchor = |position| match calendar_pieces(base, position) {
            VisualMapFragment::Piecewise {
                show, edge_offset, ..
            } => (show, edge_offset),
            VisualMapFragment::Continuous { .. } => panic!("expected piecewise scale"),
        };
        assert_eq!(anchor(LegendPosition::Top), (true, Some(CALENDAR_LEGEND_TOP)));
        assert_eq!(anchor(LegendPosition::Bottom), (true, Some(CALENDAR_LEGEND_BOTTOM)));
        assert_eq!(anchor(LegendPosition::Right), (true, None));
        assert_eq!(anchor(LegendPosition::None), (false, None));
    }
}
