use crate::api::registry::kind_of;
use crate::core::{ChartKind, ChartSpec, GaugeOptions};
use crate::error::{ChartError, ChartResult};

pub(super) fn validate_chart_spec(spec: &ChartSpec) -> ChartResult<ChartKind> {
    let kind = kind_of(&spec.chart_type)?;
    validate_y_axis_range(spec.y_axis_min, spec.y_axis_max)?;
    if let Some(goal) = spec.goal_value {
        if !goal.is_finite() {
            return Err(ChartError::InvalidSpec(
                "goal value must be finite".to_owned(),
            ));
        }
    }
    validate_gauge_options(spec.gauge)?;
    Ok(kind)
}

pub(super) fn validate_y_axis_range(min: Option<f64>, max: Option<f64>) -> ChartResult<()> {
    for (edge, value) in [("min", min), ("max", max)] {
        if value.is_some_and(|value| !value.is_finite()) {
            return Err(ChartError::InvalidSpec(format!(
                "y-axis {edge} must be finite"
            )));
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ChartError::InvalidSpec(
                "y-axis min must be <= y-axis max".to_owned(),
            ));
        }
    }
    Ok(())
}

pub(super) fn validate_gauge_options(gauge: GaugeOptions) -> ChartResult<GaugeOptions> {
    if ![gauge.min, gauge.max, gauge.start_angle, gauge.end_angle]
        .iter()
        .all(|value| value.is_finite())
    {
        return Err(ChartError::InvalidSpec(
            "gauge range and angles must be finite".to_owned(),
        ));
    }
    if gauge.min >= gauge.max {
        return Err(ChartError::InvalidSpec(
            "gauge min must be < gauge max".to_owned(),
        ));
    }
    if gauge.split_number == 0 {
        return Err(ChartError::InvalidSpec(
            "gauge split number must be > 0".to_owned(),
        ));
    }
    Ok(gauge)
}
