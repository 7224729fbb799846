use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown chart type: `{chart_type}`")]
    UnknownChartType { chart_type: String },

    #[error("invalid chart spec: {0}")]
    InvalidSpec(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    pub(crate) fn unknown_chart_type(chart_type: &str) -> Self {
        Self::UnknownChartType {
            chart_type: chart_type.to_owned(),
        }
    }
}
