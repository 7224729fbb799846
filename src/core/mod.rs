pub mod chart_kind;
pub mod color;
pub mod diagnostics;
pub mod number_format;
pub mod palette;
pub mod primitives;
pub mod reshape;
pub mod spec;
pub mod types;

pub use chart_kind::{Category, ChartKind};
pub use color::Color;
pub use diagnostics::{Diagnostics, PlanDiagnostic};
pub use number_format::NumberFormat;
pub use palette::{Palette, palette_color};
pub use spec::{
    AxisScale, CalendarBinding, CandlestickBinding, ChartSpec, GaugeOptions, KpiAggregation,
    KpiBinding, LabelPlacement, LegendPosition, MapBinding, MatrixBinding, SankeyOrient,
    SeriesBinding, StackingMode, TreeOrient,
};
pub use types::Record;
