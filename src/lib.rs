//! chart-plan: rows plus a declarative chart spec into an engine-agnostic
//! render plan.
//!
//! The crate keeps a strict split: `core` owns the data model, palettes,
//! number formats and the per-category reshape algorithms; `render` owns the
//! plan types a charting engine consumes; `api` wires registry lookup,
//! series building and option composition into [`build_render_plan`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartSpecBuilder, SavedChartDesign, build_render_plan};
pub use core::{Category, ChartKind, ChartSpec, Record};
pub use error::{ChartError, ChartResult};
pub use render::RenderPlan;
