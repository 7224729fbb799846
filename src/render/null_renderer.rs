use crate::error::ChartResult;
use crate::render::{PlanRenderer, RenderPlan};

/// No-op renderer used by tests and headless tooling.
///
/// It still validates the plan so tests catch non-finite values or dangling
/// axis references before a real engine adapter sees them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub rendered_plans: usize,
    pub last_series_count: usize,
    pub last_point_count: usize,
}

impl PlanRenderer for NullRenderer {
    fn render(&mut self, plan: &RenderPlan) -> ChartResult<()> {
        plan.validate()?;
        self.rendered_plans += 1;
        self.last_series_count = plan.series.len();
        self.last_point_count = plan.series.iter().map(|series| series.data.len()).sum();
        Ok(())
    }
}
