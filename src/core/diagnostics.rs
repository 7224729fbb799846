use serde::{Deserialize, Serialize};
use tracing::warn;

/// Degradation note attached to a plan.
///
/// Diagnostics never abort a build; they explain why part of the plan is
/// empty, zeroed or null so the caller can surface a configuration hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanDiagnostic {
    /// A field the category needs is unbound or absent from every row.
    MissingBinding { binding: String },
    /// `rows` cells of `field` were present but not numeric.
    NonNumericValue { field: String, rows: usize },
    /// Aggregating `field` overflowed to a non-finite total; the value was dropped.
    NonFiniteAggregate { field: String },
    /// A geographic name matched no known boundary after correction.
    UnresolvedGeographicName { name: String },
    /// A series color override was not a hex color; the palette color was used.
    InvalidColorOverride { series: String, color: String },
}

/// Ordered sink for diagnostics produced while building one plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<PlanDiagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_binding(&mut self, binding: impl Into<String>) {
        let binding = binding.into();
        warn!(binding = %binding, "chart binding missing; degrading to empty data");
        self.push(PlanDiagnostic::MissingBinding { binding });
    }

    pub fn non_numeric(&mut self, field: impl Into<String>, rows: usize) {
        if rows == 0 {
            return;
        }
        let field = field.into();
        warn!(field = %field, rows, "non-numeric cells coerced");
        self.push(PlanDiagnostic::NonNumericValue { field, rows });
    }

    pub fn non_finite(&mut self, field: impl Into<String>) {
        let field = field.into();
        warn!(field = %field, "aggregate overflowed; dropping value");
        self.push(PlanDiagnostic::NonFiniteAggregate { field });
    }

    pub fn unresolved_name(&mut self, name: impl Into<String>) {
        self.push(PlanDiagnostic::UnresolvedGeographicName { name: name.into() });
    }

    pub fn invalid_color(&mut self, series: impl Into<String>, color: impl Into<String>) {
        let series = series.into();
        let color = color.into();
        warn!(series = %series, color = %color, "ignoring invalid series color override");
        self.push(PlanDiagnostic::InvalidColorOverride { series, color });
    }

    /// Appends unless an identical entry was already recorded.
    pub fn push(&mut self, diagnostic: PlanDiagnostic) {
        if !self.entries.contains(&diagnostic) {
            self.entries.push(diagnostic);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[PlanDiagnostic] {
        &self.entries
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<PlanDiagnostic> {
        self.entries
    }
}
