use crate::core::{ChartKind, ChartSpec, Color, Diagnostics, Palette};

/// Resolved inputs shared by series builders and the option composer.
#[derive(Debug, Clone, Copy)]
pub struct PlanContext<'a> {
    pub spec: &'a ChartSpec,
    pub kind: ChartKind,
    pub palette: Palette,
}

impl<'a> PlanContext<'a> {
    #[must_use]
    pub fn new(spec: &'a ChartSpec, kind: ChartKind) -> Self {
        Self {
            spec,
            kind,
            palette: Palette::from_name(&spec.palette),
        }
    }

    /// Explicit hex override when valid, else the palette color for `ordinal`.
    pub fn series_color(
        &self,
        ordinal: usize,
        color_override: Option<&str>,
        series_name: &str,
        diagnostics: &mut Diagnostics,
    ) -> Color {
        match color_override.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Color::from_hex(raw).unwrap_or_else(|_| {
                diagnostics.invalid_color(series_name, raw);
                self.palette.color(ordinal)
            }),
            None => self.palette.color(ordinal),
        }
    }

    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.spec.title.trim().is_empty()
    }
}
