use smallvec::SmallVec;
use tracing::trace;

use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::{cell_label, normalize_date_label};
use crate::core::spec::{ChartSpec, SeriesBinding};
use crate::core::types::{Record, find_column_containing};

use super::numeric_column;

/// Fields in OHLC order.
type OhlcFields<'a> = SmallVec<[&'a str; 4]>;

#[derive(Debug, Clone, PartialEq)]
pub struct OhlcGroup {
    pub ordinal: usize,
    pub name: String,
    pub color_override: Option<String>,
    /// `[open, close, low, high]` per row; `None` when any of the four is missing.
    pub bars: Vec<Option<[f64; 4]>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FinancialData {
    pub categories: Vec<String>,
    pub groups: Vec<OhlcGroup>,
}

/// Pivots bound columns into OHLC groups.
///
/// An explicit candlestick binding with all four fields wins. Otherwise
/// visible bindings are consumed four at a time as open, close, low, high and
/// an incomplete trailing chunk is discarded. With fewer than four bindings the
/// columns are auto-detected by name.
#[must_use]
pub fn reshape_financial(
    rows: &[Record],
    spec: &ChartSpec,
    diagnostics: &mut Diagnostics,
) -> FinancialData {
    let categories = match spec.x_axis_field.as_deref().filter(|f| !f.is_empty()) {
        Some(field) => rows
            .iter()
            .map(|row| normalize_date_label(&cell_label(row.get(field))))
            .collect(),
        None => (1..=rows.len()).map(|position| position.to_string()).collect(),
    };

    let mut groups = Vec::new();
    let visible: Vec<&SeriesBinding> = spec.visible_series().collect();

    if let Some((fields, name)) = explicit_fields(spec) {
        groups.push(build_group(rows, 0, name, None, &fields, diagnostics));
    } else if visible.len() >= 4 {
        for (ordinal, chunk) in visible.chunks_exact(4).enumerate() {
            let fields: OhlcFields<'_> = chunk.iter().map(|b| b.id.as_str()).collect();
            let name = chunk_name(chunk[0], ordinal);
            let color = chunk[0].color.clone();
            groups.push(build_group(rows, ordinal, name, color, &fields, diagnostics));
        }
    } else if let Some(fields) = detect_fields(rows) {
        groups.push(build_group(rows, 0, "Price".to_owned(), None, &fields, diagnostics));
    } else if !rows.is_empty() {
        diagnostics.missing_binding("open/close/low/high");
    }

    trace!(groups = groups.len(), rows = rows.len(), "reshape ohlc groups");
    FinancialData { categories, groups }
}

fn explicit_fields(spec: &ChartSpec) -> Option<(OhlcFields<'_>, String)> {
    let binding = spec.candlestick.as_ref()?;
    let fields: OhlcFields<'_> = [&binding.open, &binding.close, &binding.low, &binding.high]
        .into_iter()
        .map(|field| field.as_deref().filter(|f| !f.is_empty()))
        .collect::<Option<_>>()?;
    let name = binding
        .name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Price".to_owned());
    Some((fields, name))
}

fn detect_fields(rows: &[Record]) -> Option<OhlcFields<'_>> {
    ["open", "close", "low", "high"]
        .into_iter()
        .map(|needle| find_column_containing(rows, &[needle]))
        .collect()
}

fn chunk_name(first: &SeriesBinding, ordinal: usize) -> String {
    let label = first.display_name();
    match label.split('_').next().filter(|prefix| !prefix.is_empty()) {
        Some(prefix) => prefix.to_owned(),
        None => format!("Candlestick {}", ordinal + 1),
    }
}

fn build_group(
    rows: &[Record],
    ordinal: usize,
    name: String,
    color_override: Option<String>,
    fields: &[&str],
    diagnostics: &mut Diagnostics,
) -> OhlcGroup {
    let columns: SmallVec<[Vec<Option<f64>>; 4]> = fields
        .iter()
        .map(|field| numeric_column(rows, field, diagnostics))
        .collect();

    let bars = (0..rows.len())
        .map(|index| {
            let mut bar = [0.0; 4];
            for (slot, column) in bar.iter_mut().zip(&columns) {
                *slot = column[index]?;
            }
            Some(bar)
        })
        .collect();

    OhlcGroup {
        ordinal,
        name,
        color_override,
        bars,
    }
}
