use chrono::Datelike;
use tracing::trace;

use crate::core::diagnostics::Diagnostics;
use crate::core::primitives::{cell_label, coerce_numeric, normalize_date_label, parse_date_label};
use crate::core::spec::ChartSpec;
use crate::core::types::{Record, field_present, find_column_containing};

const DATE_HINTS: [&str; 2] = ["date", "time"];
const VALUE_HINTS: [&str; 3] = ["value", "count", "total"];

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalendarData {
    pub entries: Vec<CalendarEntry>,
    /// Year shown by the calendar coordinate system.
    pub year: Option<String>,
}

/// Emits `(date, value)` pairs for the activity calendar.
///
/// Bound fields win; otherwise columns are auto-detected by name. Rows with an
/// empty date or a non-numeric value are dropped.
#[must_use]
pub fn reshape_calendar(
    rows: &[Record],
    spec: &ChartSpec,
    diagnostics: &mut Diagnostics,
) -> CalendarData {
    let binding = spec.calendar.clone().unwrap_or_default();

    let date_field = binding
        .date_field
        .clone()
        .or_else(|| spec.x_axis_field.clone())
        .filter(|field| !field.is_empty() && field_present(rows, field))
        .or_else(|| find_column_containing(rows, &DATE_HINTS).map(str::to_owned));
    let value_field = binding
        .value_field
        .clone()
        .or_else(|| spec.visible_series().next().map(|b| b.id.clone()))
        .filter(|field| !field.is_empty() && field_present(rows, field))
        .or_else(|| find_column_containing(rows, &VALUE_HINTS).map(str::to_owned));

    let (Some(date_field), Some(value_field)) = (date_field, value_field) else {
        if !rows.is_empty() {
            diagnostics.missing_binding("calendar.dateField/valueField");
        }
        return CalendarData {
            entries: Vec::new(),
            year: binding.year.map(|year| year.to_string()),
        };
    };

    let mut invalid = 0usize;
    let entries: Vec<CalendarEntry> = rows
        .iter()
        .filter_map(|row| {
            let date = cell_label(row.get(&date_field));
            if date.trim().is_empty() {
                return None;
            }
            let numeric = coerce_numeric(row.get(&value_field));
            if numeric.is_invalid() {
                invalid += 1;
            }
            Some(CalendarEntry {
                date: normalize_date_label(&date),
                value: numeric.value()?,
            })
        })
        .collect();
    diagnostics.non_numeric(value_field.as_str(), invalid);

    let year = binding
        .year
        .map(|year| year.to_string())
        .or_else(|| infer_year(&entries));

    trace!(entries = entries.len(), year = ?year, "reshape calendar");
    CalendarData { entries, year }
}

fn infer_year(entries: &[CalendarEntry]) -> Option<String> {
    if let Some(date) = entries.iter().find_map(|entry| parse_date_label(&entry.date)) {
        return Some(date.year().to_string());
    }
    let first = entries.first()?;
    let prefix: String = first.date.chars().take(4).collect();
    (prefix.len() == 4 && prefix.chars().all(|ch| ch.is_ascii_digit())).then_some(prefix)
}
