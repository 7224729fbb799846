use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Outcome of coercing one cell to a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Value(f64),
    /// Missing, `null` or blank.
    Absent,
    /// Present but not interpretable as a finite number.
    Invalid,
}

impl Numeric {
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Invalid => None,
        }
    }

    #[must_use]
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Coerces a cell to a finite number.
///
/// Strings are trimmed and stripped of `,` thousands separators before parsing.
#[must_use]
pub fn coerce_numeric(cell: Option<&Value>) -> Numeric {
    match cell {
        None | Some(Value::Null) => Numeric::Absent,
        Some(Value::Number(number)) => match number.as_f64() {
            Some(value) if value.is_finite() => Numeric::Value(value),
            _ => Numeric::Invalid,
        },
        Some(Value::String(text)) => parse_numeric_text(text),
        Some(Value::Bool(_) | Value::Array(_) | Value::Object(_)) => Numeric::Invalid,
    }
}

/// Parses numeric text leniently, the way a spreadsheet cell is read.
#[must_use]
pub fn parse_numeric_text(text: &str) -> Numeric {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Numeric::Absent;
    }
    let cleaned: String = trimmed.chars().filter(|ch| *ch != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Numeric::Value(value),
        _ => Numeric::Invalid,
    }
}

/// `true` when the cell holds a JSON number (strings do not count).
#[must_use]
pub fn is_json_number(cell: Option<&Value>) -> bool {
    matches!(cell, Some(Value::Number(_)))
}

/// Text used for category labels and node names.
#[must_use]
pub fn cell_label(cell: Option<&Value>) -> String {
    match cell {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => match number.as_f64() {
            Some(value) => format_plain_number(value),
            None => number.to_string(),
        },
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Shortest round-trip rendering, integers without a fractional part.
#[must_use]
pub fn format_plain_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Rounds half away from zero to `decimals` places through `Decimal`.
///
/// Values outside the `Decimal` range are returned unchanged.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let Some(decimal) = Decimal::from_f64(value) else {
        return value;
    };
    decimal
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(value)
}

/// Fixed-point text with at most `max_decimals` fraction digits, trailing zeros trimmed.
#[must_use]
pub fn decimal_text(value: f64, max_decimals: u32) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        return format_plain_number(value);
    };
    let rounded = decimal
        .round_dp_with_strategy(max_decimals, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        return "0".to_owned();
    }
    rounded.to_string()
}

/// Fixed-point text with exactly `decimals` fraction digits.
#[must_use]
pub fn fixed_text(value: f64, decimals: u32) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        return format_plain_number(value);
    };
    let mut rounded =
        decimal.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(decimals);
    rounded.to_string()
}

/// Parses the calendar date of a date-like label.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` and RFC 3339 timestamps.
#[must_use]
pub fn parse_date_label(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.date_naive());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .into_iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(text, pattern).ok())
        .map(|stamp| stamp.date())
}

/// `YYYY-MM-DD` when the label is date-like, otherwise the label unchanged.
#[must_use]
pub fn normalize_date_label(text: &str) -> String {
    match parse_date_label(text) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => text.to_owned(),
    }
}
