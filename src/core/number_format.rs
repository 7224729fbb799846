use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_text, fixed_text, format_plain_number};

/// Display policy for values in labels, tooltips and KPI text.
///
/// Formatting is locale-free: each policy pins its own separators so output is
/// identical on every host. Unknown names deserialize to [`NumberFormat::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum NumberFormat {
    /// `1,234.568` (up to three fraction digits).
    #[default]
    Default,
    /// `1.2K`, `3.4M`, `5.6B`.
    Compact,
    /// `$1,235` (whole dollars).
    Currency,
    /// `12.3%` (the value is already a percentage).
    Percent,
    /// `1,234.57` (up to two fraction digits).
    Standard,
    /// `1.234,568`.
    European,
    /// Shortest round-trip text, no grouping.
    Plain,
}

impl From<String> for NumberFormat {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl NumberFormat {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "compact" => Self::Compact,
            "currency" => Self::Currency,
            "percent" => Self::Percent,
            "standard" => Self::Standard,
            "european" => Self::European,
            "plain" => Self::Plain,
            _ => Self::Default,
        }
    }

    /// Formats a possibly-missing value; missing renders as `-`.
    #[must_use]
    pub fn format(self, value: Option<f64>) -> String {
        let Some(value) = value.filter(|v| v.is_finite()) else {
            return "-".to_owned();
        };

        match self {
            Self::Currency => {
                let text = grouped(value.abs(), 0, ',', '.');
                if value < 0.0 && text != "0" {
                    format!("-${text}")
                } else {
                    format!("${text}")
                }
            }
            Self::Percent => format!("{}%", fixed_text(value, 1)),
            Self::Compact => {
                if value >= 1_000_000_000.0 {
                    format!("{}B", fixed_text(value / 1_000_000_000.0, 1))
                } else if value >= 1_000_000.0 {
                    format!("{}M", fixed_text(value / 1_000_000.0, 1))
                } else if value >= 1_000.0 {
                    format!("{}K", fixed_text(value / 1_000.0, 1))
                } else {
                    grouped(value, 3, ',', '.')
                }
            }
            Self::Standard => grouped(value, 2, ',', '.'),
            Self::European => grouped(value, 3, '.', ','),
            Self::Plain => format_plain_number(value),
            Self::Default => grouped(value, 3, ',', '.'),
        }
    }

    /// Short tick text for the value axis.
    #[must_use]
    pub fn format_axis_label(self, value: f64) -> String {
        match self {
            Self::Compact => abbreviate(value).unwrap_or_else(|| format_plain_number(value)),
            Self::Currency => format!(
                "${}",
                abbreviate(value).unwrap_or_else(|| format_plain_number(value))
            ),
            Self::Percent => format!("{}%", format_plain_number(value)),
            Self::Default | Self::Standard | Self::European | Self::Plain => {
                format_plain_number(value)
            }
        }
    }
}

fn abbreviate(value: f64) -> Option<String> {
    if value >= 1_000_000.0 {
        Some(format!("{}M", fixed_text(value / 1_000_000.0, 0)))
    } else if value >= 1_000.0 {
        Some(format!("{}K", fixed_text(value / 1_000.0, 0)))
    } else {
        None
    }
}

fn grouped(
    value: f64,
    max_decimals: u32,
    group_separator: char,
    decimal_separator: char,
) -> String {
    let text = decimal_text(value, max_decimals);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    out.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            out.push(group_separator);
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push(decimal_separator);
        out.push_str(fraction);
    }
    out
}
