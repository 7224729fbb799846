use serde::{Deserialize, Serialize};

use crate::core::color::Color;

const DEFAULT_COLORS: [Color; 10] = [
    Color::rgb(0x50, 0x9E, 0xE3),
    Color::rgb(0x88, 0xBF, 0x4D),
    Color::rgb(0xA9, 0x89, 0xC5),
    Color::rgb(0xEF, 0x8C, 0x8C),
    Color::rgb(0xF9, 0xCF, 0x48),
    Color::rgb(0x98, 0xD9, 0xD9),
    Color::rgb(0x71, 0x72, 0xAD),
    Color::rgb(0xF2, 0xA8, 0x6F),
    Color::rgb(0xA3, 0xB9, 0xCB),
    Color::rgb(0xC4, 0xA4, 0xD8),
];

const WARM_COLORS: [Color; 10] = [
    Color::rgb(0xEF, 0x6C, 0x00),
    Color::rgb(0xFD, 0xD8, 0x35),
    Color::rgb(0xE5, 0x39, 0x35),
    Color::rgb(0xF0, 0x62, 0x92),
    Color::rgb(0xFF, 0x8A, 0x65),
    Color::rgb(0xFF, 0xCA, 0x28),
    Color::rgb(0xD8, 0x1B, 0x60),
    Color::rgb(0xFF, 0x70, 0x43),
    Color::rgb(0xFF, 0xB7, 0x4D),
    Color::rgb(0xF4, 0x8F, 0xB1),
];

const COOL_COLORS: [Color; 10] = [
    Color::rgb(0x00, 0xAC, 0xC1),
    Color::rgb(0x5E, 0x35, 0xB1),
    Color::rgb(0x1E, 0x88, 0xE5),
    Color::rgb(0x00, 0x89, 0x7B),
    Color::rgb(0x39, 0x49, 0xAB),
    Color::rgb(0x03, 0x9B, 0xE5),
    Color::rgb(0x7E, 0x57, 0xC2),
    Color::rgb(0x26, 0xA6, 0x9A),
    Color::rgb(0x42, 0xA5, 0xF5),
    Color::rgb(0x95, 0x75, 0xCD),
];

const NATURE_COLORS: [Color; 10] = [
    Color::rgb(0x43, 0xA0, 0x47),
    Color::rgb(0x8B, 0xC3, 0x4A),
    Color::rgb(0x00, 0x4D, 0x40),
    Color::rgb(0x2E, 0x7D, 0x32),
    Color::rgb(0x68, 0x9F, 0x38),
    Color::rgb(0x00, 0x69, 0x5C),
    Color::rgb(0x55, 0x8B, 0x2F),
    Color::rgb(0x1B, 0x5E, 0x20),
    Color::rgb(0x33, 0x69, 0x1E),
    Color::rgb(0x4C, 0xAF, 0x50),
];

/// Named color palette. Unknown names resolve to [`Palette::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Default,
    Warm,
    Cool,
    Nature,
}

impl Palette {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "warm" => Self::Warm,
            "cool" => Self::Cool,
            "nature" => Self::Nature,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Nature => "nature",
        }
    }

    #[must_use]
    pub fn colors(self) -> &'static [Color] {
        match self {
            Self::Default => &DEFAULT_COLORS,
            Self::Warm => &WARM_COLORS,
            Self::Cool => &COOL_COLORS,
            Self::Nature => &NATURE_COLORS,
        }
    }

    /// Color for ordinal `index`, cycling through the palette.
    ///
    /// Pure function of `(index, palette)`.
    #[must_use]
    pub fn color(self, index: usize) -> Color {
        let colors = self.colors();
        colors[index % colors.len()]
    }
}

/// Convenience form of [`Palette::color`] keyed by palette name.
#[must_use]
pub fn palette_color(index: usize, palette_name: &str) -> Color {
    Palette::from_name(palette_name).color(index)
}
