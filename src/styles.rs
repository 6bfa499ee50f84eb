//! Styles
//!
//! Typed presentational properties and the composition rule used to layer conditional
//! styles (e.g. an active category button) over a base style.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use tabled::settings::Color as Ansi;
use thiserror::Error;

/// Errors parsing style values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A color was not written as `#RRGGBB` or `#RGB`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A font weight was not `normal`, `bold` or a multiple of 100 up to 900.
    #[error("invalid font weight: {0:?}")]
    InvalidFontWeight(String),
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red channel
    pub fn r(self) -> u8 {
        self.r
    }

    /// Green channel
    pub fn g(self) -> u8 {
        self.g
    }

    /// Blue channel
    pub fn b(self) -> u8 {
        self.b
    }
}

/// Parses `#RRGGBB` or the `#RGB` shorthand.
impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StyleError::InvalidColor(s.to_string());

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;

        if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let digits: Vec<u8> = hex
            .chars()
            .filter_map(|ch| ch.to_digit(16))
            .filter_map(|digit| u8::try_from(digit).ok())
            .collect();

        match digits.as_slice() {
            [r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// 400
    Normal,

    /// 500
    Medium,

    /// 700
    Bold,

    /// Any other multiple of 100
    Numeric(u16),
}

impl FontWeight {
    /// Numeric weight
    pub fn value(self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Bold => 700,
            Self::Numeric(value) => value,
        }
    }

    /// Whether the weight renders as bold (600 and up).
    pub fn is_bold(self) -> bool {
        self.value() >= 600
    }
}

impl FromStr for FontWeight {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" | "400" => Ok(Self::Normal),
            "500" => Ok(Self::Medium),
            "bold" | "700" => Ok(Self::Bold),
            other => match other.parse::<u16>() {
                Ok(weight) if weight % 100 == 0 && (100..=900).contains(&weight) => {
                    Ok(Self::Numeric(weight))
                }
                _ => Err(StyleError::InvalidFontWeight(s.to_string())),
            },
        }
    }
}

/// Style
///
/// Every property is optional; an unset property falls through to whatever style it is
/// merged over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Background color
    pub background_color: Option<Color>,

    /// Text color
    pub color: Option<Color>,

    /// Font size in points
    pub font_size: Option<u16>,

    /// Font weight
    pub font_weight: Option<FontWeight>,

    /// Horizontal padding
    pub padding_horizontal: Option<u16>,

    /// Vertical padding
    pub padding_vertical: Option<u16>,

    /// Right margin
    pub margin_right: Option<u16>,

    /// Corner radius
    pub border_radius: Option<u16>,

    /// Border width
    pub border_width: Option<u16>,

    /// Border color
    pub border_color: Option<Color>,

    /// Opacity between 0 and 1
    pub opacity: Option<Decimal>,
}

impl Style {
    /// Returns a copy of this style with every property `other` sets taking priority.
    #[must_use]
    pub fn merged_with(&self, other: &Style) -> Style {
        Style {
            background_color: other.background_color.or(self.background_color),
            color: other.color.or(self.color),
            font_size: other.font_size.or(self.font_size),
            font_weight: other.font_weight.or(self.font_weight),
            padding_horizontal: other.padding_horizontal.or(self.padding_horizontal),
            padding_vertical: other.padding_vertical.or(self.padding_vertical),
            margin_right: other.margin_right.or(self.margin_right),
            border_radius: other.border_radius.or(self.border_radius),
            border_width: other.border_width.or(self.border_width),
            border_color: other.border_color.or(self.border_color),
            opacity: other.opacity.or(self.opacity),
        }
    }

    /// Renders text for a terminal: colors as 24-bit ANSI, weights of 600 and up as bold,
    /// opacity below 1 as faint, and one space of horizontal padding per 10 units.
    pub fn paint(&self, text: &str) -> String {
        let mut layers: Vec<Ansi> = Vec::new();

        if let Some(color) = self.background_color {
            layers.push(Ansi::rgb_bg(color.r(), color.g(), color.b()));
        }

        if let Some(color) = self.color {
            layers.push(Ansi::rgb_fg(color.r(), color.g(), color.b()));
        }

        if self.font_weight.is_some_and(FontWeight::is_bold) {
            layers.push(Ansi::BOLD);
        }

        if self.opacity.is_some_and(|opacity| opacity < Decimal::ONE) {
            layers.push(Ansi::new("\x1b[2m", "\x1b[22m"));
        }

        let pad = " ".repeat(usize::from(self.padding_horizontal.unwrap_or_default() / 10));

        layers
            .into_iter()
            .fold(Ansi::empty(), |ansi, layer| ansi | layer)
            .colorize(format!("{pad}{text}{pad}"))
    }
}

/// Merges styles left to right: later overrides win, `None` entries are skipped.
pub fn merge<'s>(base: &Style, overrides: impl IntoIterator<Item = Option<&'s Style>>) -> Style {
    overrides
        .into_iter()
        .flatten()
        .fold(base.clone(), |merged, next| merged.merged_with(next))
}

const GREEN: Color = Color::rgb(0x4c, 0xaf, 0x50);
const LIGHT_GREY: Color = Color::rgb(0xf8, 0xf8, 0xf8);
const MID_GREY: Color = Color::rgb(0x66, 0x66, 0x66);

/// A button in the category bar, highlighted when its category is selected.
pub fn category_button(active: bool) -> Style {
    let base = Style {
        background_color: Some(LIGHT_GREY),
        padding_horizontal: Some(20),
        padding_vertical: Some(8),
        border_radius: Some(20),
        margin_right: Some(10),
        ..Style::default()
    };

    let highlight = Style {
        background_color: Some(GREEN),
        ..Style::default()
    };

    merge(&base, [active.then_some(&highlight)])
}

/// Label of a category button.
pub fn category_button_text(active: bool) -> Style {
    let base = Style {
        color: Some(MID_GREY),
        font_size: Some(14),
        font_weight: Some(FontWeight::Medium),
        ..Style::default()
    };

    let highlight = Style {
        color: Some(Color::WHITE),
        ..Style::default()
    };

    merge(&base, [active.then_some(&highlight)])
}

/// A `+`/`-` quantity button, dimmed when the action is unavailable.
pub fn quantity_button(disabled: bool) -> Style {
    let base = Style {
        background_color: Some(GREEN),
        border_radius: Some(16),
        ..Style::default()
    };

    let dimmed = Style {
        opacity: Some(Decimal::new(5, 1)),
        ..Style::default()
    };

    merge(&base, [disabled.then_some(&dimmed)])
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn color_parses_long_and_short_hex() -> TestResult {
        assert_eq!("#4CAF50".parse::<Color>()?, Color::rgb(0x4c, 0xaf, 0x50));
        assert_eq!("#fff".parse::<Color>()?, Color::WHITE);
        assert_eq!("#666".parse::<Color>()?, Color::rgb(0x66, 0x66, 0x66));

        Ok(())
    }

    #[test]
    fn color_rejects_malformed_values() {
        for input in ["4CAF50", "#4CAF5", "#ggg", "#", "#+1+2+3"] {
            assert_eq!(
                input.parse::<Color>(),
                Err(StyleError::InvalidColor(input.to_string())),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn color_displays_as_lowercase_hex() {
        assert_eq!(Color::rgb(0x4c, 0xaf, 0x50).to_string(), "#4caf50");
    }

    #[test]
    fn font_weight_parses_names_and_numbers() -> TestResult {
        assert_eq!("bold".parse::<FontWeight>()?, FontWeight::Bold);
        assert_eq!("500".parse::<FontWeight>()?, FontWeight::Medium);
        assert_eq!("600".parse::<FontWeight>()?, FontWeight::Numeric(600));
        assert!("650".parse::<FontWeight>().is_err());

        Ok(())
    }

    #[test]
    fn merge_later_overrides_take_priority() {
        let base = Style {
            color: Some(MID_GREY),
            font_size: Some(14),
            ..Style::default()
        };
        let first = Style {
            color: Some(GREEN),
            ..Style::default()
        };
        let second = Style {
            color: Some(Color::WHITE),
            border_width: Some(1),
            ..Style::default()
        };

        let merged = merge(&base, [Some(&first), Some(&second)]);

        assert_eq!(merged.color, Some(Color::WHITE));
        assert_eq!(merged.font_size, Some(14));
        assert_eq!(merged.border_width, Some(1));
    }

    #[test]
    fn merge_skips_missing_overrides() {
        let base = category_button(false);

        assert_eq!(merge(&base, [None, None]), base);
        assert_eq!(merge(&base, Vec::new()), base);
    }

    #[test]
    fn active_category_button_is_green() {
        assert_eq!(category_button(true).background_color, Some(GREEN));
        assert_eq!(category_button(false).background_color, Some(LIGHT_GREY));
        assert_eq!(category_button(true).padding_horizontal, Some(20));
        assert_eq!(category_button_text(true).color, Some(Color::WHITE));
        assert_eq!(category_button_text(false).color, Some(MID_GREY));
    }

    #[test]
    fn disabled_quantity_button_is_dimmed() {
        assert_eq!(quantity_button(true).opacity, Some(Decimal::new(5, 1)));
        assert_eq!(quantity_button(false).opacity, None);
    }

    #[test]
    fn paint_renders_active_category_with_background_and_padding() {
        let active = merge(&category_button(true), [Some(&category_button_text(true))]);

        let painted = active.paint("Tacos");

        assert!(painted.contains("\x1b[48;2;76;175;80m"));
        assert!(painted.contains("\x1b[38;2;255;255;255m"));
        assert!(painted.contains("  Tacos  "));
    }

    #[test]
    fn paint_dims_disabled_quantity_buttons() {
        assert!(quantity_button(true).paint("-").contains("\x1b[2m"));
        assert!(!quantity_button(false).paint("-").contains("\x1b[2m"));
    }

    #[test]
    fn paint_without_properties_leaves_text_unchanged() {
        assert_eq!(Style::default().paint("Tacos"), "Tacos");
    }

    #[test]
    fn bold_weights_start_at_600() {
        assert!(FontWeight::Bold.is_bold());
        assert!(FontWeight::Numeric(600).is_bold());
        assert!(!FontWeight::Medium.is_bold());
    }
}
