//! Colors for pen strokes and tints applied to placed road elements.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => None,
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Tint applied over a road-element icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    /// Draw the icon with its own colors.
    #[default]
    None,
    /// Multiply the icon by this color.
    Color(SerializableColor),
}

impl Tint {
    pub fn is_none(&self) -> bool {
        matches!(self, Tint::None)
    }

    /// The tint as a renderable color, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            Tint::None => None,
            Tint::Color(c) => Some((*c).into()),
        }
    }

    /// Parse a hex color, or `"none"` for no tint.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("none") {
            return Some(Tint::None);
        }
        SerializableColor::from_hex(s).map(Tint::Color)
    }
}

impl From<SerializableColor> for Tint {
    fn from(color: SerializableColor) -> Self {
        Tint::Color(color)
    }
}

/// Tints a placed element can be given (also the settings choices).
pub const DRAGGABLE_COLORS: [SerializableColor; 5] = [
    SerializableColor::rgb(0x00, 0x00, 0x00),
    SerializableColor::rgb(0xe0, 0x9f, 0x3e),
    SerializableColor::rgb(0x9e, 0x2a, 0x2b),
    SerializableColor::rgb(0x28, 0x4b, 0x63),
    SerializableColor::rgb(0x3a, 0x5a, 0x40),
];

/// Default tint for newly placed elements.
pub const DEFAULT_DRAGGABLE_COLOR: SerializableColor = DRAGGABLE_COLORS[1];

/// Tints offered in every popout menu, ending with a reset to no tint.
pub const DEFAULT_POPOUT_TINTS: [Tint; 6] = [
    Tint::Color(DRAGGABLE_COLORS[0]),
    Tint::Color(DRAGGABLE_COLORS[1]),
    Tint::Color(DRAGGABLE_COLORS[2]),
    Tint::Color(DRAGGABLE_COLORS[3]),
    Tint::Color(DRAGGABLE_COLORS[4]),
    Tint::None,
];

/// Pen colors offered in settings.
pub const PEN_COLORS: [SerializableColor; 8] = [
    SerializableColor::rgb(0x20, 0x30, 0x3c),
    SerializableColor::rgb(0x31, 0x82, 0xc8),
    SerializableColor::rgb(0x00, 0xaa, 0xaf),
    SerializableColor::rgb(0x00, 0xa6, 0x5f),
    SerializableColor::rgb(0xe2, 0x90, 0x2b),
    SerializableColor::rgb(0xd9, 0x64, 0x4a),
    SerializableColor::rgb(0xcf, 0x26, 0x2f),
    SerializableColor::rgb(0x8b, 0x10, 0x79),
];

/// Default pen color.
pub const DEFAULT_PEN_COLOR: SerializableColor = PEN_COLORS[0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        let white = SerializableColor::rgb(255, 255, 255);
        assert_eq!(SerializableColor::from_hex("#fff"), Some(white));
        assert_eq!(
            SerializableColor::from_hex("#e09f3e"),
            Some(DEFAULT_DRAGGABLE_COLOR)
        );
        assert_eq!(
            SerializableColor::from_hex("#00000080"),
            Some(SerializableColor::new(0, 0, 0, 0x80))
        );
        assert_eq!(SerializableColor::from_hex("e09f3e"), None);
        assert_eq!(SerializableColor::from_hex("#12345"), None);
        assert_eq!(SerializableColor::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_hex_rejects_signs() {
        assert_eq!(SerializableColor::from_hex("#+f+f+f"), None);
        assert_eq!(SerializableColor::from_hex("#+f+"), None);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(DEFAULT_PEN_COLOR.to_hex(), "#20303c");
        assert_eq!(SerializableColor::new(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn test_tint_parse() {
        assert_eq!(Tint::parse("none"), Some(Tint::None));
        assert_eq!(Tint::parse("#000"), Some(Tint::Color(SerializableColor::black())));
        assert_eq!(Tint::parse("red"), None);
    }

    #[test]
    fn test_popout_tints_end_with_reset() {
        assert_eq!(DEFAULT_POPOUT_TINTS.last(), Some(&Tint::None));
        assert_eq!(DEFAULT_POPOUT_TINTS[1], Tint::Color(DEFAULT_DRAGGABLE_COLOR));
    }

    #[test]
    fn test_peniko_round_trip() {
        let c = SerializableColor::new(10, 20, 30, 255);
        let back: SerializableColor = Color::from(c).into();
        assert_eq!(c, back);
        assert!(Tint::None.color().is_none());
    }
}
