use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// An opaque sRGB color, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from the low 24 bits of `value` (0xRRGGBB).
    pub const fn from_u24(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_color(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        format_color(color)
    }
}

/// Parse a 3- or 6-digit hex color, with or without a leading `#`.
/// Shorthand `abc` expands to `aabbcc`. Case-insensitive.
pub fn parse_color(input: &str) -> Result<Color, ParseError> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    // from_str_radix tolerates a leading '+', so validate digits up front
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::invalid_format(input));
    }

    let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).unwrap_or(0);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);

    match hex.len() {
        3 => Ok(Color::new(digit(0) * 17, digit(1) * 17, digit(2) * 17)),
        6 => Ok(Color::new(pair(0), pair(2), pair(4))),
        _ => Err(ParseError::invalid_format(input)),
    }
}

/// Canonical `#RRGGBB` (uppercase) form.
pub fn format_color(color: Color) -> String {
    color.to_string()
}

/// Best-effort parse for live-typed input: falls back to `fallback` when the
/// text is not a valid hex color. The substitution is logged.
pub fn parse_color_or(input: &str, fallback: Color) -> Color {
    match parse_color(input) {
        Ok(color) => color,
        Err(err) => {
            tracing::warn!(%err, %fallback, "substituting fallback color");
            fallback
        }
    }
}

/// Canonical form of `input`, or of `fallback` (black when absent) if the
/// input does not parse. The fallback itself must be a valid color.
pub fn format_color_or(input: &str, fallback: Option<&str>) -> Result<String, ParseError> {
    let fallback = match fallback {
        Some(value) => parse_color(value)?,
        None => Color::BLACK,
    };
    Ok(format_color(parse_color_or(input, fallback)))
}

/// [`parse_color_or`] with black as the fallback.
pub fn parse_color_lenient(input: &str) -> Color {
    parse_color_or(input, Color::BLACK)
}
