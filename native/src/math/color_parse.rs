use csscolorparser::Color as CssColor;

use super::hex::{parse_color, Color};
use crate::error::ParseError;

/// A color with its alpha (0.0-1.0). Opaque paints have alpha 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub alpha: f64,
}

impl Paint {
    pub const fn opaque(color: Color) -> Self {
        Self { color, alpha: 1.0 }
    }

    /// Alpha >= 0.999 counts as fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 0.999
    }
}

/// Parse any CSS color value into a paint.
/// Strict 3/6-digit hex is tried first; everything else (rgb, hsl, hwb,
/// oklch, named, 4/8-digit hex) goes through csscolorparser.
/// Keywords with no concrete color (transparent, inherit, currentColor, ...)
/// are rejected.
pub fn parse_paint(value: &str) -> Result<Paint, ParseError> {
    let trimmed = value.trim();

    if let Ok(color) = parse_color(trimmed) {
        return Ok(Paint::opaque(color));
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" | "" => {
            return Err(ParseError::invalid_format(value));
        }
        _ => {}
    }

    let css: CssColor = trimmed.parse().map_err(|_| ParseError::invalid_format(value))?;
    let [r, g, b, a] = css.to_rgba8();
    Ok(Paint {
        color: Color::new(r, g, b),
        alpha: a as f64 / 255.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_of(value: &str) -> Color {
        parse_paint(value).unwrap().color
    }

    #[test]
    fn hex_passthrough() {
        assert_eq!(parse_paint("#1e293b"), Ok(Paint::opaque(Color::new(30, 41, 59))));
        assert_eq!(color_of("f00"), Color::new(255, 0, 0));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(color_of("  #fff  "), Color::WHITE);
    }

    #[test]
    fn hex_8digit_keeps_alpha() {
        let paint = parse_paint("#ff000080").unwrap();
        assert_eq!(paint.color, Color::new(255, 0, 0));
        assert!((paint.alpha - 0.502).abs() < 0.01); // 128/255 ~ 0.502
        assert!(!paint.is_opaque());
    }

    #[test]
    fn rgb_comma_format() {
        assert_eq!(color_of("rgb(255, 0, 128)"), Color::new(255, 0, 128));
    }

    #[test]
    fn rgb_space_format() {
        assert_eq!(color_of("rgb(255 0 0)"), Color::new(255, 0, 0));
    }

    #[test]
    fn hsl_red() {
        assert_eq!(color_of("hsl(0, 100%, 50%)"), Color::new(255, 0, 0));
    }

    #[test]
    fn named_color() {
        assert_eq!(color_of("red"), Color::new(255, 0, 0));
        assert!(parse_paint("rebeccapurple").unwrap().is_opaque());
    }

    #[test]
    fn rgba_alpha() {
        let paint = parse_paint("rgba(0, 0, 0, 0.5)").unwrap();
        assert!((paint.alpha - 0.5).abs() < 0.01);
    }

    #[test]
    fn keywords_rejected() {
        for value in ["transparent", "inherit", "currentColor", "initial", "unset", ""] {
            assert!(
                matches!(parse_paint(value), Err(ParseError::InvalidFormat { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn garbage_rejected() {
        assert!(parse_paint("not-a-color").is_err());
        assert!(parse_paint("#12").is_err());
    }
}
