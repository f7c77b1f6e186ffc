use std::fmt;

use crate::math::hex::Color;
use crate::math::wcag::{ConformanceFlags, ConformanceLevel};

/// Clipboard text for a pair, e.g.
/// `Text: #000000, Background: #FFFFFF, Ratio: 21.00:1`.
pub fn export_line(foreground: Color, background: Color, ratio: f64) -> String {
    format!("Text: {foreground}, Background: {background}, Ratio: {ratio:.2}:1")
}

/// Fill fraction of a 0-21 ratio gauge.
pub fn gauge_fraction(ratio: f64) -> f64 {
    (ratio / 21.0).clamp(0.0, 1.0)
}

impl ConformanceLevel {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Aaa => "Excellent",
            Self::Aa => "Good",
            Self::AaLarge => "Acceptable for large text",
            Self::Fail => "Insufficient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    IncreaseContrast,
    AimForAaa,
    Excellent,
    TestVisionModes,
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::IncreaseContrast => "Increase the contrast to at least 4.5:1 for normal text.",
            Self::AimForAaa => "For optimal accessibility (AAA), aim for a ratio of 7:1.",
            Self::Excellent => "Excellent contrast! This combination is accessible to all users.",
            Self::TestVisionModes => "Test with the color-vision simulations for complete accessibility.",
        })
    }
}

/// Suggestions for the pair, most important first.
pub fn advice(flags: &ConformanceFlags) -> Vec<Advice> {
    let mut out = Vec::with_capacity(2);
    if !flags.aa_normal {
        out.push(Advice::IncreaseContrast);
    } else if !flags.aaa_normal {
        out.push(Advice::AimForAaa);
    } else {
        out.push(Advice::Excellent);
    }
    out.push(Advice::TestVisionModes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::wcag::classify;

    #[test]
    fn export_line_format() {
        assert_eq!(
            export_line(Color::BLACK, Color::WHITE, 21.0),
            "Text: #000000, Background: #FFFFFF, Ratio: 21.00:1"
        );
        assert_eq!(
            export_line(Color::new(0x77, 0x77, 0x77), Color::WHITE, 4.478089),
            "Text: #777777, Background: #FFFFFF, Ratio: 4.48:1"
        );
    }

    #[test]
    fn gauge_is_clamped() {
        assert_eq!(gauge_fraction(21.0), 1.0);
        assert_eq!(gauge_fraction(10.5), 0.5);
        assert_eq!(gauge_fraction(30.0), 1.0);
    }

    #[test]
    fn level_messages() {
        assert_eq!(ConformanceLevel::Aaa.message(), "Excellent");
        assert_eq!(ConformanceLevel::Fail.message(), "Insufficient");
    }

    #[test]
    fn failing_pair_advised_to_increase() {
        assert_eq!(advice(&classify(2.0)), vec![Advice::IncreaseContrast, Advice::TestVisionModes]);
    }

    #[test]
    fn aa_pair_advised_toward_aaa() {
        assert_eq!(advice(&classify(5.0)), vec![Advice::AimForAaa, Advice::TestVisionModes]);
    }

    #[test]
    fn aaa_pair_is_excellent() {
        assert_eq!(advice(&classify(7.0)), vec![Advice::Excellent, Advice::TestVisionModes]);
    }

    #[test]
    fn advice_displays_sentence() {
        assert!(Advice::AimForAaa.to_string().contains("7:1"));
    }
}
