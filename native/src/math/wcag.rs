use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::hex::Color;
use crate::error::ParseError;

/// Convert sRGB channel (0-255) to linear light value.
/// WCAG 2.1 linearization: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * srgb_to_linear(color.r) + 0.7152 * srgb_to_linear(color.g) + 0.0722 * srgb_to_linear(color.b)
}

/// Calculate WCAG 2.1 contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Determine pass/fail for all WCAG thresholds.
pub fn classify(ratio: f64) -> ConformanceFlags {
    ConformanceFlags {
        aa_normal: ratio >= 4.5,
        aaa_normal: ratio >= 7.0,
        aa_large: ratio >= 3.0,
        aaa_large: ratio >= 4.5,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConformanceFlags {
    pub aa_normal: bool,
    pub aaa_normal: bool,
    pub aa_large: bool,
    pub aaa_large: bool,
}

impl ConformanceFlags {
    /// Display level, highest first: AAA, AA, AA-Large, Fail.
    pub fn level(&self) -> ConformanceLevel {
        if self.aaa_normal && self.aaa_large {
            ConformanceLevel::Aaa
        } else if self.aa_normal && self.aa_large {
            ConformanceLevel::Aa
        } else if self.aa_large {
            ConformanceLevel::AaLarge
        } else {
            ConformanceLevel::Fail
        }
    }

    /// Whether the pair meets `level` for normal or large text.
    pub fn passes(&self, level: WcagLevel, large_text: bool) -> bool {
        match (level, large_text) {
            (WcagLevel::Aa, false) => self.aa_normal,
            (WcagLevel::Aa, true) => self.aa_large,
            (WcagLevel::Aaa, false) => self.aaa_normal,
            (WcagLevel::Aaa, true) => self.aaa_large,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConformanceLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA-Large")]
    AaLarge,
    Fail,
}

impl ConformanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA-Large",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target conformance level: AA or AAA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WcagLevel {
    #[default]
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Minimum ratio for this level. Large text: 3.0 (AA) / 4.5 (AAA).
    pub fn threshold(self, large_text: bool) -> f64 {
        match (self, large_text) {
            (Self::Aa, false) => 4.5,
            (Self::Aa, true) => 3.0,
            (Self::Aaa, false) => 7.0,
            (Self::Aaa, true) => 4.5,
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

impl FromStr for WcagLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AA" => Ok(Self::Aa),
            "AAA" => Ok(Self::Aaa),
            _ => Err(ParseError::InvalidLevel { input: s.to_string() }),
        }
    }
}

/// Ratio and conformance flags for one foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub flags: ConformanceFlags,
}

impl ContrastResult {
    pub fn between(foreground: Color, background: Color) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            ratio,
            flags: classify(ratio),
        }
    }

    pub fn level(&self) -> ConformanceLevel {
        self.flags.level()
    }
}
