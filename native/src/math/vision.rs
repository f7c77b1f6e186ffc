//! Color-vision deficiency simulation.
//!
//! Dichromacies use the severity-1.0 matrices of Machado, Oliveira & Fernandes
//! (2009), applied to linear RGB. Achromatopsia collapses to luminance gray.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::hex::Color;
use super::wcag::contrast_ratio;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionMode {
    #[default]
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

impl VisionMode {
    pub const ALL: [VisionMode; 5] = [
        Self::Normal,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }
}

impl fmt::Display for VisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisionMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::InvalidVisionMode { input: s.to_string() })
    }
}

type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [
    [0.152286, 1.052583, -0.204868],
    [0.114503, 0.786281, 0.099216],
    [-0.003882, -0.048116, 1.051998],
];

const DEUTERANOPIA: Matrix = [
    [0.367322, 0.860646, -0.227968],
    [0.280085, 0.672501, 0.047413],
    [-0.011820, 0.042940, 0.968881],
];

const TRITANOPIA: Matrix = [
    [1.255528, -0.076749, -0.178779],
    [-0.078411, 0.930809, 0.147602],
    [0.004733, 0.691367, 0.303900],
];

// IEC 61966-2-1 transfer functions
fn decode(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn encode(linear: f64) -> u8 {
    let v = linear.clamp(0.0, 1.0);
    let srgb = if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    (srgb * 255.0).round() as u8
}

fn apply(matrix: &Matrix, rgb: [f64; 3]) -> [f64; 3] {
    let row = |m: &[f64; 3]| m[0] * rgb[0] + m[1] * rgb[1] + m[2] * rgb[2];
    [row(&matrix[0]), row(&matrix[1]), row(&matrix[2])]
}

/// How `color` appears to a viewer with the given vision mode.
pub fn simulate(color: Color, mode: VisionMode) -> Color {
    let linear = color.channels().map(decode);
    let simulated = match mode {
        VisionMode::Normal => return color,
        VisionMode::Protanopia => apply(&PROTANOPIA, linear),
        VisionMode::Deuteranopia => apply(&DEUTERANOPIA, linear),
        VisionMode::Tritanopia => apply(&TRITANOPIA, linear),
        VisionMode::Achromatopsia => {
            let y = 0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2];
            [y, y, y]
        }
    };
    let [r, g, b] = simulated.map(encode);
    Color::new(r, g, b)
}

/// Contrast ratio of the pair as perceived under `mode`.
pub fn simulated_ratio(foreground: Color, background: Color, mode: VisionMode) -> f64 {
    contrast_ratio(simulate(foreground, mode), simulate(background, mode))
}
