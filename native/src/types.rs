use serde::{Deserialize, Serialize};

use crate::math::wcag::ConformanceFlags;

/// A foreground/background pair as entered by the user. Colors may be any
/// CSS color value; translucent colors are composited before checking.
#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPair {
    pub foreground: String,
    pub background: String,
    pub is_large_text: Option<bool>,
    /// Free-form caller label, echoed back in the report.
    pub label: Option<String>,
}

impl ColorPair {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
            is_large_text: None,
            label: None,
        }
    }

    /// Same pair with foreground and background exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            foreground: self.background.clone(),
            background: self.foreground.clone(),
            ..self.clone()
        }
    }
}

/// Result of checking one pair. Colors are the effective (composited) colors
/// in canonical `#RRGGBB` form; `ratio` is rounded for display while the
/// pass flags come from the unrounded ratio.
#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub label: Option<String>,
    pub foreground: String,
    pub background: String,
    pub is_large_text: bool,
    pub ratio: f64,
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
    /// "AAA" | "AA" | "AA-Large" | "Fail"
    pub level: String,
    pub protanopia_ratio: f64,
    pub deuteranopia_ratio: f64,
    pub tritanopia_ratio: f64,
}

impl ContrastReport {
    pub fn flags(&self) -> ConformanceFlags {
        ConformanceFlags {
            aa_normal: self.pass_aa,
            aaa_normal: self.pass_aaa,
            aa_large: self.pass_aa_large,
            aaa_large: self.pass_aaa_large,
        }
    }
}

/// Pass/fail flags plus display level for a bare ratio.
#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub pass_aa: bool,
    pub pass_aa_large: bool,
    pub pass_aaa: bool,
    pub pass_aaa_large: bool,
    pub level: String,
    pub message: String,
}

impl From<ConformanceFlags> for Classification {
    fn from(flags: ConformanceFlags) -> Self {
        let level = flags.level();
        Self {
            pass_aa: flags.aa_normal,
            pass_aa_large: flags.aa_large,
            pass_aaa: flags.aaa_normal,
            pass_aaa_large: flags.aaa_large,
            level: level.to_string(),
            message: level.message().to_string(),
        }
    }
}

/// Batch input passed from JS to Rust.
#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOptions {
    pub pairs: Vec<ColorPair>,
    /// "AA" or "AAA"
    pub level: String,
}

/// Pairs split by whether they meet the requested level.
#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub violations: Vec<ContrastReport>,
    pub passed: Vec<ContrastReport>,
    /// Pairs whose colors could not be parsed.
    pub skipped_count: u32,
}

#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCell {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub level: String,
}

#[cfg_attr(feature = "napi", napi(object))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPair {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swapped_exchanges_colors_only() {
        let mut pair = ColorPair::new("#000000", "#ffffff");
        pair.is_large_text = Some(true);
        pair.label = Some("heading".to_string());
        let swapped = pair.swapped();
        assert_eq!(swapped.foreground, "#ffffff");
        assert_eq!(swapped.background, "#000000");
        assert_eq!(swapped.is_large_text, Some(true));
        assert_eq!(swapped.label.as_deref(), Some("heading"));
    }

    #[test]
    fn pair_deserializes_camel_case() {
        let pair: ColorPair =
            serde_json::from_str(r##"{"foreground":"#fff","background":"#000","isLargeText":true}"##).unwrap();
        assert_eq!(pair.is_large_text, Some(true));
        assert_eq!(pair.label, None);
    }

    #[test]
    fn classification_from_flags() {
        let c = Classification::from(crate::math::wcag::classify(3.5));
        assert!(!c.pass_aa);
        assert!(c.pass_aa_large);
        assert_eq!(c.level, "AA-Large");
        assert_eq!(c.message, "Acceptable for large text");
    }
}
