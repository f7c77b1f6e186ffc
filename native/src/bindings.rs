//! Node-API surface. Every function here is a thin wrapper: parse JS input,
//! call into the engine, map errors to JS exceptions.

use std::fmt::Display;

use crate::config::EngineConfig;
use crate::math::generate::generate_accessible_pair_with;
use crate::math::hex::{parse_color, Color};
use crate::math::vision::VisionMode;
use crate::math::wcag::{self, WcagLevel};
use crate::types::{BatchOptions, CheckResult, Classification, ColorPair, ContrastReport, GeneratedPair, MatrixCell};

fn to_napi_err(err: impl Display) -> napi::Error {
    napi::Error::from_reason(err.to_string())
}

fn parse(input: &str) -> napi::Result<Color> {
    parse_color(input).map_err(to_napi_err)
}

fn load_config(config_json: Option<String>) -> napi::Result<EngineConfig> {
    match config_json {
        Some(json) => EngineConfig::from_json(&json).map_err(to_napi_err),
        None => Ok(EngineConfig::default()),
    }
}

#[napi]
pub fn health_check() -> String {
    "contrast-engine-native ok".to_string()
}

#[napi]
pub fn init_logging(filter: Option<String>) -> bool {
    crate::logging::init_logging(filter.as_deref())
}

#[napi(js_name = "parseColor")]
pub fn parse_color_js(input: String) -> napi::Result<String> {
    parse(&input).map(|color| color.to_string())
}

/// Canonical form of a valid color, or `fallback` (default black) otherwise.
#[napi(js_name = "formatColor")]
pub fn format_color_js(input: String, fallback: Option<String>) -> napi::Result<String> {
    crate::math::hex::format_color_or(&input, fallback.as_deref()).map_err(to_napi_err)
}

#[napi(js_name = "relativeLuminance")]
pub fn relative_luminance_js(color: String) -> napi::Result<f64> {
    Ok(wcag::relative_luminance(parse(&color)?))
}

#[napi(js_name = "contrastRatio")]
pub fn contrast_ratio_js(foreground: String, background: String) -> napi::Result<f64> {
    Ok(wcag::contrast_ratio(parse(&foreground)?, parse(&background)?))
}

#[napi(js_name = "classify")]
pub fn classify_js(ratio: f64) -> Classification {
    wcag::classify(ratio).into()
}

#[napi(js_name = "generateAccessiblePair")]
pub fn generate_accessible_pair_js(level: String, config_json: Option<String>) -> napi::Result<GeneratedPair> {
    let level: WcagLevel = level.parse().map_err(to_napi_err)?;
    let config = load_config(config_json)?;
    let (fg, bg) =
        generate_accessible_pair_with(&mut rand::thread_rng(), level, config.max_attempts).map_err(to_napi_err)?;
    Ok(GeneratedPair {
        foreground: fg.to_string(),
        background: bg.to_string(),
        ratio: config.round_ratio(wcag::contrast_ratio(fg, bg)),
    })
}

#[napi]
pub fn check_pair(pair: ColorPair, config_json: Option<String>) -> napi::Result<ContrastReport> {
    let config = load_config(config_json)?;
    crate::math::checker::check_contrast(&pair, &config).map_err(to_napi_err)
}

#[napi]
pub fn check_pairs(options: BatchOptions, config_json: Option<String>) -> napi::Result<CheckResult> {
    let config = load_config(config_json)?;
    crate::engine::run_batch(&options, &config).map_err(to_napi_err)
}

#[napi(js_name = "contrastMatrix")]
pub fn contrast_matrix_js(palette: Vec<String>, config_json: Option<String>) -> napi::Result<Vec<MatrixCell>> {
    let config = load_config(config_json)?;
    crate::engine::contrast_matrix(&palette, &config).map_err(to_napi_err)
}

#[napi]
pub fn simulate_vision(color: String, mode: String) -> napi::Result<String> {
    let mode: VisionMode = mode.parse().map_err(to_napi_err)?;
    Ok(crate::math::vision::simulate(parse(&color)?, mode).to_string())
}

#[napi(js_name = "exportLine")]
pub fn export_line_js(foreground: String, background: String) -> napi::Result<String> {
    let (fg, bg) = (parse(&foreground)?, parse(&background)?);
    Ok(crate::report::export_line(fg, bg, wcag::contrast_ratio(fg, bg)))
}

#[napi(js_name = "advice")]
pub fn advice_js(ratio: f64) -> Vec<String> {
    crate::report::advice(&wcag::classify(ratio))
        .into_iter()
        .map(|a| a.to_string())
        .collect()
}
